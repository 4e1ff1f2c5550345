use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use score_core::{persist_controller, restore_controller, SoundCue, SoundPlayer, WinNotifier};
use shared::domain::CURRENT_SCORE_KEY;
use storage::Storage;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;
mod repl;
mod session;
mod sound;

use config::{database_url, load_settings};
use session::Session;
use sound::SoundBank;

#[derive(Parser, Debug)]
#[command(name = "scoresteal", about = "Bounded score counter")]
struct Args {
    #[arg(long, default_value = "scoresteal.toml")]
    config: PathBuf,
    #[arg(long)]
    database_url: Option<String>,
    #[arg(long)]
    no_sound: bool,
    /// Disable ANSI colours.
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    if let Some(url) = args.database_url {
        settings.database_url = database_url(&url);
    }
    if args.no_sound {
        settings.sound_enabled = false;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!(database_url = %settings.database_url, "starting scoresteal");

    let storage = Storage::new(&settings.database_url).await?;
    let mut controller = restore_controller(&storage, CURRENT_SCORE_KEY).await?;

    let sounds = settings
        .sound_enabled
        .then(|| SoundBank::acquire([SoundCue::Win, SoundCue::Click], io::stderr()));
    if let Some(bank) = &sounds {
        controller.subscribe(Box::new(WinNotifier::new(bank.clone())));
    }
    let click = sounds
        .filter(|_| settings.click_feedback)
        .map(|bank| Box::new(bank) as Box<dyn SoundPlayer>);

    let color = !args.plain && io::stdout().is_terminal();
    let mut session = Session::new(
        controller,
        &settings.winning_message,
        click,
        color,
        io::stdout(),
    );
    session.render()?;

    let outcome = repl::drive(&mut session, &storage, BufReader::new(tokio::io::stdin())).await;
    let persisted = persist_controller(&storage, CURRENT_SCORE_KEY, session.controller()).await;
    outcome?;
    persisted
}
