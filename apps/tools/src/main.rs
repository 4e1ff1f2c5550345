use anyhow::Result;
use clap::{Parser, Subcommand};
use score_core::ScoreStore;
use shared::domain::CURRENT_SCORE_KEY;
use storage::{normalize_database_url, Storage};

mod report;

use report::ShowReport;

const DEFAULT_DATABASE_URL: &str = "sqlite://./data/scoresteal.db";

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
    #[arg(long, default_value = CURRENT_SCORE_KEY)]
    key: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the stored raw value and the state the app would restore.
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Store a raw value as-is; out-of-range values are clamped on restore.
    Set {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let database_url = normalize_database_url(&cli.database_url, DEFAULT_DATABASE_URL);
    let storage = Storage::new(&database_url).await?;

    match cli.command {
        Command::Show { json } => match storage.load_snapshot(&cli.key).await? {
            Some(stored) => {
                let report = ShowReport::new(&stored);
                if json {
                    println!("{}", report.to_json()?);
                } else {
                    println!("{}", report.to_text());
                }
            }
            None => println!("no score stored under {}", cli.key),
        },
        Command::Set { value } => {
            storage.save_score(&cli.key, value).await?;
            println!("stored {}={value}", cli.key);
        }
        Command::Clear => {
            storage.clear_score(&cli.key).await?;
            println!("cleared {}", cli.key);
        }
    }

    Ok(())
}
