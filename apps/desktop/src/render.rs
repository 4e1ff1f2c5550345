use score_core::{DisplayModel, Highlight};

const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

pub fn render_display(model: &DisplayModel, color: bool) -> String {
    let score = match (model.highlight, color) {
        (Highlight::Winning, true) => format!("{GREEN}{}{RESET}", model.score_text),
        _ => model.score_text.clone(),
    };
    let decrement = if model.decrement_enabled {
        "[-] dec"
    } else {
        "[-] dec (disabled)"
    };

    let mut screen = format!("score: {score}\n");
    if let Some(message) = &model.winning_message {
        screen.push_str(message);
        screen.push('\n');
    }
    screen.push_str(&format!("[+] inc   {decrement}   [r] reset"));
    screen
}
