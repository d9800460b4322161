//! Exit confirmation dialog component

use crate::dialog::{DialogResponse, ExitAction, ExitChoice, ExitProps};
use crate::ui::widgets::Prompt;

pub const TITLE: &str = "Close Rustle";

/// Build the exit prompt
pub fn view(props: &ExitProps) -> Prompt {
    let remember = if props.remember_choice { "x" } else { " " };
    Prompt::new(TITLE)
        .line("Quit the player or keep it running in the tray?")
        .line(format!("[{}] Remember my choice (append ! to toggle)", remember))
        .choice("exit")
        .choice("tray")
        .choice("cancel")
}

/// `exit` / `tray`, optionally followed by `!` to remember the choice
pub fn answer(props: &ExitProps, input: &str) -> Option<DialogResponse> {
    let (word, toggled) = match input.strip_suffix('!') {
        Some(word) => (word.trim(), true),
        None => (input, false),
    };

    let action = match word.to_ascii_lowercase().as_str() {
        "e" | "exit" | "quit" => ExitAction::Exit,
        "t" | "tray" | "minimize" => ExitAction::MinimizeToTray,
        "cancel" | "c" if !toggled => return Some(DialogResponse::Dismissed),
        _ => return None,
    };

    Some(DialogResponse::Exit(ExitChoice {
        action,
        remember: props.remember_choice != toggled,
    }))
}
