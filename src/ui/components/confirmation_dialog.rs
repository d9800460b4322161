//! Confirmation dialog component

use crate::dialog::{ConfirmationProps, DialogResponse};
use crate::ui::widgets::Prompt;

/// Build the confirmation prompt
pub fn view(props: &ConfirmationProps) -> Prompt {
    let mut prompt = Prompt::new(&props.title).danger(props.is_danger);
    if !props.body.is_empty() {
        prompt = prompt.line(&props.body);
    }
    prompt
        .choice(format!("y: {}", props.confirm_label))
        .choice("n: Cancel")
}

pub fn answer(props: &ConfirmationProps, input: &str) -> Option<DialogResponse> {
    if input.eq_ignore_ascii_case(&props.confirm_label) {
        return Some(DialogResponse::Confirmed(true));
    }

    match input.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(DialogResponse::Confirmed(true)),
        "n" | "no" | "cancel" => Some(DialogResponse::Confirmed(false)),
        _ => None,
    }
}
