//! Dialog components - one per dialog kind
//!
//! Each component builds the prompt for its props and maps an answer line to
//! a [`DialogResponse`]. `None` means the answer was not understood and the
//! dialog should stay open.

pub mod confirmation_dialog;
pub mod exit_dialog;
pub mod share_dialog;

use crate::dialog::{Dialog, DialogResponse};
use crate::ui::widgets::Prompt;

/// Build the prompt for any dialog
pub fn view(dialog: &Dialog) -> Prompt {
    match dialog {
        Dialog::Confirmation(props) => confirmation_dialog::view(props),
        Dialog::Exit(props) => exit_dialog::view(props),
        Dialog::Share(props) => share_dialog::view(props),
    }
}

/// Interpret an answer line for any dialog
pub fn answer(dialog: &Dialog, input: &str) -> Option<DialogResponse> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match dialog {
        Dialog::Confirmation(props) => confirmation_dialog::answer(props, input),
        Dialog::Exit(props) => exit_dialog::answer(props, input),
        Dialog::Share(props) => share_dialog::answer(props, input),
    }
}
