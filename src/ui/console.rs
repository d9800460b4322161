//! Console renderer for the dialog slot
//!
//! Prints a dialog's prompt once when it becomes active and turns answer
//! lines typed by the user into `close` calls.

use tokio::sync::watch;

use crate::dialog::{ActiveDialog, DialogCoordinator};
use crate::ui::components;
use crate::ui::widgets::Prompt;

/// Remembers which dialog session is already on screen
#[derive(Debug, Default)]
pub struct Renderer {
    shown: Option<u64>,
}

impl Renderer {
    /// Prompt to print for `snapshot`, or `None` if nothing new is showing
    pub fn render(&mut self, snapshot: Option<&ActiveDialog>) -> Option<Prompt> {
        let Some(active) = snapshot else {
            self.shown = None;
            return None;
        };

        if self.shown == Some(active.id) {
            return None;
        }
        self.shown = Some(active.id);
        Some(components::view(&active.dialog))
    }
}

/// Follow the dialog slot until the coordinator goes away
pub async fn render_loop(mut rx: watch::Receiver<Option<ActiveDialog>>) {
    let mut renderer = Renderer::default();
    loop {
        let prompt = renderer.render(rx.borrow_and_update().as_ref());
        if let Some(prompt) = prompt {
            println!("{}", prompt);
        }

        if rx.changed().await.is_err() {
            tracing::debug!("Dialog coordinator dropped, stopping renderer");
            break;
        }
    }
}

/// Feed an answer line to the active dialog
///
/// Returns `false` when no dialog is open or the answer was not understood.
pub fn submit_answer(dialogs: &DialogCoordinator, input: &str) -> bool {
    let Some(active) = dialogs.active() else {
        return false;
    };

    match components::answer(&active.dialog, input) {
        Some(response) => {
            dialogs.close(response);
            true
        }
        None => {
            tracing::debug!(
                "Unrecognized answer {:?} for {} dialog",
                input,
                active.dialog.kind()
            );
            false
        }
    }
}
