//! Quit handling and the exit dialog

use std::ops::ControlFlow;

use tokio::sync::mpsc;

use crate::app::{App, AppEvent};
use crate::dialog::{Dialog, DialogResponse, ExitAction, ExitProps, PendingDialog};
use crate::features::CloseBehavior;

impl App {
    /// Quit according to the configured close behavior
    pub(super) fn handle_quit(&mut self, force: bool) -> ControlFlow<()> {
        if force {
            tracing::info!("Forced exit");
            return ControlFlow::Break(());
        }

        match self.settings.close_behavior {
            CloseBehavior::Exit => ControlFlow::Break(()),
            CloseBehavior::MinimizeToTray => {
                let _ = self.events_tx.send(AppEvent::HiddenToTray);
                ControlFlow::Continue(())
            }
            CloseBehavior::Ask => {
                let pending = self.dialogs.open(Dialog::Exit(ExitProps::default()));
                tracing::debug!("Waiting for exit dialog #{}", pending.id());
                self.flows
                    .spawn(wait_for_exit_choice(pending, self.events_tx.clone()));
                ControlFlow::Continue(())
            }
        }
    }
}

/// Report the exit dialog's answer as app events
async fn wait_for_exit_choice(pending: PendingDialog, events: mpsc::UnboundedSender<AppEvent>) {
    match pending.await {
        Ok(DialogResponse::Exit(choice)) => {
            if choice.remember {
                let _ = events.send(AppEvent::RememberCloseBehavior(choice.action.into()));
            }
            let event = match choice.action {
                ExitAction::Exit => AppEvent::Quit,
                ExitAction::MinimizeToTray => AppEvent::HiddenToTray,
            };
            let _ = events.send(event);
        }
        Ok(other) => tracing::debug!("Exit dialog closed with {:?}", other),
        Err(e) => tracing::debug!("Exit dialog ended: {}", e),
    }
}
