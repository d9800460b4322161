//! Main application module
//!
//! `App` is the composition root: it owns the settings, the one
//! [`DialogCoordinator`] of the process and the API client, and hands clones
//! of the latter two to the flows it spawns. Spawned flows are kept in a
//! [`JoinSet`] and finished before `run` returns.

mod command;
mod update;

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};

use crate::api::PlaylistApi;
use crate::dialog::{DialogCoordinator, DialogResponse};
use crate::features::{CloseBehavior, DeleteState, Settings};
use crate::ui::console;
use crate::ui::widgets::Toast;

pub use command::{Command, HELP};

/// Results reported back to the command loop by spawned flows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Leave the command loop
    Quit,
    /// The user chose to keep the player in the tray
    HiddenToTray,
    /// Persist a close behavior picked with "remember my choice"
    RememberCloseBehavior(CloseBehavior),
}

pub struct App {
    settings: Settings,
    /// Where settings are saved, `None` disables saving
    settings_path: Option<PathBuf>,
    dialogs: DialogCoordinator,
    api: PlaylistApi,
    /// Dialog and network flows started by commands
    flows: JoinSet<()>,
    deleting: DeleteState,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: Option<mpsc::UnboundedReceiver<AppEvent>>,
}

impl App {
    /// Create new application instance
    pub fn new(settings: Settings) -> Result<Self> {
        Self::with_settings_path(settings, Settings::file_path())
    }

    pub fn with_settings_path(settings: Settings, settings_path: Option<PathBuf>) -> Result<Self> {
        let dialogs = DialogCoordinator::with_policy(settings.dialogs.replace_policy);
        let api = PlaylistApi::new(&settings.network)?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        tracing::info!(
            "Using API at {} (close behavior: {}, replace policy: {:?})",
            settings.network.api_base_url,
            settings.close_behavior,
            dialogs.policy()
        );

        Ok(Self {
            settings,
            settings_path,
            dialogs,
            api,
            flows: JoinSet::new(),
            deleting: DeleteState::default(),
            events_tx,
            events_rx: Some(events_rx),
        })
    }

    /// Read commands and dialog answers from stdin until the user quits
    pub async fn run(mut self) -> Result<()> {
        let mut events_rx = self
            .events_rx
            .take()
            .context("Application is already running")?;
        let renderer = tokio::spawn(console::render_loop(self.dialogs.subscribe()));
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("Type `help` for commands.");

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read stdin")? else {
                        tracing::info!("stdin closed, shutting down");
                        break;
                    };
                    if self.handle_line(&line).is_break() {
                        break;
                    }
                }
                Some(event) = events_rx.recv() => {
                    if self.handle_event(event).is_break() {
                        break;
                    }
                }
            }
            self.reap_flows();
        }

        self.finish_flows().await;
        renderer.abort();
        Ok(())
    }

    /// Collect flows that already finished
    fn reap_flows(&mut self) {
        while let Some(result) = self.flows.try_join_next() {
            report_flow(result);
        }
    }

    /// Wait for running flows before shutting down
    ///
    /// An open dialog is dismissed first so flows waiting on it can finish.
    /// Flows still running after the network timeout are aborted and counted.
    async fn finish_flows(&mut self) {
        if self.flows.is_empty() {
            return;
        }

        if self.dialogs.is_active() {
            self.dialogs.close(DialogResponse::Dismissed);
        }

        let grace = Duration::from_secs(self.settings.network.timeout_secs + 1);
        tracing::info!("Waiting up to {:?} for {} flows", grace, self.flows.len());

        let flows = &mut self.flows;
        let drained = tokio::time::timeout(grace, async {
            while let Some(result) = flows.join_next().await {
                report_flow(result);
            }
        })
        .await;

        if drained.is_err() {
            let unfinished = self.flows.len();
            self.flows.shutdown().await;
            tracing::warn!("Aborted {} unfinished flows on exit", unfinished);
            Toast::warning(format!("Aborted {} unfinished actions", unfinished)).show();
        }
    }

    /// A line is an answer while a dialog is open, a command otherwise
    fn handle_line(&mut self, line: &str) -> ControlFlow<()> {
        if self.dialogs.is_active() {
            if !console::submit_answer(&self.dialogs, line) {
                println!("? Pick one of the listed answers");
            }
            return ControlFlow::Continue(());
        }

        match Command::parse(line) {
            Ok(Some(command)) => self.handle_command(command),
            Ok(None) => ControlFlow::Continue(()),
            Err(e) => {
                Toast::warning(e).show();
                ControlFlow::Continue(())
            }
        }
    }

    fn handle_event(&mut self, event: AppEvent) -> ControlFlow<()> {
        tracing::debug!("App event: {:?}", event);
        match event {
            AppEvent::Quit => return ControlFlow::Break(()),
            AppEvent::HiddenToTray => {
                Toast::info("Still running in the tray, `quit!` exits").show();
            }
            AppEvent::RememberCloseBehavior(behavior) => {
                self.settings.close_behavior = behavior;
                self.save_settings();
            }
        }
        ControlFlow::Continue(())
    }

    fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        match self.settings.save_to_file(path) {
            Ok(()) => tracing::info!("Settings saved to {:?}", path),
            Err(e) => tracing::warn!("Failed to save settings: {}", e),
        }
    }
}

fn report_flow(result: Result<(), JoinError>) {
    if let Err(e) = result {
        if e.is_panic() {
            tracing::error!("Flow panicked: {}", e);
            Toast::error("An action failed unexpectedly").show();
        }
    }
}
