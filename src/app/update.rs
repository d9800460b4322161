//! Command handlers
//!
//! Handlers that need a dialog answer or a network round trip spawn a task
//! and return immediately so the command loop keeps reading answers.

mod exit;
mod share;
mod tracks;

use std::ops::ControlFlow;

use crate::app::{App, Command, HELP};

impl App {
    pub fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        tracing::debug!("Command: {:?}", command);
        match command {
            Command::Help => {
                println!("{}", HELP);
                ControlFlow::Continue(())
            }
            Command::Quit { force } => self.handle_quit(force),
            Command::Delete { track_ids } => {
                self.spawn_delete_tracks(track_ids);
                ControlFlow::Continue(())
            }
            Command::Remove {
                playlist_id,
                track_ids,
            } => {
                self.spawn_remove_tracks(playlist_id, track_ids);
                ControlFlow::Continue(())
            }
            Command::Menu {
                tracks,
                permissions,
                options,
            } => {
                self.show_track_menu(&tracks, permissions, options);
                ControlFlow::Continue(())
            }
            Command::Share { link, name } => {
                self.spawn_share(link, name);
                ControlFlow::Continue(())
            }
        }
    }
}
