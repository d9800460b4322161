//! Track context menu
//!
//! Decides which actions the context menu offers for a selection of tracks
//! and runs the delete confirmation through the dialog coordinator.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::dialog::{ConfirmationProps, Dialog, DialogCoordinator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub album: Option<Album>,
}

impl Track {
    /// Track known only by its id
    pub fn from_id(id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            artists: Vec::new(),
            album: None,
        }
    }
}

/// What the current user may do with the selection, computed by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackPermissions {
    pub can_edit: bool,
    pub can_delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions {
    pub show_add_to_queue: bool,
    /// Song radio is available
    pub show_radio: bool,
    /// Narrow layout, navigation entries replace "copy link"
    pub is_mobile: bool,
    /// A delete request is running, the delete entry is disabled
    pub is_deleting: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            show_add_to_queue: true,
            show_radio: false,
            is_mobile: false,
            is_deleting: false,
        }
    }
}

/// Context menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMenuItem {
    AddToQueue,
    ToggleInLibrary,
    AddToPlaylist,
    GoToRadio(u64),
    GoToArtist(u64),
    GoToAlbum(u64),
    GoToTrack(u64),
    CopyLink(u64),
    Share(u64),
    ToggleRepost(u64),
    Insights(u64),
    Edit(u64),
    Delete { disabled: bool },
}

impl std::fmt::Display for TrackMenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackMenuItem::AddToQueue => write!(f, "Add to queue"),
            TrackMenuItem::ToggleInLibrary => write!(f, "Save to library"),
            TrackMenuItem::AddToPlaylist => write!(f, "Add to playlist"),
            TrackMenuItem::GoToRadio(_) => write!(f, "Go to song radio"),
            TrackMenuItem::GoToArtist(_) => write!(f, "Go to artist"),
            TrackMenuItem::GoToAlbum(_) => write!(f, "Go to album"),
            TrackMenuItem::GoToTrack(_) => write!(f, "Go to track"),
            TrackMenuItem::CopyLink(_) => write!(f, "Copy song link"),
            TrackMenuItem::Share(_) => write!(f, "Share"),
            TrackMenuItem::ToggleRepost(_) => write!(f, "Repost"),
            TrackMenuItem::Insights(_) => write!(f, "Insights"),
            TrackMenuItem::Edit(_) => write!(f, "Edit"),
            TrackMenuItem::Delete { disabled: false } => write!(f, "Delete"),
            TrackMenuItem::Delete { disabled: true } => write!(f, "Delete (in progress)"),
        }
    }
}

/// Menu entries for `tracks`, in display order
///
/// Navigation and per-track entries only appear for a single track.
pub fn track_menu_items(
    tracks: &[Track],
    permissions: TrackPermissions,
    options: MenuOptions,
) -> Vec<TrackMenuItem> {
    let mut items = Vec::new();

    if options.show_add_to_queue {
        items.push(TrackMenuItem::AddToQueue);
    }
    items.push(TrackMenuItem::ToggleInLibrary);
    items.push(TrackMenuItem::AddToPlaylist);

    if let [track] = tracks {
        if options.show_radio {
            items.push(TrackMenuItem::GoToRadio(track.id));
        }

        if options.is_mobile {
            if let Some(artist) = track.artists.first() {
                items.push(TrackMenuItem::GoToArtist(artist.id));
            }
            if let Some(album) = &track.album {
                items.push(TrackMenuItem::GoToAlbum(album.id));
            }
            items.push(TrackMenuItem::GoToTrack(track.id));
        } else {
            items.push(TrackMenuItem::CopyLink(track.id));
        }

        items.push(TrackMenuItem::Share(track.id));
        items.push(TrackMenuItem::ToggleRepost(track.id));

        if permissions.can_edit {
            items.push(TrackMenuItem::Insights(track.id));
            items.push(TrackMenuItem::Edit(track.id));
        }
    }

    if permissions.can_delete {
        items.push(TrackMenuItem::Delete {
            disabled: options.is_deleting,
        });
    }

    items
}

/// Shared flag set while a track deletion is running
#[derive(Debug, Clone, Default)]
pub struct DeleteState {
    running: Arc<AtomicBool>,
}

impl DeleteState {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Mark a deletion as started, `None` while another one is running
    ///
    /// The flag clears when the returned guard is dropped.
    pub fn start(&self) -> Option<DeleteGuard> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| DeleteGuard {
                running: self.running.clone(),
            })
    }
}

#[derive(Debug)]
pub struct DeleteGuard {
    running: Arc<AtomicBool>,
}

impl Drop for DeleteGuard {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Confirmation shown before deleting tracks
pub fn delete_tracks_dialog() -> Dialog {
    Dialog::Confirmation(
        ConfirmationProps::new(
            "Delete tracks",
            "Are you sure you want to delete selected tracks?",
        )
        .confirm_label("Delete")
        .danger(),
    )
}

/// Ask the user to confirm deleting `tracks`
///
/// The dialog opens right away; the returned future resolves to `true` only
/// on an explicit confirmation. A dialog cancelled by the coordinator counts
/// as a refusal.
pub fn confirm_delete(
    dialogs: &DialogCoordinator,
    tracks: &[Track],
) -> impl Future<Output = bool> + use<> {
    let pending = if tracks.is_empty() {
        None
    } else {
        tracing::debug!("Asking to delete {} tracks", tracks.len());
        Some(dialogs.open(delete_tracks_dialog()))
    };

    async move {
        let Some(pending) = pending else {
            return false;
        };
        match pending.await {
            Ok(response) => response.is_confirmed(),
            Err(e) => {
                tracing::debug!("Delete confirmation ended without answer: {}", e);
                false
            }
        }
    }
}
