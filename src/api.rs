//! Web player API client
//!
//! Thin reqwest wrapper around the playlist and track endpoints the dialogs
//! act on.

mod playlists;

pub use playlists::{PlaylistApi, removed_tracks_message};
