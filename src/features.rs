//! Feature modules - logic separated from the console front end
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI code directly.

pub mod settings;
pub mod share;
pub mod track_menu;

pub use settings::{CloseBehavior, ReplacePolicy, Settings};
pub use share::ShareNetwork;
pub use track_menu::{DeleteState, MenuOptions, Track, TrackPermissions};
