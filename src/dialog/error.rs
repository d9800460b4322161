//! Dialog result errors

/// Why a pending dialog finished without a response
///
/// Only produced under [`ReplacePolicy::Cancel`](crate::features::ReplacePolicy::Cancel).
/// The default policy leaves replaced dialogs pending forever instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogError {
    /// Another dialog was opened before this one was closed
    Superseded,
    /// The coordinator went away while the dialog was still open
    Closed,
}

impl std::fmt::Display for DialogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogError::Superseded => write!(f, "dialog was replaced by another dialog"),
            DialogError::Closed => write!(f, "dialog coordinator shut down"),
        }
    }
}

impl std::error::Error for DialogError {}
