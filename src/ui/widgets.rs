//! Reusable console widgets - no business logic
//!
//! Widgets must not depend on `crate::app` or on dialog kinds.

mod prompt;
mod toast;

pub use prompt::Prompt;
pub use toast::Toast;
