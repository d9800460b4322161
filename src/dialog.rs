//! Modal dialog coordination
//!
//! A single [`DialogCoordinator`] owns the one modal slot of the application.
//! Callers open a [`Dialog`] and await its [`DialogResponse`]; the renderer
//! subscribes to the coordinator and closes the dialog once the user answers.

mod coordinator;
mod error;
mod kind;

pub use coordinator::{ActiveDialog, DialogCoordinator, PendingDialog};
pub use error::DialogError;
pub use kind::{
    ConfirmationProps, Dialog, DialogResponse, ExitAction, ExitChoice, ExitProps, ShareProps,
};
