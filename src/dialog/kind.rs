//! Dialog kinds and their typed props

use crate::features::ShareNetwork;

/// A dialog request: which dialog to show and the props it is shown with
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Yes/no confirmation
    Confirmation(ConfirmationProps),
    /// Ask whether closing the window should quit or hide to tray
    Exit(ExitProps),
    /// Pick a network to share a link on
    Share(ShareProps),
}

impl Dialog {
    pub fn kind(&self) -> DialogKind {
        match self {
            Dialog::Confirmation(_) => DialogKind::Confirmation,
            Dialog::Exit(_) => DialogKind::Exit,
            Dialog::Share(_) => DialogKind::Share,
        }
    }
}

/// Tag of a [`Dialog`] without its props
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Confirmation,
    Exit,
    Share,
}

impl std::fmt::Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogKind::Confirmation => write!(f, "confirmation"),
            DialogKind::Exit => write!(f, "exit"),
            DialogKind::Share => write!(f, "share"),
        }
    }
}

/// Props for [`Dialog::Confirmation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationProps {
    pub title: String,
    pub body: String,
    /// Label of the confirm button
    pub confirm_label: String,
    /// Destructive action, rendered with the danger style
    pub is_danger: bool,
}

impl ConfirmationProps {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn danger(mut self) -> Self {
        self.is_danger = true;
        self
    }
}

impl Default for ConfirmationProps {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            confirm_label: "Confirm".to_string(),
            is_danger: false,
        }
    }
}

/// Props for [`Dialog::Exit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitProps {
    /// Initial state of the "remember my choice" checkbox
    pub remember_choice: bool,
}

/// Props for [`Dialog::Share`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareProps {
    pub link: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Value a dialog is closed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResponse {
    /// Confirmation answer
    Confirmed(bool),
    /// Exit dialog answer
    Exit(ExitChoice),
    /// Network picked in the share dialog
    Share(ShareNetwork),
    /// Arbitrary payload for callers that close a dialog with a value of
    /// their own. None of the console components answer with it.
    #[allow(dead_code)]
    Text(String),
    /// Closed without an answer
    Dismissed,
}

impl DialogResponse {
    /// True only for an affirmative confirmation
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogResponse::Confirmed(true))
    }
}

/// What to do when the main window closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    Exit,
    MinimizeToTray,
}

/// Answer of the exit dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitChoice {
    pub action: ExitAction,
    /// Persist the action so the dialog is not shown again
    pub remember: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            Dialog::Confirmation(ConfirmationProps::default()).kind(),
            DialogKind::Confirmation
        );
        assert_eq!(Dialog::Exit(ExitProps::default()).kind(), DialogKind::Exit);
        assert_eq!(
            Dialog::Share(ShareProps::default()).kind(),
            DialogKind::Share
        );
    }

    #[test]
    fn confirmation_builder() {
        let props = ConfirmationProps::new("Delete tracks", "Sure?")
            .confirm_label("Delete")
            .danger();
        assert_eq!(props.title, "Delete tracks");
        assert_eq!(props.confirm_label, "Delete");
        assert!(props.is_danger);

        // Unset label keeps the default
        assert_eq!(ConfirmationProps::new("a", "b").confirm_label, "Confirm");
    }

    #[test]
    fn only_positive_confirmation_counts() {
        assert!(DialogResponse::Confirmed(true).is_confirmed());
        assert!(!DialogResponse::Confirmed(false).is_confirmed());
        assert!(!DialogResponse::Dismissed.is_confirmed());
        assert!(!DialogResponse::Text("yes".into()).is_confirmed());
    }
}
