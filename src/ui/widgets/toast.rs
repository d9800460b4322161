//! Toast notification line
//!
//! One-line outcome notice printed after a flow finishes.

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastStyle {
    /// Get the icon for this style
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
            ToastStyle::Warning => "⚠",
            ToastStyle::Info => "ℹ",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }

    /// Print the toast to stdout
    pub fn show(&self) {
        println!("{}", self);
    }
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.style.icon(), self.message)
    }
}
