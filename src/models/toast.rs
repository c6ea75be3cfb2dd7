//! Toast notification types.

/// Severity of a toast, mapped to a CSS class and a heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Bold heading shown before the message.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success!",
            Self::Warning => "Warning",
            Self::Error => "Error!",
        }
    }
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique id used for keyed rendering and dismissal
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}
