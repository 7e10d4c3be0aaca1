//! Toast notification payloads.
//!
//! A toast is a short-lived, fire-and-forget UI notification. Payloads are
//! constructed fresh per emission and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event name used when a toast is bridged onto the named UI event channel.
pub const TOAST_EVENT: &str = "algoirl:toast";

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The immutable notification unit broadcast to listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastPayload {
    /// Severity of the notification.
    pub kind: ToastKind,
    /// Human-readable message shown to the user.
    pub message: String,
}

impl ToastPayload {
    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}
