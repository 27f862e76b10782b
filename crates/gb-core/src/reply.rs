//! Reply assembly
//!
//! Wire shape of a bot response: the chosen text, a wall-clock stamp and
//! the quick-reply labels for the client to render as buttons.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A fully assembled bot reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// The chosen response text
    pub text: String,
    /// Wall-clock time of construction, formatted HH:MM:SS
    pub timestamp: String,
    /// Quick-reply labels in presentation order
    pub quick_replies: Vec<String>,
}

impl Reply {
    /// Assemble a reply, stamping the current local time. No validation is
    /// performed on either field.
    pub fn new(text: impl Into<String>, quick_replies: Vec<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            quick_replies,
        }
    }
}
