//! One-shot flash messages.
//!
//! A handler pushes a message; the next page that renders drains the queue.
//! Between requests the queue travels inside the signed session cookie.

use serde::{Deserialize, Serialize};

/// Severity of a flash message, also used as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
    Info,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
            FlashLevel::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

/// Read-once queue of pending flash messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlashQueue(Vec<Flash>);

impl FlashQueue {
    pub fn push(&mut self, level: FlashLevel, message: impl Into<String>) {
        self.0.push(Flash {
            level,
            message: message.into(),
        });
    }

    /// Removes and returns every queued message in insertion order.
    pub fn drain(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an identical message is already waiting.
    pub fn contains(&self, level: FlashLevel, message: &str) -> bool {
        self.0
            .iter()
            .any(|flash| flash.level == level && flash.message == message)
    }
}
