//! # Command Layer
//!
//! Pure business logic for each user-facing operation. Commands take plain Rust
//! values and return a [`CmdResult`]; they never print, read stdin, or exit.
//! Anything a UI should tell the user travels back as a [`CmdMessage`].

use serde::Serialize;

pub mod decode;
pub mod encode;
pub mod keypad;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of decoding one input. Exactly one of `output` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    pub text: String,
    pub keys: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRow {
    pub digit: char,
    pub chars: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub decoded: Vec<Decoded>,
    pub encoded: Vec<Encoded>,
    pub layout: Vec<KeyRow>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_decoded(mut self, decoded: Vec<Decoded>) -> Self {
        self.decoded = decoded;
        self
    }

    pub fn with_encoded(mut self, encoded: Vec<Encoded>) -> Self {
        self.encoded = encoded;
        self
    }

    pub fn with_layout(mut self, layout: Vec<KeyRow>) -> Self {
        self.layout = layout;
        self
    }

    /// True when any input in the batch failed to decode.
    pub fn has_failures(&self) -> bool {
        self.decoded.iter().any(|d| d.error.is_some())
    }
}
