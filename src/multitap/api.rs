//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI clients.
//! It holds the decode options chosen by the client and dispatches; the logic
//! itself lives in `commands/*.rs`.
//!
//! Tests here only check dispatch and option handling.

use crate::commands::{self, CmdResult};
use crate::decoder::DecodeOptions;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MultitapApi {
    options: DecodeOptions,
}

impl MultitapApi {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn decode<I: AsRef<str>>(&self, inputs: &[I]) -> CmdResult {
        commands::decode::run(inputs, &self.options)
    }

    pub fn encode<I: AsRef<str>>(&self, texts: &[I]) -> Result<CmdResult> {
        commands::encode::run(texts)
    }

    pub fn keypad(&self) -> CmdResult {
        commands::keypad::run()
    }
}
