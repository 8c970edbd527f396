//! Encodes text into the key presses that type it.
//!
//! This is the inverse of [`crate::decoder`]: for any text made of keypad
//! characters, decoding its encoding yields the same text upper-cased.

use crate::decoder::{PAUSE, SEND};
use crate::error::{MultitapError, Result};
use crate::keypad::KEYPAD;
use tracing::debug;

/// Returns the press sequence for `text`, terminated by `#`.
///
/// Consecutive characters on the same key are separated by a pause so they are
/// not merged into one run.
pub fn encode(text: &str) -> Result<String> {
    let mut out = String::new();
    let mut last_digit = None;

    for (position, ch) in text.chars().enumerate() {
        let key = KEYPAD
            .locate(ch)
            .ok_or(MultitapError::Unencodable { ch, position })?;
        if last_digit == Some(key.digit) {
            out.push(PAUSE);
        }
        out.extend(std::iter::repeat(key.digit).take(key.presses()));
        last_digit = Some(key.digit);
    }
    out.push(SEND);

    debug!(text_len = text.len(), presses = out.len(), "encoded text");
    Ok(out)
}
