//! # Decoder
//!
//! Turns a string of key presses into text, the way an old multi-tap handset did.
//!
//! ## Input Symbols
//!
//! | Symbol  | Meaning                                                      |
//! |---------|--------------------------------------------------------------|
//! | `0`-`9` | key press; repeating the same key cycles its characters      |
//! | ` `     | pause, commits the pending key without typing anything       |
//! | `*`     | backspace, commits the pending key and then deletes the last character |
//! | `#`     | send, commits the pending key and ends input                 |
//!
//! Everything after the first `#` is ignored. Any other symbol is skipped unless
//! [`DecodeOptions::strict`] is set.
//!
//! ## Examples
//!
//! ```
//! use multitap::decoder::decode;
//!
//! assert_eq!(decode(Some("4433555 555666#")).unwrap(), "HELLO");
//! assert_eq!(decode(Some("227*#")).unwrap(), "B");
//! ```
//!
//! Note the pause in `555 555`: without it the six presses would be a single run
//! on key `5`.

use crate::error::{MultitapError, Result};
use crate::keypad::resolve;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use tracing::{debug, trace};

pub const SEND: char = '#';
pub const BACKSPACE: char = '*';
pub const PAUSE: char = ' ';

/// One input character, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Digit(char),
    Pause,
    Backspace,
    Send,
    Other(char),
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        match c {
            SEND => Symbol::Send,
            BACKSPACE => Symbol::Backspace,
            PAUSE => Symbol::Pause,
            c if c.is_ascii_digit() => Symbol::Digit(c),
            other => Symbol::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Reject unrecognized symbols instead of skipping them.
    #[serde(default)]
    pub strict: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// The key currently being tapped and how many times it has been pressed.
#[derive(Debug, Default)]
struct TapAccumulator {
    pending: Option<(char, NonZeroUsize)>,
}

impl TapAccumulator {
    fn press(&mut self, digit: char, output: &mut String) {
        if let Some((pending, count)) = self.pending.as_mut() {
            if *pending == digit {
                *count = count.saturating_add(1);
                return;
            }
        }
        self.flush(output);
        self.pending = Some((digit, NonZeroUsize::MIN));
    }

    fn flush(&mut self, output: &mut String) {
        let Some((digit, presses)) = self.pending.take() else {
            return;
        };
        if let Some(ch) = resolve(digit, presses) {
            trace!(%digit, presses = presses.get(), %ch, "commit");
            output.push(ch);
        }
    }
}

/// Decodes keypad input with the default, lenient options.
///
/// `None` stands in for an absent input and is rejected with
/// [`MultitapError::NullInput`]. Input without a `#` anywhere is rejected with
/// [`MultitapError::MissingSend`].
pub fn decode(input: Option<&str>) -> Result<String> {
    decode_with(input, &DecodeOptions::default())
}

pub fn decode_with(input: Option<&str>, options: &DecodeOptions) -> Result<String> {
    let input = input.ok_or(MultitapError::NullInput)?;
    if !input.contains(SEND) {
        return Err(MultitapError::MissingSend);
    }
    if options.strict {
        check_symbols(input)?;
    }

    let mut output = String::new();
    let mut taps = TapAccumulator::default();

    for symbol in input.chars().map(Symbol::from) {
        match symbol {
            Symbol::Send => {
                taps.flush(&mut output);
                break;
            }
            Symbol::Backspace => {
                taps.flush(&mut output);
                let removed = output.pop();
                trace!(?removed, "backspace");
            }
            Symbol::Pause => taps.flush(&mut output),
            Symbol::Digit(digit) => taps.press(digit, &mut output),
            Symbol::Other(other) => trace!(symbol = ?other, "skipping unrecognized symbol"),
        }
    }

    debug!(
        input_len = input.len(),
        output_len = output.len(),
        "decoded keypad input"
    );
    Ok(output)
}

/// Fails on the first unrecognized symbol before the send character.
fn check_symbols(input: &str) -> Result<()> {
    for (position, c) in input.chars().enumerate() {
        match Symbol::from(c) {
            Symbol::Send => break,
            Symbol::Other(symbol) => {
                return Err(MultitapError::UnexpectedSymbol { symbol, position });
            }
            _ => {}
        }
    }
    Ok(())
}
