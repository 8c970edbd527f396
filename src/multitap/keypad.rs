//! # Keypad Layout
//!
//! The fixed multi-tap layout of a classic phone keypad, and the rule that turns a
//! run of presses on one key into a single character.
//!
//! Pressing a key N times selects its N-th character. Runs longer than the key's
//! character set wrap around, so pressing `2` four times gives the same result
//! as pressing it once:
//!
//! ```text
//! 2    -> A
//! 22   -> B
//! 222  -> C
//! 2222 -> A
//! ```
//!
//! Resolved letters are always upper-cased. Key `0` carries a single space.
//!
//! The table is built once per process in [`KEYPAD`] and never mutated afterwards,
//! so it can be read from any number of threads.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Keys in the order they appear on the pad, with their characters in press order.
const LAYOUT: [(char, &str); 10] = [
    ('1', "&'("),
    ('2', "abc"),
    ('3', "def"),
    ('4', "ghi"),
    ('5', "jkl"),
    ('6', "mno"),
    ('7', "pqrs"),
    ('8', "tuv"),
    ('9', "wxyz"),
    ('0', " "),
];

pub static KEYPAD: Lazy<Keypad> = Lazy::new(|| Keypad::from_layout(&LAYOUT));

/// Position of a character on the pad: the key it lives on and its zero-based
/// slot within that key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPosition {
    pub digit: char,
    pub index: usize,
}

impl KeyPosition {
    /// Number of presses needed to select this character.
    pub fn presses(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug)]
pub struct Keypad {
    order: Vec<char>,
    keys: HashMap<char, Vec<char>>,
    positions: HashMap<char, KeyPosition>,
}

impl Keypad {
    fn from_layout(layout: &[(char, &str)]) -> Self {
        let mut order = Vec::with_capacity(layout.len());
        let mut keys = HashMap::with_capacity(layout.len());
        let mut positions = HashMap::new();

        for (digit, chars) in layout {
            let chars: Vec<char> = chars.chars().collect();
            for (index, ch) in chars.iter().enumerate() {
                positions.insert(
                    *ch,
                    KeyPosition {
                        digit: *digit,
                        index,
                    },
                );
            }
            order.push(*digit);
            keys.insert(*digit, chars);
        }

        Self {
            order,
            keys,
            positions,
        }
    }

    /// Characters assigned to `digit`, in press order.
    pub fn chars(&self, digit: char) -> Option<&[char]> {
        self.keys.get(&digit).map(Vec::as_slice)
    }

    /// All keys in pad order (1-9, then 0).
    pub fn rows(&self) -> impl Iterator<Item = (char, &[char])> + '_ {
        self.order
            .iter()
            .filter_map(move |digit| self.chars(*digit).map(|chars| (*digit, chars)))
    }

    /// Where `ch` lives on the pad. Letters match case-insensitively.
    pub fn locate(&self, ch: char) -> Option<KeyPosition> {
        self.positions.get(&ch.to_ascii_lowercase()).copied()
    }
}

/// Resolves a run of `presses` on `digit` to the character it selects.
///
/// Returns `None` when the digit has no characters on the pad; callers treat that
/// as "nothing typed".
pub fn resolve(digit: char, presses: NonZeroUsize) -> Option<char> {
    let chars = KEYPAD.chars(digit)?;
    if chars.is_empty() {
        return None;
    }
    let index = (presses.get() - 1) % chars.len();
    Some(chars[index].to_ascii_uppercase())
}
