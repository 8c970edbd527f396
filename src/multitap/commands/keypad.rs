use crate::commands::{CmdResult, KeyRow};
use crate::keypad::KEYPAD;

pub fn run() -> CmdResult {
    let layout = KEYPAD
        .rows()
        .map(|(digit, chars)| KeyRow {
            digit,
            chars: chars.iter().collect(),
        })
        .collect();
    CmdResult::default().with_layout(layout)
}
