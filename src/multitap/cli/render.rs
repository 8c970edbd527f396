//! # Rendering
//!
//! Turns a `CmdResult` into the strings the CLI prints. Data (decoded text, key
//! sequences, the layout) is rendered for stdout; messages are styled with
//! `colored` for stderr.

use colored::Colorize;
use multitap::commands::{CmdMessage, Decoded, Encoded, KeyRow, MessageLevel};
use multitap::config::OutputFormat;
use multitap::error::Result;
use serde::Serialize;

fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// One decoded line per successful input. Failures only show up as messages.
pub fn render_decoded(decoded: &[Decoded], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(decoded),
        OutputFormat::Text => Ok(decoded
            .iter()
            .filter_map(|d| d.output.as_deref())
            .map(|out| format!("{out}\n"))
            .collect()),
    }
}

pub fn render_encoded(encoded: &[Encoded], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(encoded),
        OutputFormat::Text => Ok(encoded.iter().map(|e| format!("{}\n", e.keys)).collect()),
    }
}

pub fn render_layout(layout: &[KeyRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(layout),
        OutputFormat::Text => Ok(layout
            .iter()
            .map(|row| {
                let chars = if row.chars == " " {
                    "(space)".to_string()
                } else {
                    row.chars
                        .chars()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                };
                format!("{}  {}\n", row.digit, chars)
            })
            .collect()),
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
