//! # CLI Layer
//!
//! This is **one possible UI client** for multitap, not the decoder itself.
//! It is the only place that reads stdin, writes to stdout/stderr, installs the
//! log subscriber, or decides the exit status.
//!
//! ## Commands
//!
//! - `multitap decode [INPUT]...`: decode each argument. With no arguments and a
//!   piped stdin, each non-empty line of stdin is one input.
//! - `multitap encode <TEXT>...`: print the key presses that type each text.
//! - `multitap keypad`: print the layout table.
//!
//! Decoded text goes to stdout, one line per input. Failures go to stderr and
//! make the process exit with status 1, but never stop the rest of the batch.
//!
//! ## Module Structure
//!
//! - `commands`: `run()` plus per-command handlers
//! - `logging`: tracing subscriber setup
//! - `render`: text and JSON output
//! - `setup`: argument parsing via clap

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
