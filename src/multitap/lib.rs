//! # Multitap Architecture
//!
//! Multitap decodes the key presses of an old multi-tap phone keypad into text.
//! It is a **library that happens to have a CLI client**: the decoder knows
//! nothing about terminals, files, or exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config, sets up logging          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, holds DecodeOptions           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Batches inputs, collects results and messages            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (decoder.rs, encoder.rs, keypad.rs)                   │
//! │  - The tap state machine and the fixed layout table         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input Format
//!
//! Digits are key presses, a space is a pause, `*` is backspace and `#` is send.
//! See [`decoder`] for the full rules.
//!
//! ```
//! use multitap::decoder::decode;
//!
//! assert_eq!(decode(Some("8 88777444 666*664#")).unwrap(), "TURING");
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Batch operations returning `CmdResult`
//! - [`decoder`]: The tap state machine
//! - [`encoder`]: Text to key presses
//! - [`keypad`]: Layout table and character resolution
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod keypad;
