use super::logging::init_logging;
use super::render::{print_messages, render_decoded, render_encoded, render_layout};
use super::setup::{Cli, Commands};
use clap::Parser;
use multitap::api::MultitapApi;
use multitap::config::{config_dir, MultitapConfig, OutputFormat};
use multitap::decoder::DecodeOptions;
use multitap::error::Result;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, warn};

/// Runs the CLI. Returns `Ok(false)` when some input failed to decode.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config();
    let format = cli.output.unwrap_or(config.output);

    match cli.command {
        Commands::Decode { inputs, strict } => {
            let options = DecodeOptions {
                strict: strict || config.strict,
            };
            handle_decode(&MultitapApi::new(options), inputs, format)
        }
        Commands::Encode { texts } => handle_encode(&MultitapApi::default(), &texts, format),
        Commands::Keypad => handle_keypad(&MultitapApi::default(), format),
    }
}

fn load_config() -> MultitapConfig {
    let Some(dir) = config_dir() else {
        return MultitapConfig::default();
    };
    match MultitapConfig::load(&dir) {
        Ok(config) => {
            debug!(dir = %dir.display(), ?config, "loaded config");
            config
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
            MultitapConfig::default()
        }
    }
}

fn handle_decode(api: &MultitapApi, inputs: Vec<String>, format: OutputFormat) -> Result<bool> {
    let inputs = if inputs.is_empty() && !io::stdin().is_terminal() {
        read_stdin_lines()?
    } else {
        inputs
    };

    let result = api.decode(&inputs);
    write_stdout(&render_decoded(&result.decoded, format)?)?;
    print_messages(&result.messages);
    Ok(!result.has_failures())
}

fn handle_encode(api: &MultitapApi, texts: &[String], format: OutputFormat) -> Result<bool> {
    let result = api.encode(texts)?;
    write_stdout(&render_encoded(&result.encoded, format)?)?;
    print_messages(&result.messages);
    Ok(true)
}

fn handle_keypad(api: &MultitapApi, format: OutputFormat) -> Result<bool> {
    let result = api.keypad();
    write_stdout(&render_layout(&result.layout, format)?)?;
    Ok(true)
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    debug!(count = lines.len(), "read inputs from stdin");
    Ok(lines)
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
