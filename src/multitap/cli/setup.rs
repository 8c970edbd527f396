use clap::{Parser, Subcommand};
use multitap::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "multitap", bin_name = "multitap", version)]
#[command(about = "Decode old multi-tap phone keypad presses into text", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (defaults to the configured one, then text)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode key presses into text
    #[command(alias = "d")]
    Decode {
        /// Key press sequences, e.g. "4433555 555666#" (reads stdin lines if omitted)
        inputs: Vec<String>,

        /// Reject symbols other than digits, space, '*' and '#'
        #[arg(long)]
        strict: bool,
    },

    /// Print the key presses that type the given text
    #[command(alias = "e")]
    Encode {
        /// Text to encode
        #[arg(required = true, num_args = 1..)]
        texts: Vec<String>,
    },

    /// Show the keypad layout
    Keypad,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decode_with_inputs() {
        let cli = Cli::try_parse_from(["multitap", "decode", "33#", "4433555 555666#"]).unwrap();
        match cli.command {
            Commands::Decode { inputs, strict } => {
                assert_eq!(inputs, ["33#", "4433555 555666#"]);
                assert!(!strict);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.output, None);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["multitap", "d", "--strict", "-o", "json", "-v", "2#"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Decode { strict: true, .. }));
    }

    #[test]
    fn encode_requires_text() {
        assert!(Cli::try_parse_from(["multitap", "encode"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["multitap"]).is_err());
    }
}
