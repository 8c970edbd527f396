use crate::commands::{CmdMessage, CmdResult, Decoded};
use crate::decoder::{decode_with, DecodeOptions};
use tracing::debug;

/// Decodes each input on its own. A failing input is reported and the rest of the
/// batch still runs.
pub fn run<I: AsRef<str>>(inputs: &[I], options: &DecodeOptions) -> CmdResult {
    let mut result = CmdResult::default();
    let mut decoded = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();
        match decode_with(Some(input), options) {
            Ok(output) => decoded.push(Decoded {
                input: input.to_string(),
                output: Some(output),
                error: None,
            }),
            Err(e) => {
                debug!(input, error = %e, "failed to decode");
                result.add_message(CmdMessage::error(format!("{input:?}: {e}")));
                decoded.push(Decoded {
                    input: input.to_string(),
                    output: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if inputs.is_empty() {
        result.add_message(CmdMessage::info("Nothing to decode."));
    }

    result.with_decoded(decoded)
}
