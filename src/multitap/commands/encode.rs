use crate::commands::{CmdResult, Encoded};
use crate::encoder::encode;
use crate::error::Result;

pub fn run<I: AsRef<str>>(texts: &[I]) -> Result<CmdResult> {
    let encoded = texts
        .iter()
        .map(|text| -> Result<Encoded> {
            let text = text.as_ref();
            Ok(Encoded {
                text: text.to_string(),
                keys: encode(text)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_encoded(encoded))
}
