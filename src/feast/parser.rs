use anyhow::Result;

use crate::feast::{
    segmenter::{segment_tokens, FeastRecord},
    tokenizer::tokenize_feast_line,
};

// Best effort by design: any line yields a record, unknown words are kept
// verbatim in whichever field is being collected.
pub fn parse_feast_entry(line: &str) -> Result<FeastRecord> {
    let tokens = tokenize_feast_line(line)?;
    Ok(segment_tokens(&tokens))
}
