use crate::core::{NumberPair, RawInput};
use crate::utils::error::{AocError, Result};

/// Parses two whitespace-separated integer columns, one pair per line.
///
/// The whole input is trimmed first, so surrounding blank lines and a trailing
/// newline are ignored. Input that is empty after trimming yields an empty
/// [`NumberPair`]. Any line inside the input that does not hold exactly two
/// integer tokens aborts the parse. Line numbers in errors are 1-based and
/// count from the first non-blank line.
pub fn parse(input: &RawInput) -> Result<NumberPair> {
    let text = std::str::from_utf8(input.as_bytes())?;
    parse_str(text)
}

pub fn parse_str(text: &str) -> Result<NumberPair> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(NumberPair::new());
    }

    let mut pairs = NumberPair::with_capacity(trimmed.lines().count());
    for (index, line) in trimmed.split('\n').enumerate() {
        let line_number = index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [left, right] = tokens.as_slice() else {
            return Err(AocError::MalformedLineError {
                line_number,
                line: line.trim_end_matches('\r').to_string(),
            });
        };
        pairs.push(
            parse_number(line_number, left)?,
            parse_number(line_number, right)?,
        );
    }

    tracing::debug!("Parsed {} pairs", pairs.len());
    Ok(pairs)
}

fn parse_number(line_number: usize, token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|source| AocError::InvalidNumberError {
            line_number,
            token: token.to_string(),
            source,
        })
}
