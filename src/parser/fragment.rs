//! Fragment component parser.

use super::escape::percent_decode;
use super::ParseResult;

/// Parses the fragment component, if any.
///
/// The fragment is only present when the input starts with `#`;
/// everything after it through end of input is percent-decoded and
/// returned. Without a leading `#` nothing is consumed and the empty
/// string is returned.
pub fn fragment(input: &[u8]) -> ParseResult<String> {
    if input.first() != Some(&b'#') {
        return Ok((input, String::new()));
    }

    let decoded = percent_decode(&input[1..]).map_err(nom::Err::Failure)?;
    Ok((&input[input.len()..], decoded))
}
