//! Query component parser.

use std::collections::HashMap;

use super::escape::percent_decode;
use super::ParseResult;

/// Parses the query component, if any, into a key/value mapping.
///
/// The query is only present when the input starts with `?`. The span
/// then runs up to `#` or end of input and is split on `delimiter`
/// (usually [`QUERY_DELIMITER`](super::QUERY_DELIMITER), `;` for legacy
/// query strings). Each pair splits on its first `=`; a pair without `=`
/// gets an empty value. Keys and values are percent-decoded. Duplicate
/// keys keep the last occurrence; empty pairs are skipped.
///
/// Without a leading `?` nothing is consumed and an empty mapping is
/// returned.
pub fn query(input: &[u8], delimiter: u8) -> ParseResult<HashMap<String, String>> {
    if input.first() != Some(&b'?') {
        return Ok((input, HashMap::new()));
    }

    let rest = &input[1..];
    let end = rest
        .iter()
        .position(|&c| c == b'#')
        .unwrap_or(rest.len());
    let (span, remainder) = rest.split_at(end);

    let mut pairs = HashMap::new();
    for token in span.split(|&c| c == delimiter) {
        if token.is_empty() {
            continue;
        }
        let (key, value) = match token.iter().position(|&c| c == b'=') {
            Some(eq) => (&token[..eq], &token[eq + 1..]),
            None => (token, &token[token.len()..]),
        };
        pairs.insert(
            percent_decode(key).map_err(nom::Err::Failure)?,
            percent_decode(value).map_err(nom::Err::Failure)?,
        );
    }

    Ok((remainder, pairs))
}
