//! Scheme component parser.

use crate::error::Error;

use super::ParseResult;

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'+' | b'-' | b'.')
}

/// Parses the scheme component, if any.
///
/// The candidate scheme is everything before the first `:`, provided that
/// colon appears before any of `/`, `?` or `#`. A candidate that is empty
/// or violates the scheme grammar fails with
/// [`Error::MalformedScheme`]. When no such colon exists the scheme is
/// absent: the empty string is returned and no input is consumed. Case is
/// preserved as given.
pub fn scheme(input: &[u8]) -> ParseResult<String> {
    let end = input
        .iter()
        .position(|&c| matches!(c, b':' | b'/' | b'?' | b'#'))
        .unwrap_or(input.len());

    if end == input.len() || input[end] != b':' {
        // No scheme delimiter before the hierarchical part.
        return Ok((input, String::new()));
    }

    let candidate = &input[..end];
    if candidate.is_empty() {
        return Err(nom::Err::Failure(Error::MalformedScheme(format!(
            "empty scheme in '{}'",
            String::from_utf8_lossy(input)
        ))));
    }
    if !candidate[0].is_ascii_alphabetic() || !candidate.iter().all(|&c| is_scheme_char(c)) {
        return Err(nom::Err::Failure(Error::MalformedScheme(format!(
            "invalid scheme '{}'",
            String::from_utf8_lossy(candidate)
        ))));
    }

    Ok((
        &input[end + 1..],
        String::from_utf8_lossy(candidate).into_owned(),
    ))
}
