//! Path component parser.

use super::escape::percent_decode;
use super::ParseResult;

/// Parses the path component into its segments.
///
/// The path span runs up to the first `?` or `#` or end of input. A
/// single leading `/` is the root delimiter and produces no segment;
/// doubled or trailing slashes do produce empty segments. Segments are
/// split on `/` first and percent-decoded afterwards, so an encoded
/// `%2F` yields a literal `/` inside a segment instead of a new
/// separator.
pub fn path(input: &[u8]) -> ParseResult<Vec<String>> {
    let end = input
        .iter()
        .position(|&c| matches!(c, b'?' | b'#'))
        .unwrap_or(input.len());
    let (span, remainder) = input.split_at(end);

    if span.is_empty() {
        return Ok((remainder, Vec::new()));
    }

    let span = if span[0] == b'/' { &span[1..] } else { span };

    let mut segments = Vec::new();
    for raw in span.split(|&c| c == b'/') {
        segments.push(percent_decode(raw).map_err(nom::Err::Failure)?);
    }

    Ok((remainder, segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_path_absolute() {
        let (rem, segments) = path(b"/a/b").unwrap();
        assert!(rem.is_empty());
        assert_eq!(segments, vec!["a", "b"]);
    }

    #[test]
    fn test_path_relative() {
        let (rem, segments) = path(b"a/b/c").unwrap();
        assert!(rem.is_empty());
        assert_eq!(segments, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_path_empty() {
        let (rem, segments) = path(b"").unwrap();
        assert!(rem.is_empty());
        assert!(segments.is_empty());

        // Path absent entirely, query follows immediately
        let (rem, segments) = path(b"?k=v").unwrap();
        assert_eq!(rem, b"?k=v");
        assert!(segments.is_empty());
    }

    #[test]
    fn test_path_empty_segments() {
        // Doubled slash keeps its empty segment
        let (_, segments) = path(b"/a//b").unwrap();
        assert_eq!(segments, vec!["a", "", "b"]);

        // Trailing slash keeps its empty segment
        let (_, segments) = path(b"/a/").unwrap();
        assert_eq!(segments, vec!["a", ""]);

        // Bare root
        let (_, segments) = path(b"/").unwrap();
        assert_eq!(segments, vec![""]);
    }

    #[test]
    fn test_path_stops_at_delimiters() {
        let (rem, segments) = path(b"/a/b?query").unwrap();
        assert_eq!(rem, b"?query");
        assert_eq!(segments, vec!["a", "b"]);

        let (rem, segments) = path(b"/a/b#frag").unwrap();
        assert_eq!(rem, b"#frag");
        assert_eq!(segments, vec!["a", "b"]);
    }

    #[test]
    fn test_path_segments_decoded_after_split() {
        // %2F decodes to '/' inside a segment, not a new separator
        let (_, segments) = path(b"/a%2Fb/c").unwrap();
        assert_eq!(segments, vec!["a/b", "c"]);

        let (_, segments) = path(b"/with%20space").unwrap();
        assert_eq!(segments, vec!["with space"]);
    }

    #[test]
    fn test_path_invalid_encoding() {
        assert!(matches!(
            path(b"/a/%zz/b"),
            Err(nom::Err::Failure(Error::InvalidPercentEncoding(_)))
        ));
    }
}
