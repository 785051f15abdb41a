//! Error types for URI decomposition

use thiserror::Error;

/// Errors raised while decomposing a URI string.
///
/// Every variant carries a human-readable message quoting the offending
/// substring, so callers can pinpoint the malformed component without
/// re-scanning the input themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A `:` delimits a candidate scheme, but the text before it is empty
    /// or violates `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    #[error("Malformed scheme: {0}")]
    MalformedScheme(String),

    /// The authority's port suffix is non-numeric, empty after a `:`,
    /// or does not fit in 16 bits.
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// A `%` is not followed by exactly two hexadecimal digits.
    #[error("Invalid percent encoding: {0}")]
    InvalidPercentEncoding(String),

    /// Structural violations not covered by the variants above.
    #[error("Malformed URI: {0}")]
    MalformedUri(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl<'a> nom::error::ParseError<&'a [u8]> for Error {
    fn from_error_kind(input: &'a [u8], _kind: nom::error::ErrorKind) -> Self {
        let snippet = String::from_utf8_lossy(&input[..input.len().min(32)]);
        Error::MalformedUri(format!("unexpected input near '{}'", snippet))
    }

    fn append(_input: &'a [u8], _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<Error>> for Error {
    fn from(err: nom::Err<Error>) -> Self {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => {
                Error::MalformedUri("unexpected end of input".to_string())
            }
        }
    }
}
