//! Percent-encoding decoder shared by every URI component parser.

use crate::error::{Error, Result};

/// Decodes percent-encoding (`%HH`) within a byte slice.
///
/// Decoding is byte oriented: each `%HH` pair is replaced by the single
/// byte it encodes, all other bytes are copied through unchanged. A `%`
/// that is not followed by exactly two hex digits fails with
/// [`Error::InvalidPercentEncoding`]; there is no lenient pass-through
/// mode. The decoded bytes must form valid UTF-8 to be returned as a
/// `String`.
pub fn percent_decode(input: &[u8]) -> Result<String> {
    let mut decoded: Vec<u8> = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        match input[i] {
            b'%' => {
                if i + 2 >= input.len() {
                    return Err(Error::InvalidPercentEncoding(format!(
                        "incomplete escape at end of '{}'",
                        String::from_utf8_lossy(input)
                    )));
                }
                let h1 = input[i + 1];
                let h2 = input[i + 2];
                match (hex_val(h1), hex_val(h2)) {
                    (Some(v1), Some(v2)) => {
                        decoded.push((v1 << 4) | v2);
                        i += 3;
                    }
                    _ => {
                        return Err(Error::InvalidPercentEncoding(format!(
                            "invalid hex sequence '%{}{}' in '{}'",
                            h1 as char,
                            h2 as char,
                            String::from_utf8_lossy(input)
                        )));
                    }
                }
            }
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded).map_err(|e| {
        Error::MalformedUri(format!(
            "'{}' is not valid UTF-8 after percent-decoding: {}",
            String::from_utf8_lossy(input),
            e
        ))
    })
}

// Value of one hex digit, None for anything outside [0-9a-fA-F].
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}
