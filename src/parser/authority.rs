//! Authority component parser (user information, host and port).

use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::escape::percent_decode;
use super::ParseResult;

/// Decomposed authority component.
///
/// Produced by [`authority`] and merged into
/// [`ParsedUri`](crate::types::uri::ParsedUri) by the orchestrating
/// parser; it has no lifecycle of its own beyond the parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    /// Host part; empty if the authority is absent.
    pub host: String,
    /// Port; 0 means no port was given.
    pub port: u16,
    /// Username from the user-information part; empty if absent.
    pub username: String,
    /// Password from the user-information part; empty if absent.
    pub password: String,
}

/// Parses the authority component, if any.
///
/// The authority is only present when the input starts with `//`. The
/// authority span then runs up to the first `/`, `?`, `#` or end of
/// input. Within the span the last `@` separates user-information from
/// host-port, user-information splits on its first `:` into username and
/// password, and the port is the all-digit suffix after the last `:` of
/// the host-port span. Username, password and host are percent-decoded.
///
/// Without a leading `//` nothing is consumed and a default (all empty,
/// port 0) [`Authority`] is returned.
pub fn authority(input: &[u8]) -> ParseResult<Authority> {
    if !input.starts_with(b"//") {
        return Ok((input, Authority::default()));
    }

    let rest = &input[2..];
    let end = rest
        .iter()
        .position(|&c| matches!(c, b'/' | b'?' | b'#'))
        .unwrap_or(rest.len());
    let (span, remainder) = rest.split_at(end);

    // The last '@' delimits user-information; '@' inside username or
    // password must be percent-encoded.
    let (userinfo, hostport) = match span.iter().rposition(|&c| c == b'@') {
        Some(at) => (&span[..at], &span[at + 1..]),
        None => (&span[..0], span),
    };

    let (username, password) = match userinfo.iter().position(|&c| c == b':') {
        Some(colon) => (
            percent_decode(&userinfo[..colon]).map_err(nom::Err::Failure)?,
            percent_decode(&userinfo[colon + 1..]).map_err(nom::Err::Failure)?,
        ),
        None => (
            percent_decode(userinfo).map_err(nom::Err::Failure)?,
            String::new(),
        ),
    };

    let (host_raw, port) = split_host_port(hostport)?;
    let host = percent_decode(host_raw).map_err(nom::Err::Failure)?;

    Ok((
        remainder,
        Authority {
            host,
            port,
            username,
            password,
        },
    ))
}

/// Splits a host-port span on the port delimiter.
///
/// A bracketed IPv6 literal (`[::1]`) is opaque up to its closing
/// bracket; the host is the text inside the brackets and only `:port` or
/// end of span may follow. Otherwise the port is introduced by the last
/// `:` whose suffix is all digits; a `:` with an empty suffix is an
/// error, while a non-digit suffix leaves the whole span as the host.
fn split_host_port(span: &[u8]) -> Result<(&[u8], u16), nom::Err<Error>> {
    if span.first() == Some(&b'[') {
        let close = span.iter().position(|&c| c == b']').ok_or_else(|| {
            nom::Err::Failure(Error::MalformedUri(format!(
                "unclosed '[' in authority '{}'",
                String::from_utf8_lossy(span)
            )))
        })?;
        let host = &span[1..close];
        let after = &span[close + 1..];
        return match after {
            [] => Ok((host, 0)),
            [b':', digits @ ..] => Ok((host, parse_port(digits, span)?)),
            _ => Err(nom::Err::Failure(Error::MalformedUri(format!(
                "unexpected characters after ']' in authority '{}'",
                String::from_utf8_lossy(span)
            )))),
        };
    }

    match span.iter().rposition(|&c| c == b':') {
        Some(colon) => {
            let digits = &span[colon + 1..];
            if digits.is_empty() {
                Err(nom::Err::Failure(Error::InvalidPort(format!(
                    "missing port after ':' in authority '{}'",
                    String::from_utf8_lossy(span)
                ))))
            } else if digits.iter().all(u8::is_ascii_digit) {
                Ok((&span[..colon], parse_port(digits, span)?))
            } else {
                // Not a port suffix (e.g. an unbracketed IPv6 literal);
                // the whole span is the host.
                Ok((span, 0))
            }
        }
        None => Ok((span, 0)),
    }
}

fn parse_port(digits: &[u8], span: &[u8]) -> Result<u16, nom::Err<Error>> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(nom::Err::Failure(Error::InvalidPort(format!(
            "port '{}' is not a number in authority '{}'",
            String::from_utf8_lossy(digits),
            String::from_utf8_lossy(span)
        ))));
    }

    let mut value: u32 = 0;
    for &d in digits {
        value = value * 10 + u32::from(d - b'0');
        if value > u32::from(u16::MAX) {
            return Err(nom::Err::Failure(Error::InvalidPort(format!(
                "port '{}' is out of range in authority '{}'",
                String::from_utf8_lossy(digits),
                String::from_utf8_lossy(span)
            ))));
        }
    }
    Ok(value as u16)
}
