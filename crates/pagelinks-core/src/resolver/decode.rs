//! Literal decoding: escaped separators and percent-encoding.

use std::borrow::Cow;

use thiserror::Error;

use crate::scanner::MarkerKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DecodeError {
    #[error("malformed percent escape at byte {0}")]
    MalformedEscape(usize),
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Upper bound on percent-decode passes for multiply-escaped literals.
const MAX_DECODE_ROUNDS: usize = 4;

/// Decodes a link literal for resolution.
///
/// `\/` always becomes `/`. Attribute values are percent-decoded; bare
/// protocol hits only when they look like a real address start (`https`,
/// `http:` or `http%`). Decoding repeats until nothing changes (at most
/// [`MAX_DECODE_ROUNDS`] passes), so `%2541` ends as `A`. A failed pass keeps
/// what the previous passes produced.
pub(crate) fn decode_literal(raw: &str, kind: MarkerKind) -> Cow<'_, str> {
    let unescaped = unescape_slashes(raw);
    if !should_percent_decode(&unescaped, kind) {
        return unescaped;
    }
    let mut current = unescaped;
    for _ in 0..MAX_DECODE_ROUNDS {
        let decoded = match percent_decode(&current) {
            Ok(Cow::Owned(decoded)) => decoded,
            Ok(Cow::Borrowed(_)) => break,
            Err(err) => {
                tracing::trace!(literal = raw, error = %err, "keeping undecoded literal");
                break;
            }
        };
        current = Cow::Owned(unescape_slashes(&decoded).into_owned());
    }
    current
}

fn should_percent_decode(literal: &str, kind: MarkerKind) -> bool {
    match kind {
        MarkerKind::Attribute => true,
        MarkerKind::BareProtocol => {
            matches!(literal.as_bytes().get(4), Some(b's' | b':' | b'%'))
        }
    }
}

fn unescape_slashes(s: &str) -> Cow<'_, str> {
    if s.contains("\\/") {
        Cow::Owned(s.replace("\\/", "/"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Strict percent-decode: every `%` must start a two-hex-digit escape and the
/// result must be UTF-8. Borrows when there is nothing to decode.
pub(crate) fn percent_decode(input: &str) -> Result<Cow<'_, str>, DecodeError> {
    if !input.contains('%') {
        return Ok(Cow::Borrowed(input));
    }
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let high = bytes.get(i + 1).copied().and_then(hex_digit);
            let low = bytes.get(i + 2).copied().and_then(hex_digit);
            match (high, low) {
                (Some(high), Some(low)) => {
                    out.push(high << 4 | low);
                    i += 3;
                }
                _ => return Err(DecodeError::MalformedEscape(i)),
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(Cow::Owned(String::from_utf8(out)?))
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
