//! Links built by script string concatenation.
//!
//! Generated markup such as
//!
//! ```text
//! out += "<a href="+
//! "'https://example.com/profile'" + ">";
//! ```
//!
//! leaves the operator right after the attribute's opening quote; the real
//! link is the next quoted literal.

use crate::text::{find_byte, is_quote};

/// True when the attribute value opens with `+` or ` +`.
pub(super) fn starts_concatenation(bytes: &[u8], value_start: usize) -> bool {
    match bytes.get(value_start) {
        Some(b'+') => true,
        Some(b' ') => bytes.get(value_start + 1) == Some(&b'+'),
        _ => false,
    }
}

/// Literal following a concatenation operator.
///
/// Finds the next `quote` (the attribute's own quote character). If a second
/// quote character sits right after it, the literal is delimited by that inner
/// quote; otherwise by `quote` again. `None` when either boundary is missing.
pub(super) fn next_quoted_segment(markup: &str, value_start: usize, quote: u8) -> Option<&str> {
    let bytes = markup.as_bytes();
    let reopen = find_byte(bytes, quote, value_start)?;
    let (start, closer) = match bytes.get(reopen + 1) {
        Some(&inner) if is_quote(inner) => (reopen + 2, inner),
        _ => (reopen + 1, quote),
    };
    let end = find_byte(bytes, closer, start)?;
    Some(&markup[start..end])
}
