//! Byte-level search helpers shared by the scanner and the classifier.
//!
//! Every needle is ASCII, so any match offset is also a char boundary of the
//! surrounding `str`.

pub(crate) fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

/// First offset at or after `from` where `needle` matches, ignoring ASCII case.
pub(crate) fn find_ascii_ci(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
        .map(|i| i + from)
}

pub(crate) fn ends_with_ascii_ci(haystack: &[u8], suffix: &[u8]) -> bool {
    haystack.len() >= suffix.len()
        && haystack[haystack.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

pub(crate) fn find_byte(haystack: &[u8], needle: u8, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| i + from)
}
