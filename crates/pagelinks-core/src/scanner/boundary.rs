//! Where a link literal ends.

const ENCODED_QUOTE: &[u8] = b"&quot;";

/// Byte offset of the first link delimiter at or after `start`.
///
/// Delimiters: `"`, `'`, ASCII whitespace, `&quot;`, `<` and `\`. Returns
/// `text.len()` when none follows.
pub fn end_of_link(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' | b'<' | b'\\' => return i,
            b if b.is_ascii_whitespace() => return i,
            b'&' if bytes[i..].starts_with(ENCODED_QUOTE) => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}
