//! Bounded lookback for the tag a link sits in.

use crate::text::{find_ascii_ci, find_byte, is_quote};

/// Furthest distance (bytes) searched backwards for the opening `<`.
pub const MAX_TAG_LOOKBACK: usize = 8 * 1024;

/// Source text of one tag, from `<` up to (not including) its `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan<'a> {
    text: &'a str,
}

/// The unclosed tag containing `pos`, if any.
///
/// Walks backwards from `pos` to the nearest `<`; meeting a `>` first means
/// `pos` is outside any tag. Gives up after [`MAX_TAG_LOOKBACK`] bytes.
pub fn enclosing_tag(markup: &str, pos: usize) -> Option<TagSpan<'_>> {
    let bytes = markup.as_bytes();
    let pos = pos.min(bytes.len());
    let floor = pos.saturating_sub(MAX_TAG_LOOKBACK);

    let mut i = pos;
    let open = loop {
        if i == floor {
            return None;
        }
        i -= 1;
        match bytes[i] {
            b'<' => break i,
            b'>' => return None,
            _ => {}
        }
    };
    let close = find_byte(bytes, b'>', pos).unwrap_or(bytes.len());
    Some(TagSpan {
        text: &markup[open..close],
    })
}

impl<'a> TagSpan<'a> {
    /// Tag name as written (`img`, `SCRIPT`, `link`, ...).
    pub fn name(&self) -> &'a str {
        let rest = &self.text[1..];
        let end = rest
            .find(|c: char| c.is_ascii_whitespace() || matches!(c, '>' | '/' | '"' | '\''))
            .unwrap_or(rest.len());
        &rest[..end]
    }

    /// Value of attribute `name` (ASCII case-insensitive), quoted or bare.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        let mut from = 1;
        while let Some(pos) = find_ascii_ci(bytes, name.as_bytes(), from) {
            from = pos + 1;
            let eq = pos + name.len();
            if !bytes[pos - 1].is_ascii_whitespace() || bytes.get(eq) != Some(&b'=') {
                continue;
            }
            let value_start = eq + 1;
            let (start, end) = match bytes.get(value_start) {
                Some(&q) if is_quote(q) => {
                    let start = value_start + 1;
                    (start, find_byte(bytes, q, start).unwrap_or(bytes.len()))
                }
                _ => {
                    let end = bytes[value_start..]
                        .iter()
                        .position(|b| b.is_ascii_whitespace() || *b == b'>')
                        .map(|j| value_start + j)
                        .unwrap_or(bytes.len());
                    (value_start, end)
                }
            };
            return Some(&self.text[start..end]);
        }
        None
    }
}
