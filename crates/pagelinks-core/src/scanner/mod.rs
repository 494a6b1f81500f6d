//! Link scanner: locates candidate links by literal markers.
//!
//! No markup grammar is involved. Each marker is a separate left-to-right
//! pass over the same buffer (`scan`), so passes can be tested on their own.
//! Attribute markers (`src=`, `href=`) catch ordinary tag attributes; the
//! bare-protocol marker (`http`) catches absolute links inside script
//! strings and text that no attribute marker reaches.

mod boundary;
mod continuation;

pub use boundary::end_of_link;

use crate::text::{ends_with_ascii_ci, find_ascii_ci, is_quote};

/// Literal prefix of the bare-protocol marker (matched case-sensitively).
pub const BARE_PROTOCOL: &str = "http";

/// A literal search key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `<name>=` followed by a quote, matched ignoring ASCII case.
    Attribute(&'static str),
    /// [`BARE_PROTOCOL`] anywhere in the text.
    BareProtocol,
}

/// Markers in scan order.
pub const MARKERS: [Marker; 3] = [
    Marker::Attribute("src"),
    Marker::Attribute("href"),
    Marker::BareProtocol,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Attribute,
    BareProtocol,
}

/// One located candidate link, borrowed from the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOccurrence<'a> {
    /// Link text exactly as it appears (not yet decoded or resolved).
    pub raw: &'a str,
    /// Byte offset the classifier looks back from: the attribute value start,
    /// or the protocol start for bare links.
    pub context_start: usize,
    pub kind: MarkerKind,
}

/// All occurrences for every marker, grouped by marker in [`MARKERS`] order.
pub fn scan_all(markup: &str) -> Vec<LinkOccurrence<'_>> {
    MARKERS
        .iter()
        .flat_map(|&marker| scan(markup, marker))
        .collect()
}

/// Occurrences of a single marker, in source order.
pub fn scan(markup: &str, marker: Marker) -> Vec<LinkOccurrence<'_>> {
    match marker {
        Marker::Attribute(name) => scan_attribute(markup, name),
        Marker::BareProtocol => scan_bare_protocol(markup),
    }
}

fn scan_attribute<'a>(markup: &'a str, name: &str) -> Vec<LinkOccurrence<'a>> {
    let bytes = markup.as_bytes();
    let needle = format!("{name}=");
    let mut out = Vec::new();
    let mut from = 0;

    while let Some(pos) = find_ascii_ci(bytes, needle.as_bytes(), from) {
        from = pos + 1;
        let quote_at = pos + needle.len();
        let quote = match bytes.get(quote_at) {
            Some(&q) if is_quote(q) => q,
            _ => continue,
        };
        let value_start = quote_at + 1;
        if is_empty_value(bytes, value_start) {
            continue;
        }

        let raw = if continuation::starts_concatenation(bytes, value_start) {
            match continuation::next_quoted_segment(markup, value_start, quote) {
                Some(raw) => raw,
                None => {
                    tracing::trace!(offset = value_start, "unterminated concatenated literal");
                    continue;
                }
            }
        } else {
            &markup[value_start..end_of_link(markup, value_start)]
        };

        out.push(LinkOccurrence {
            raw,
            context_start: value_start,
            kind: MarkerKind::Attribute,
        });
    }
    out
}

/// Empty, one-character, or truncated-at-EOF attribute values carry no link.
fn is_empty_value(bytes: &[u8], value_start: usize) -> bool {
    match bytes.get(value_start) {
        None => true,
        Some(&b) if is_quote(b) => true,
        Some(_) => matches!(bytes.get(value_start + 1), Some(&b) if is_quote(b)),
    }
}

fn scan_bare_protocol(markup: &str) -> Vec<LinkOccurrence<'_>> {
    let bytes = markup.as_bytes();
    let mut out = Vec::new();
    let mut from = 0;

    while let Some(rel) = markup[from..].find(BARE_PROTOCOL) {
        let pos = from + rel;
        from = pos + 1;
        if follows_attribute_marker(bytes, pos) {
            continue;
        }
        out.push(LinkOccurrence {
            raw: &markup[pos..end_of_link(markup, pos)],
            context_start: pos,
            kind: MarkerKind::BareProtocol,
        });
    }
    out
}

/// True when `pos` directly follows `src="`, `href='` etc., which the
/// attribute passes already produced.
fn follows_attribute_marker(bytes: &[u8], pos: usize) -> bool {
    if pos < 2 || !is_quote(bytes[pos - 1]) || bytes[pos - 2] != b'=' {
        return false;
    }
    let before = &bytes[..pos - 2];
    MARKERS.iter().any(|marker| match marker {
        Marker::Attribute(name) => ends_with_ascii_ci(before, name.as_bytes()),
        Marker::BareProtocol => false,
    })
}
