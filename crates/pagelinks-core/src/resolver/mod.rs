//! URL resolver: turns a link occurrence into an absolute, normalized address.
//!
//! Resolution never fails loudly. A literal that cannot be percent-decoded is
//! used as-is, and a joined address that breaks the resolved-link invariants
//! (see [`check_resolved`]) is dropped with a trace event.

mod decode;
mod normalize;
mod page;

pub use normalize::{check_resolved, Rejection};
pub use page::PageAddress;

use crate::scanner::{LinkOccurrence, MarkerKind};

use decode::decode_literal;
use normalize::normalize;

/// Scheme given to protocol-relative (`//host/...`) references by default.
pub const DEFAULT_PROTOCOL_RELATIVE_SCHEME: &str = "https";

/// Resolves occurrences found on one page.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    page: PageAddress<'a>,
    scheme: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(page_address: &'a str) -> Self {
        Self {
            page: PageAddress::new(page_address),
            scheme: DEFAULT_PROTOCOL_RELATIVE_SCHEME,
        }
    }

    /// Overrides the scheme used for protocol-relative references.
    pub fn with_scheme(mut self, scheme: &'a str) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn page(&self) -> &PageAddress<'a> {
        &self.page
    }

    pub fn resolve(&self, occurrence: &LinkOccurrence<'_>) -> Option<String> {
        self.resolve_literal(occurrence.raw, occurrence.kind)
    }

    /// Decodes, joins, normalizes and validates one literal.
    pub fn resolve_literal(&self, raw: &str, kind: MarkerKind) -> Option<String> {
        let fragment = decode_literal(raw, kind);
        let link = normalize(&self.join(&fragment));
        match check_resolved(&link) {
            Ok(()) => Some(link),
            Err(reason) => {
                tracing::trace!(literal = raw, candidate = %link, %reason, "discarded link");
                None
            }
        }
    }

    /// Absolute form of `fragment`, chosen by how it starts.
    fn join(&self, fragment: &str) -> String {
        if let Some(rest) = fragment.strip_prefix("//") {
            return format!("{}://{}", self.scheme, rest);
        }
        if fragment.starts_with("http") {
            return fragment.to_string();
        }

        let header = match fragment.as_bytes().first() {
            Some(b'/') => self.page.root(),
            Some(b'#') => self.page.page(),
            _ => self.page.last_dir(),
        };
        if header.ends_with('/') || fragment.starts_with('/') || fragment.starts_with('#') {
            format!("{header}{fragment}")
        } else {
            format!("{header}/{fragment}")
        }
    }
}
