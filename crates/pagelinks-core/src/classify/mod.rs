//! Type classifier: one category per resolved link.
//!
//! Markup context is consulted first (enclosing tag name, then its `rel`
//! and `type` attributes); the extension taxonomy is the fallback. The
//! classifier never fails: a link nothing recognises is `extendsUrl` when it
//! lives under the page address and `other` otherwise.

mod extension;
mod tag;

pub use extension::{extension_bucket, link_extension};
pub use tag::{enclosing_tag, TagSpan, MAX_TAG_LOOKBACK};

use crate::resolver::PageAddress;
use crate::scanner::{LinkOccurrence, MarkerKind};
use crate::taxonomy::ExtensionTaxonomy;

/// Category for links that extend the page address but have no known type.
pub const EXTENDS_URL: &str = "extendsUrl";
/// Category (and extension bucket) for everything unrecognised.
pub const OTHER: &str = "other";
pub const STYLE: &str = "style";
pub const IMG: &str = "img";
pub const SCRIPT: &str = "script";

/// Tag names that are categories in their own right.
const CONTEXT_TAGS: [&str; 2] = [SCRIPT, IMG];

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    taxonomy: &'t ExtensionTaxonomy,
}

impl<'t> Classifier<'t> {
    pub fn new(taxonomy: &'t ExtensionTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Category of `link`, found at `occurrence` inside `markup`.
    pub fn classify(
        &self,
        markup: &str,
        occurrence: &LinkOccurrence<'_>,
        link: &str,
        page: &PageAddress<'_>,
    ) -> &'t str {
        if occurrence.kind == MarkerKind::Attribute {
            if let Some(category) =
                enclosing_tag(markup, occurrence.context_start).and_then(|tag| by_context(&tag))
            {
                return category;
            }
        }
        self.classify_by_extension(link, page)
    }

    /// Taxonomy lookup on the link's extension, ignoring markup.
    pub fn classify_by_extension(&self, link: &str, page: &PageAddress<'_>) -> &'t str {
        let extension = link_extension(link, self.taxonomy.longest_extension_len());
        match self.taxonomy.subcategory_of(extension) {
            Some(subcategory) => subcategory,
            None if link.starts_with(page.page()) => EXTENDS_URL,
            None => OTHER,
        }
    }
}

fn by_context(tag: &TagSpan<'_>) -> Option<&'static str> {
    let name = tag.name();
    if let Some(category) = CONTEXT_TAGS
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(name))
    {
        return Some(category);
    }
    if let Some(category) = tag.attribute("rel").and_then(by_rel) {
        return Some(category);
    }
    tag.attribute("type").and_then(by_type)
}

fn by_rel(rel: &str) -> Option<&'static str> {
    let rel = rel.trim();
    if rel.eq_ignore_ascii_case("stylesheet") {
        Some(STYLE)
    } else if rel.eq_ignore_ascii_case("icon") || rel.eq_ignore_ascii_case("shortcut icon") {
        Some(IMG)
    } else {
        None
    }
}

fn by_type(mime: &str) -> Option<&'static str> {
    let mime = mime.trim();
    if mime.eq_ignore_ascii_case("text/css") {
        Some(STYLE)
    } else if mime.eq_ignore_ascii_case("image/x-icon")
        || mime.eq_ignore_ascii_case("image/vnd.microsoft.icon")
    {
        Some(IMG)
    } else {
        None
    }
}
