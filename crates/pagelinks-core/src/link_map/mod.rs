//! Result mapping: category → links, flat or grouped by extension.

mod builder;
mod key;

pub use builder::LinkMapBuilder;
pub use key::LinkKey;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Links of one category.
///
/// Serialized as a JSON array when flat, as an object of extension → array
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryLinks {
    /// Every link shares one extension bucket.
    Flat(BTreeSet<String>),
    ByExtension(BTreeMap<LinkKey, BTreeSet<String>>),
}

impl CategoryLinks {
    pub fn len(&self) -> usize {
        match self {
            CategoryLinks::Flat(links) => links.len(),
            CategoryLinks::ByExtension(buckets) => buckets.values().map(BTreeSet::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, CategoryLinks::Flat(_))
    }

    /// All links, bucket by bucket.
    pub fn links(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            CategoryLinks::Flat(links) => Box::new(links.iter().map(String::as_str)),
            CategoryLinks::ByExtension(buckets) => {
                Box::new(buckets.values().flatten().map(String::as_str))
            }
        }
    }

    /// Links in one extension bucket (`None` for flat categories).
    pub fn extension(&self, extension: &str) -> Option<&BTreeSet<String>> {
        match self {
            CategoryLinks::Flat(_) => None,
            CategoryLinks::ByExtension(buckets) => buckets.get(&LinkKey::from(extension)),
        }
    }
}

/// Categorized, deduplicated, ordered links of one page. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkMap {
    categories: BTreeMap<LinkKey, CategoryLinks>,
}

impl LinkMap {
    pub(crate) fn new(categories: BTreeMap<LinkKey, CategoryLinks>) -> Self {
        Self { categories }
    }

    pub fn get(&self, category: &str) -> Option<&CategoryLinks> {
        self.categories.get(&LinkKey::from(category))
    }

    /// Category names in output order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(LinkKey::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryLinks)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of links across all categories.
    pub fn link_count(&self) -> usize {
        self.categories.values().map(CategoryLinks::len).sum()
    }
}
