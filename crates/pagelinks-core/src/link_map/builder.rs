use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::classify::extension_bucket;
use crate::taxonomy::ExtensionTaxonomy;

use super::{CategoryLinks, LinkKey, LinkMap};

/// Spellings treated as the same address as `link`: itself, with one more
/// trailing `/`, and with one trailing `/` removed.
fn equivalent_spellings(link: &str) -> impl Iterator<Item = Cow<'_, str>> {
    [
        Some(Cow::Borrowed(link)),
        Some(Cow::Owned(format!("{link}/"))),
        link.strip_suffix('/').map(Cow::Borrowed),
    ]
    .into_iter()
    .flatten()
}

/// Accumulates classified links; ordering and flattening happen in
/// [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct LinkMapBuilder {
    categories: HashMap<String, Vec<String>>,
    seen: HashMap<String, HashSet<String>>,
}

impl LinkMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `link` under `category` unless an equivalent link is already
    /// there. Returns whether it was added; the first spelling seen is kept.
    pub fn insert(&mut self, category: &str, link: String) -> bool {
        let seen = self.seen.entry(category.to_string()).or_default();
        if equivalent_spellings(&link).any(|spelling| seen.contains(&*spelling)) {
            return false;
        }
        seen.insert(link.clone());
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(link);
        true
    }

    /// Number of distinct links accepted so far.
    pub fn link_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Groups each category by extension bucket and orders everything.
    /// `None` when nothing was inserted.
    pub fn finish(self, taxonomy: &ExtensionTaxonomy) -> Option<LinkMap> {
        if self.categories.is_empty() {
            return None;
        }
        let categories = self
            .categories
            .into_iter()
            .map(|(category, links)| (LinkKey::from(category), group(links, taxonomy)))
            .collect();
        Some(LinkMap::new(categories))
    }
}

fn group(links: Vec<String>, taxonomy: &ExtensionTaxonomy) -> CategoryLinks {
    let mut buckets: BTreeMap<LinkKey, BTreeSet<String>> = BTreeMap::new();
    for link in links {
        let bucket = extension_bucket(&link, taxonomy);
        buckets.entry(LinkKey::from(bucket)).or_default().insert(link);
    }
    if buckets.len() == 1 {
        if let Some((_, links)) = buckets.pop_first() {
            return CategoryLinks::Flat(links);
        }
    }
    CategoryLinks::ByExtension(buckets)
}
