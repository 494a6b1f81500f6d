//! Extension taxonomy: category → subcategory → known file extensions.
//!
//! The table is built once (the built-in defaults, optionally extended from
//! config) and only read afterwards. The classifier and the link map builder
//! borrow it; nothing mutates it while links are being parsed.

mod error;
mod table;

pub use error::TaxonomyError;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use table::{Table, DEFAULT_TABLE};

/// Extra extensions from config: `category → subcategory → [extension, ...]`.
pub type ExtraExtensions = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// A leaf of the taxonomy; its name is what links get classified as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcategory {
    name: String,
    extensions: BTreeSet<String>,
}

impl Subcategory {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extensions in alphabetical order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// Top-level grouping (media, server, internet, graphics, display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    subcategories: Vec<Subcategory>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }
}

/// Immutable extension lookup table.
#[derive(Debug, Clone)]
pub struct ExtensionTaxonomy {
    categories: Vec<Category>,
    /// Lowercased extension → (category index, subcategory index).
    index: HashMap<String, (usize, usize)>,
    longest: usize,
}

impl Default for ExtensionTaxonomy {
    fn default() -> Self {
        Self::from_table(DEFAULT_TABLE)
    }
}

impl ExtensionTaxonomy {
    fn from_table(table: Table) -> Self {
        let mut taxonomy = Self {
            categories: Vec::new(),
            index: HashMap::new(),
            longest: 0,
        };
        for (category, subcategories) in table {
            for (subcategory, extensions) in subcategories.iter() {
                let slot = taxonomy.slot(category, subcategory);
                for ext in extensions.iter() {
                    // First entry wins; the built-in table has no duplicates.
                    taxonomy.index.entry(ext.to_string()).or_insert(slot);
                    taxonomy.record(slot, ext);
                }
            }
        }
        taxonomy
    }

    /// Returns a copy of this taxonomy with `extras` merged in.
    ///
    /// New categories and subcategories are appended after the existing ones.
    /// Extensions are lowercased; listing an extension again under the
    /// subcategory that already owns it is a no-op, listing it under another
    /// one is an error.
    pub fn with_extensions(mut self, extras: &ExtraExtensions) -> Result<Self, TaxonomyError> {
        for (category, subcategories) in extras {
            for (subcategory, extensions) in subcategories {
                let slot = self.slot(category, subcategory);
                for raw in extensions {
                    let ext = raw.trim().to_ascii_lowercase();
                    validate_extension(&ext, category, subcategory)?;
                    match self.index.get(&ext) {
                        Some(existing) if *existing == slot => continue,
                        Some(&(c, s)) => {
                            return Err(TaxonomyError::DuplicateExtension {
                                extension: ext,
                                existing: format!(
                                    "{}.{}",
                                    self.categories[c].name, self.categories[c].subcategories[s].name
                                ),
                                category: category.clone(),
                                subcategory: subcategory.clone(),
                            });
                        }
                        None => {
                            self.index.insert(ext.clone(), slot);
                            self.record(slot, &ext);
                        }
                    }
                }
            }
        }
        Ok(self)
    }

    /// Finds (or appends) the category/subcategory pair and returns its indices.
    fn slot(&mut self, category: &str, subcategory: &str) -> (usize, usize) {
        let c = match self.categories.iter().position(|c| c.name == category) {
            Some(c) => c,
            None => {
                self.categories.push(Category {
                    name: category.to_string(),
                    subcategories: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        let subs = &mut self.categories[c].subcategories;
        let s = match subs.iter().position(|s| s.name == subcategory) {
            Some(s) => s,
            None => {
                subs.push(Subcategory {
                    name: subcategory.to_string(),
                    extensions: BTreeSet::new(),
                });
                subs.len() - 1
            }
        };
        (c, s)
    }

    fn record(&mut self, (c, s): (usize, usize), ext: &str) {
        self.longest = self.longest.max(ext.chars().count());
        self.categories[c].subcategories[s]
            .extensions
            .insert(ext.to_string());
    }

    /// `(category, subcategory)` owning `extension`, compared case-insensitively.
    pub fn lookup(&self, extension: &str) -> Option<(&str, &str)> {
        let (c, s) = self.find(extension)?;
        let category = &self.categories[c];
        Some((&category.name, &category.subcategories[s].name))
    }

    /// Subcategory name owning `extension`; this is the link category.
    pub fn subcategory_of(&self, extension: &str) -> Option<&str> {
        self.lookup(extension).map(|(_, sub)| sub)
    }

    pub fn is_known(&self, extension: &str) -> bool {
        self.find(extension).is_some()
    }

    fn find(&self, extension: &str) -> Option<(usize, usize)> {
        if extension.is_empty() || extension.len() > self.longest * 4 {
            return None;
        }
        if extension.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.get(&extension.to_ascii_lowercase()).copied()
        } else {
            self.index.get(extension).copied()
        }
    }

    /// Length in characters of the longest known extension.
    pub fn longest_extension_len(&self) -> usize {
        self.longest
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of known extensions.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn validate_extension(ext: &str, category: &str, subcategory: &str) -> Result<(), TaxonomyError> {
    if ext.is_empty() {
        return Err(TaxonomyError::EmptyExtension {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        });
    }
    if ext
        .chars()
        .any(|c| matches!(c, '.' | '/' | '?' | '#') || c.is_whitespace())
    {
        return Err(TaxonomyError::InvalidExtension {
            extension: ext.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extras(category: &str, subcategory: &str, exts: &[&str]) -> ExtraExtensions {
        let mut subs = BTreeMap::new();
        subs.insert(
            subcategory.to_string(),
            exts.iter().map(|e| e.to_string()).collect(),
        );
        let mut map = BTreeMap::new();
        map.insert(category.to_string(), subs);
        map
    }

    #[test]
    fn default_table_shape() {
        let t = ExtensionTaxonomy::default();
        let names: Vec<&str> = t.categories().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["media", "server", "internet", "graphics", "display"]
        );
        assert_eq!(t.len(), 130);
        assert_eq!(t.longest_extension_len(), 6);
    }

    #[test]
    fn lookup_known_extensions() {
        let t = ExtensionTaxonomy::default();
        assert_eq!(t.lookup("png"), Some(("graphics", "img")));
        assert_eq!(t.lookup("css"), Some(("internet", "style")));
        assert_eq!(t.subcategory_of("js"), Some("script"));
        assert_eq!(t.subcategory_of("pdf"), Some("text"));
        assert_eq!(t.subcategory_of("tar"), Some("database"));
        assert_eq!(t.subcategory_of("7z"), Some("compressed"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let t = ExtensionTaxonomy::default();
        assert_eq!(t.subcategory_of("PNG"), Some("img"));
        assert!(t.is_known("Html"));
    }

    #[test]
    fn lookup_unknown() {
        let t = ExtensionTaxonomy::default();
        assert_eq!(t.lookup("webp2"), None);
        assert_eq!(t.lookup(""), None);
        assert!(!t.is_known("com/blog/post"));
    }

    #[test]
    fn extras_extend_existing_subcategory() {
        let t = ExtensionTaxonomy::default()
            .with_extensions(&extras("internet", "script", &["MJS", "ts"]))
            .unwrap();
        assert_eq!(t.subcategory_of("mjs"), Some("script"));
        assert_eq!(t.subcategory_of("ts"), Some("script"));
        assert_eq!(t.len(), 132);
        assert_eq!(t.categories().len(), 5);
    }

    #[test]
    fn extras_add_new_category() {
        let t = ExtensionTaxonomy::default()
            .with_extensions(&extras("science", "dataset", &["parquet", "hdf5"]))
            .unwrap();
        assert_eq!(t.lookup("parquet"), Some(("science", "dataset")));
        assert_eq!(t.categories().last().unwrap().name(), "science");
        assert_eq!(t.longest_extension_len(), 7);
    }

    #[test]
    fn extras_repeat_in_same_subcategory_is_noop() {
        let t = ExtensionTaxonomy::default()
            .with_extensions(&extras("graphics", "img", &["png"]))
            .unwrap();
        assert_eq!(t.len(), 130);
    }

    #[test]
    fn extras_duplicate_across_subcategories_err() {
        let err = ExtensionTaxonomy::default()
            .with_extensions(&extras("internet", "script", &["png"]))
            .unwrap_err();
        match err {
            TaxonomyError::DuplicateExtension {
                extension,
                existing,
                ..
            } => {
                assert_eq!(extension, "png");
                assert_eq!(existing, "graphics.img");
            }
            other => panic!("expected DuplicateExtension, got {other:?}"),
        }
    }

    #[test]
    fn extras_invalid_extensions_err() {
        assert!(matches!(
            ExtensionTaxonomy::default().with_extensions(&extras("a", "b", &["  "])),
            Err(TaxonomyError::EmptyExtension { .. })
        ));
        assert!(matches!(
            ExtensionTaxonomy::default().with_extensions(&extras("a", "b", &["tar.gz"])),
            Err(TaxonomyError::InvalidExtension { .. })
        ));
    }
}
