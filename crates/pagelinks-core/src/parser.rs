//! Link parser: scan → resolve → classify → dedup/sort for one page.

use crate::classify::Classifier;
use crate::config::LinksConfig;
use crate::link_map::{LinkMap, LinkMapBuilder};
use crate::resolver::{Resolver, DEFAULT_PROTOCOL_RELATIVE_SCHEME};
use crate::scanner::scan_all;
use crate::taxonomy::{ExtensionTaxonomy, TaxonomyError};

/// Reusable, immutable parser. Holds the taxonomy and resolver options;
/// each [`parse`](Self::parse) call is independent.
#[derive(Debug, Clone)]
pub struct LinkParser {
    taxonomy: ExtensionTaxonomy,
    protocol_relative_scheme: String,
}

impl Default for LinkParser {
    fn default() -> Self {
        Self::new(ExtensionTaxonomy::default())
    }
}

impl LinkParser {
    pub fn new(taxonomy: ExtensionTaxonomy) -> Self {
        Self {
            taxonomy,
            protocol_relative_scheme: DEFAULT_PROTOCOL_RELATIVE_SCHEME.to_string(),
        }
    }

    pub fn with_protocol_relative_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.protocol_relative_scheme = scheme.into();
        self
    }

    /// Default taxonomy plus the config's extra extensions.
    pub fn from_config(cfg: &LinksConfig) -> Result<Self, TaxonomyError> {
        let taxonomy = ExtensionTaxonomy::default().with_extensions(&cfg.extra_extensions)?;
        Ok(Self::new(taxonomy).with_protocol_relative_scheme(&cfg.protocol_relative_scheme))
    }

    pub fn taxonomy(&self) -> &ExtensionTaxonomy {
        &self.taxonomy
    }

    /// Categorized links of `markup`, resolved against `page`.
    /// `None` when nothing survives resolution.
    pub fn parse(&self, markup: &str, page: &str) -> Option<LinkMap> {
        let resolver = Resolver::new(page).with_scheme(&self.protocol_relative_scheme);
        let classifier = Classifier::new(&self.taxonomy);
        let mut builder = LinkMapBuilder::new();

        let occurrences = scan_all(markup);
        for occurrence in &occurrences {
            let Some(link) = resolver.resolve(occurrence) else {
                continue;
            };
            let category = classifier.classify(markup, occurrence, &link, resolver.page());
            builder.insert(category, link);
        }

        let accepted = builder.link_count();
        let map = builder.finish(&self.taxonomy);
        tracing::debug!(
            page,
            occurrences = occurrences.len(),
            accepted,
            categories = map.as_ref().map_or(0, LinkMap::len),
            "parsed links"
        );
        map
    }
}

/// [`LinkParser::parse`] with the built-in taxonomy.
pub fn parse_links(markup: &str, page: &str) -> Option<LinkMap> {
    LinkParser::default().parse(markup, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ExtraExtensions;

    const PAGE: &str = "https://ex.com/blog/post.html";

    #[test]
    fn parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LinkParser>();
    }

    #[test]
    fn config_scheme_applies() {
        let cfg = LinksConfig {
            protocol_relative_scheme: "http".into(),
            ..LinksConfig::default()
        };
        let parser = LinkParser::from_config(&cfg).unwrap();
        let map = parser
            .parse(r#"<script src="//cdn.ex.net/lib.js"></script>"#, PAGE)
            .unwrap();
        let links: Vec<&str> = map.get("script").unwrap().links().collect();
        assert_eq!(links, ["http://cdn.ex.net/lib.js"]);
    }

    #[test]
    fn config_extras_drive_classification() {
        let mut extras = ExtraExtensions::new();
        extras
            .entry("graphics".into())
            .or_default()
            .insert("img".into(), vec!["webp".into()]);
        let cfg = LinksConfig {
            extra_extensions: extras,
            ..LinksConfig::default()
        };
        let parser = LinkParser::from_config(&cfg).unwrap();
        let map = parser.parse(r#"<a href="/hero.webp">"#, PAGE).unwrap();
        assert!(map.get("img").is_some());
        assert!(parse_links(r#"<a href="/hero.webp">"#, PAGE)
            .unwrap()
            .get("other")
            .is_some());
    }

    #[test]
    fn invalid_extras_are_rejected() {
        let mut extras = ExtraExtensions::new();
        extras
            .entry("graphics".into())
            .or_default()
            .insert("video".into(), vec!["png".into()]);
        let cfg = LinksConfig {
            extra_extensions: extras,
            ..LinksConfig::default()
        };
        assert!(matches!(
            LinkParser::from_config(&cfg),
            Err(TaxonomyError::DuplicateExtension { .. })
        ));
    }

    #[test]
    fn only_rejected_candidates_is_none() {
        assert_eq!(parse_links(r#"<a href="../up.png">"#, PAGE), None);
    }
}
