pub mod config;
pub mod logging;

// Pipeline, leaves first
pub mod taxonomy;
pub mod scanner;
pub mod resolver;
pub mod classify;
pub mod link_map;
pub mod parser;

mod text;

pub use link_map::{CategoryLinks, LinkKey, LinkMap};
pub use parser::{parse_links, LinkParser};
pub use taxonomy::ExtensionTaxonomy;
