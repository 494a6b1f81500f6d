//! Errors raised while extending the taxonomy from configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("empty extension listed under {category}.{subcategory}")]
    EmptyExtension {
        category: String,
        subcategory: String,
    },

    #[error(
        "invalid extension {extension:?} under {category}.{subcategory}: \
         must not contain '.', '/', '?', '#' or whitespace"
    )]
    InvalidExtension {
        extension: String,
        category: String,
        subcategory: String,
    },

    #[error(
        "extension {extension:?} already belongs to {existing}; \
         cannot also add it to {category}.{subcategory}"
    )]
    DuplicateExtension {
        extension: String,
        existing: String,
        category: String,
        subcategory: String,
    },
}
