//! Extension extraction from resolved links.

use crate::taxonomy::ExtensionTaxonomy;

use super::OTHER;

/// Extension of `link`: the text after its last `.`.
///
/// When the link has exactly one `?` and a `.`- or `/`-delimited token of at
/// most `window` bytes ends right before it, that token wins
/// (`/app.js?v=1.2` → `js`).
pub fn link_extension(link: &str, window: usize) -> &str {
    let mut extension = match link.rfind('.') {
        Some(i) => &link[i + 1..],
        None => link,
    };
    if let Some(q) = link.find('?') {
        if link.rfind('?') == Some(q) {
            let head = &link[..q];
            if let Some(i) = head.rfind(|c: char| c == '.' || c == '/') {
                if q - (i + 1) <= window {
                    extension = &link[i + 1..q];
                }
            }
        }
    }
    extension
}

/// Key a link is grouped under inside its category: the lowercased
/// extension when the taxonomy knows it, `other` otherwise.
pub fn extension_bucket(link: &str, taxonomy: &ExtensionTaxonomy) -> String {
    let extension = link_extension(link, taxonomy.longest_extension_len());
    if taxonomy.is_known(extension) {
        extension.to_ascii_lowercase()
    } else {
        OTHER.to_string()
    }
}
