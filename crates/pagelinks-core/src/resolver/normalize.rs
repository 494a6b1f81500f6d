//! Post-join cleanup and the resolved-link invariants.

use thiserror::Error;

/// Script no-op placeholders removed from links, longest first.
const VOID_PLACEHOLDERS: [&str; 2] = ["javascript:void(0);", "javascript:void(0)"];

/// Collapses `/` runs, restores `://`, unescapes `&amp;`, strips placeholders.
pub(crate) fn normalize(link: &str) -> String {
    let mut collapsed = String::with_capacity(link.len() + 1);
    let mut prev_slash = false;
    for c in link.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        collapsed.push(c);
    }

    let mut out = collapsed.replace(":/", "://");
    // `&amp;amp;` comes from markup escaped twice; unescape to a fixed point.
    while out.contains("&amp;") {
        out = out.replace("&amp;", "&");
    }
    for placeholder in VOID_PLACEHOLDERS {
        if out.contains(placeholder) {
            out = out.replace(placeholder, "");
        }
    }
    out
}

/// Why a joined candidate is not a resolved link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no scheme separator")]
    NoSchemeSeparator,
    #[error("no dot")]
    NoDot,
    #[error("ends in '.' or '='")]
    DanglingEnd,
    #[error("parent-directory segment")]
    ParentTraversal,
}

/// Checks the invariants every emitted link satisfies.
pub fn check_resolved(link: &str) -> Result<(), Rejection> {
    if !link.contains("//") {
        return Err(Rejection::NoSchemeSeparator);
    }
    if !link.contains('.') {
        return Err(Rejection::NoDot);
    }
    if link.contains("/../") || link.ends_with("/..") {
        return Err(Rejection::ParentTraversal);
    }
    if link.ends_with('.') || link.ends_with('=') {
        return Err(Rejection::DanglingEnd);
    }
    Ok(())
}
