//! Map key with pinned-last ordering.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::classify::{EXTENDS_URL, OTHER};

/// Category or extension-bucket name.
///
/// Orders alphabetically, except that `extendsUrl` and then `other` sort after
/// every other key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LinkKey(String);

impl LinkKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn rank(&self) -> u8 {
        match self.0.as_str() {
            EXTENDS_URL => 1,
            OTHER => 2,
            _ => 0,
        }
    }
}

impl Ord for LinkKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for LinkKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LinkKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}
