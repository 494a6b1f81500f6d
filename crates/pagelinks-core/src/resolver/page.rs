//! Reference addresses derived from the page's own address.

/// The page address and the two headers relative links are joined onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAddress<'a> {
    page: &'a str,
    root: &'a str,
    last_dir: &'a str,
}

impl<'a> PageAddress<'a> {
    /// Splits `page` (expected `scheme://host[/path...]`).
    ///
    /// - `root`: scheme and host, cut at the first `/` after `://`.
    /// - `last_dir`: cut after the last `/` of the path (query and fragment
    ///   ignored); the address without query/fragment when the path has none.
    pub fn new(page: &'a str) -> Self {
        let host_start = page.find("://").map(|i| i + 3).unwrap_or(0);
        let path_end = page[host_start..]
            .find(|c: char| c == '?' || c == '#')
            .map(|i| i + host_start)
            .unwrap_or(page.len());
        let path = &page[host_start..path_end];

        let root = match path.find('/') {
            Some(i) => &page[..host_start + i],
            None => &page[..path_end],
        };
        let last_dir = match path.rfind('/') {
            Some(i) => &page[..host_start + i + 1],
            None => &page[..path_end],
        };

        Self {
            page,
            root,
            last_dir,
        }
    }

    /// The address exactly as given.
    pub fn page(&self) -> &'a str {
        self.page
    }

    pub fn root(&self) -> &'a str {
        self.root
    }

    pub fn last_dir(&self) -> &'a str {
        self.last_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_in_subdirectory() {
        let p = PageAddress::new("https://ex.com/blog/post.html");
        assert_eq!(p.root(), "https://ex.com");
        assert_eq!(p.last_dir(), "https://ex.com/blog/");
        assert_eq!(p.page(), "https://ex.com/blog/post.html");
    }

    #[test]
    fn bare_host() {
        let p = PageAddress::new("https://github.com");
        assert_eq!(p.root(), "https://github.com");
        assert_eq!(p.last_dir(), "https://github.com");
    }

    #[test]
    fn host_with_trailing_slash() {
        let p = PageAddress::new("http://ex.com/");
        assert_eq!(p.root(), "http://ex.com");
        assert_eq!(p.last_dir(), "http://ex.com/");
    }

    #[test]
    fn query_slashes_are_ignored() {
        let p = PageAddress::new("https://ex.com/a/b?next=/c/d#x/y");
        assert_eq!(p.root(), "https://ex.com");
        assert_eq!(p.last_dir(), "https://ex.com/a/");

        let p = PageAddress::new("https://ex.com?next=/c/");
        assert_eq!(p.root(), "https://ex.com");
        assert_eq!(p.last_dir(), "https://ex.com");
    }
}
