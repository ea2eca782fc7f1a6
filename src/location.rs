//! Host location access for page synchronization.
//!
//! The store mirrors its current page into a query parameter of the host's
//! URL. All access goes through the [`Location`] trait so the store can run
//! against a real host, an embedded web view, or the in-memory
//! [`UrlLocation`] used in tests.

use crate::error::{Error, Result};
use url::Url;

/// Read/replace access to the host's current URL.
///
/// Implementations must treat writes as in-place replacements: no new
/// history entry, no navigation, no reload.
pub trait Location {
    /// Returns the raw value of query parameter `name`, if present.
    ///
    /// When the parameter appears more than once, the first occurrence wins.
    fn read_page_param(&self, name: &str) -> Option<String>;

    /// Sets query parameter `name` to `value`, or removes it when `value`
    /// is `None`.
    fn write_page_param(&mut self, name: &str, value: Option<&str>);

    /// Returns the full current URL.
    fn href(&self) -> String;
}

/// A [`Location`] backed by a parsed [`url::Url`].
///
/// Writes keep every other query parameter in its original position, keep
/// the fragment, and drop the `?` entirely once the query becomes empty.
///
/// # Examples
///
/// ```
/// use company_table::location::{Location, UrlLocation};
///
/// let mut location = UrlLocation::parse("https://example.com/companies?sort=name").unwrap();
/// location.write_page_param("page", Some("2"));
/// assert_eq!(location.href(), "https://example.com/companies?sort=name&page=2");
///
/// location.write_page_param("page", None);
/// assert_eq!(location.href(), "https://example.com/companies?sort=name");
/// ```
#[derive(Debug, Clone)]
pub struct UrlLocation {
    url: Url,
    replacements: usize,
}

impl UrlLocation {
    /// Wraps an already parsed URL.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            replacements: 0,
        }
    }

    /// Parses `input` as an absolute URL.
    pub fn parse(input: &str) -> Result<Self> {
        Url::parse(input)
            .map(Self::new)
            .map_err(|source| Error::InvalidUrl {
                url: input.to_string(),
                source,
            })
    }

    /// Returns the current URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Number of in-place URL replacements performed so far.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Default for UrlLocation {
    /// A location at `http://localhost/` with no query.
    fn default() -> Self {
        Self::new(Url::parse("http://localhost/").expect("literal URL is valid"))
    }
}

impl Location for UrlLocation {
    fn read_page_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.into_owned())
    }

    fn write_page_param(&mut self, name: &str, value: Option<&str>) {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut written = false;

        for (key, existing) in self.url.query_pairs() {
            if key.as_ref() != name {
                pairs.push((key.into_owned(), existing.into_owned()));
            } else if let (Some(value), false) = (value, written) {
                pairs.push((name.to_string(), value.to_string()));
                written = true;
            }
        }

        if let (Some(value), false) = (value, written) {
            pairs.push((name.to_string(), value.to_string()));
        }

        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }

        self.replacements += 1;
        log::trace!("replaced location with {}", self.url);
    }

    fn href(&self) -> String {
        self.url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(input: &str) -> UrlLocation {
        UrlLocation::parse(input).unwrap()
    }

    #[test]
    fn test_read_missing_param() {
        assert_eq!(location("https://example.com/").read_page_param("page"), None);
    }

    #[test]
    fn test_read_first_occurrence() {
        let loc = location("https://example.com/?page=2&page=3");
        assert_eq!(loc.read_page_param("page").as_deref(), Some("2"));
    }

    #[test]
    fn test_write_replaces_in_place() {
        let mut loc = location("https://example.com/list?page=2&q=x#top");
        loc.write_page_param("page", Some("3"));
        assert_eq!(loc.href(), "https://example.com/list?page=3&q=x#top");
    }

    #[test]
    fn test_write_collapses_duplicates() {
        let mut loc = location("https://example.com/?page=2&q=x&page=5");
        loc.write_page_param("page", Some("4"));
        assert_eq!(loc.href(), "https://example.com/?page=4&q=x");
    }

    #[test]
    fn test_remove_last_param_drops_query() {
        let mut loc = location("https://example.com/list?page=2");
        loc.write_page_param("page", None);
        assert_eq!(loc.href(), "https://example.com/list");
        assert_eq!(loc.url().query(), None);
    }

    #[test]
    fn test_remove_absent_param_is_harmless() {
        let mut loc = location("https://example.com/list");
        loc.write_page_param("page", None);
        assert_eq!(loc.href(), "https://example.com/list");
    }

    #[test]
    fn test_replacements_are_counted() {
        let mut loc = UrlLocation::default();
        assert_eq!(loc.replacements(), 0);
        loc.write_page_param("page", Some("2"));
        loc.write_page_param("page", None);
        assert_eq!(loc.replacements(), 2);
    }

    #[test]
    fn test_parse_rejects_relative_url() {
        match UrlLocation::parse("/companies?page=2") {
            Err(Error::InvalidUrl { url, .. }) => assert_eq!(url, "/companies?page=2"),
            other => panic!("expected invalid url error, got {:?}", other),
        }
    }
}
