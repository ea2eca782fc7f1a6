//! Page navigation and URL synchronization.

use super::Store;
use crate::location::Location;
use crate::record::Record;

/// Parses a raw page parameter.
///
/// Accepts a base-10 integer of at least 1, ignoring surrounding
/// whitespace. A leading `+` is allowed, as in `"+2"`. Anything else
/// counts as no parameter.
pub(crate) fn parse_page_param(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|page| *page >= 1)
}

impl<L: Location> Store<L> {
    /// The current 1-based page.
    pub fn current_page(&self) -> usize {
        self.paginator.page()
    }

    /// Pages needed for the filtered records; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered_len())
    }

    /// The filtered records on the current page.
    ///
    /// Holds at most [`Store::page_size`] records; every page but the last
    /// is full.
    pub fn paginated_data(&self) -> Vec<&Record> {
        let filtered = self.filtered_data();
        let (start, end) = self.paginator.slice_bounds(filtered.len());
        filtered[start..end].to_vec()
    }

    /// Moves to `page` if it is within `1..=total_pages`.
    ///
    /// Out-of-range pages are ignored. Returns true if the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let total_items = self.filtered_len();
        let changed = self.paginator.set_page(page, total_items);
        if changed {
            self.page_changed();
        } else {
            log::trace!("set_page({}) ignored", page);
        }
        changed
    }

    /// Moves one page forward unless already on the last page.
    pub fn go_to_next_page(&mut self) {
        let total_items = self.filtered_len();
        if self.paginator.next_page(total_items) {
            self.page_changed();
        }
    }

    /// Moves one page back unless already on page 1.
    pub fn go_to_prev_page(&mut self) {
        if self.paginator.prev_page() {
            self.page_changed();
        }
    }

    /// Picks up the current page from the location's query parameter.
    ///
    /// A valid page number within range becomes the current page. A valid
    /// number past the last page resets to page 1. A missing or malformed
    /// parameter leaves the current page alone.
    ///
    /// ```
    /// use company_table::location::UrlLocation;
    /// use company_table::store::Store;
    ///
    /// let location = UrlLocation::parse("https://example.com/?page=2").unwrap();
    /// let mut store = Store::new(location);
    /// store.initialize_from_url();
    /// assert_eq!(store.current_page(), 2);
    /// ```
    pub fn initialize_from_url(&mut self) {
        let Some(raw) = self.location.read_page_param(&self.page_param) else {
            return;
        };

        let Some(page) = parse_page_param(&raw) else {
            log::debug!("ignoring malformed page parameter {:?}", raw);
            return;
        };

        if page <= self.total_pages() {
            self.set_page(page);
        } else {
            log::debug!(
                "page parameter {} exceeds {} pages, using page 1",
                page,
                self.total_pages()
            );
            self.reset_page();
        }
    }

    pub(super) fn reset_page(&mut self) {
        if self.paginator.reset() {
            self.page_changed();
        }
    }

    /// Keeps the current page on a page that exists after the data shrank.
    pub(super) fn clamp_page(&mut self) {
        let total_items = self.filtered_len();
        if self.paginator.clamp(total_items) {
            self.page_changed();
        }
    }

    fn page_changed(&mut self) {
        let page = self.paginator.page();
        log::debug!("current page is now {}", page);

        if page == 1 {
            self.location.write_page_param(&self.page_param, None);
        } else {
            let value = page.to_string();
            self.location
                .write_page_param(&self.page_param, Some(value.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_page_param;

    #[test]
    fn test_parse_page_param() {
        assert_eq!(parse_page_param("2"), Some(2));
        assert_eq!(parse_page_param(" 3 "), Some(3));
        assert_eq!(parse_page_param("+2"), Some(2));
        assert_eq!(parse_page_param("0"), None);
        assert_eq!(parse_page_param("-1"), None);
        assert_eq!(parse_page_param("2abc"), None);
        assert_eq!(parse_page_param(""), None);
    }
}
