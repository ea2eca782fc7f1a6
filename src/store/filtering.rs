//! Filter text and the filtered view.
//!
//! The filter is a case-insensitive substring match against the director's
//! full name only. Surrounding whitespace in the filter text is ignored, and
//! a blank filter shows every record.

use super::Store;
use crate::location::Location;
use crate::record::Record;

impl<L: Location> Store<L> {
    /// The filter text exactly as it was set.
    pub fn filter_value(&self) -> &str {
        &self.filter
    }

    /// Sets the filter text.
    ///
    /// Any change of the text moves the store back to page 1 before this
    /// method returns, so the next read of [`Store::paginated_data`] already
    /// shows the first page of matches. Setting the same text again is not a
    /// change and keeps the current page.
    ///
    /// ```
    /// use company_table::store::Store;
    ///
    /// let mut store: Store = Store::default();
    /// store.set_page(3);
    ///
    /// store.set_filter_value("  ОВ ");
    /// assert_eq!(store.current_page(), 1);
    /// assert!(store
    ///     .filtered_data()
    ///     .iter()
    ///     .all(|r| r.director_full_name.to_lowercase().contains("ов")));
    /// ```
    pub fn set_filter_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.filter {
            return;
        }

        log::debug!("filter changed from {:?} to {:?}", self.filter, value);
        self.filter = value;
        self.reset_page();
    }

    /// Clears the filter text, showing every record again.
    pub fn clear_filter(&mut self) {
        self.set_filter_value(String::new());
    }

    /// Returns true if a non-blank filter is in effect.
    pub fn is_filtering(&self) -> bool {
        !self.filter.trim().is_empty()
    }

    /// Records matching the filter, in collection order.
    ///
    /// With a blank filter this is every record.
    pub fn filtered_data(&self) -> Vec<&Record> {
        match self.search_term() {
            None => self.records.iter().collect(),
            Some(needle) => self
                .records
                .iter()
                .filter(|record| record.matches_director(&needle))
                .collect(),
        }
    }

    /// Number of records matching the filter.
    pub fn filtered_len(&self) -> usize {
        match self.search_term() {
            None => self.records.len(),
            Some(needle) => self
                .records
                .iter()
                .filter(|record| record.matches_director(&needle))
                .count(),
        }
    }

    /// The trimmed, lowercased filter text, or `None` when it is blank.
    fn search_term(&self) -> Option<String> {
        let trimmed = self.filter.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}
