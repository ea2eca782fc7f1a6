//! The paginated, filterable company list.
//!
//! [`Store`] owns the record collection, the filter text, and the current
//! page. Everything a table view shows is derived from those three on
//! demand:
//!
//! - [`Store::filtered_data`]: records whose director name contains the filter text
//! - [`Store::total_pages`]: pages needed for the filtered records
//! - [`Store::paginated_data`]: the slice of filtered records on the current page
//!
//! Nothing derived is cached, so there is no way for a view to disagree with
//! the collection it came from.
//!
//! # Page validity
//!
//! The current page always satisfies `1 <= page <= max(total_pages, 1)`.
//! Mutations that can shrink the filtered view pull the page back onto the
//! last page, and changing the filter text jumps back to page 1.
//!
//! # URL synchronization
//!
//! Every change of the current page is mirrored into the host URL through a
//! [`Location`]: page 1 removes the query parameter, any other page writes
//! its number. Writes replace the URL in place and only happen when the page
//! actually changes.
//!
//! # Examples
//!
//! ```
//! use company_table::location::{Location, UrlLocation};
//! use company_table::store::Store;
//!
//! let location = UrlLocation::parse("https://example.com/companies").unwrap();
//! let mut store = Store::new(location);
//!
//! assert_eq!(store.total_pages(), 3);
//! assert_eq!(store.paginated_data().len(), 5);
//!
//! store.go_to_next_page();
//! assert_eq!(store.current_page(), 2);
//! assert_eq!(store.location().href(), "https://example.com/companies?page=2");
//!
//! store.set_filter_value("Иванов");
//! assert_eq!(store.current_page(), 1);
//! assert_eq!(store.filtered_data().len(), 1);
//! assert_eq!(store.location().href(), "https://example.com/companies");
//! ```

mod filtering;
mod pagination;


use crate::config::Config;
use crate::error::Result;
use crate::fixtures::{check_unique_ids, seed_records};
use crate::key::{self, KeyMap};
use crate::location::{Location, UrlLocation};
use crate::paginator::{self, PaginatorKeyMap};
use crate::record::{NewRecord, Record};
use bubbletea_rs::{KeyMsg, Msg};
use std::collections::HashSet;

/// The company list store.
///
/// The store is an explicitly owned value: create one per table and hand
/// it to whatever renders the table. It is generic over the host
/// [`Location`] so tests and embedders can supply their own.
#[derive(Debug, Clone)]
pub struct Store<L: Location = UrlLocation> {
    records: Vec<Record>,
    filter: String,
    paginator: paginator::Model,
    page_param: String,
    location: L,
}

impl Default for Store<UrlLocation> {
    fn default() -> Self {
        Self::new(UrlLocation::default())
    }
}

impl<L: Location> Store<L> {
    /// Creates a store seeded with the built-in records, on page 1.
    ///
    /// The location is not read or written here; call
    /// [`Store::initialize_from_url`] to pick up a page from the URL.
    pub fn new(location: L) -> Self {
        let config = Config::default();
        Self {
            records: seed_records(),
            filter: String::new(),
            paginator: paginator::Model::new().with_per_page(config.page_size),
            page_param: config.page_param,
            location,
        }
    }

    /// Replaces the seed records (builder pattern).
    ///
    /// Records are kept in the given order. Fails with
    /// [`Error::DuplicateId`](crate::error::Error::DuplicateId) if two
    /// records share an id.
    pub fn with_records(mut self, records: Vec<Record>) -> Result<Self> {
        check_unique_ids(&records)?;
        self.records = records;
        self.clamp_page();
        Ok(self)
    }

    /// Applies page size and query parameter settings (builder pattern).
    pub fn with_config(mut self, config: Config) -> Self {
        self.paginator.set_per_page(config.page_size);
        self.page_param = config.page_param;
        self.clamp_page();
        self
    }

    /// Sets the page size (builder pattern). Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.paginator.set_per_page(page_size);
        self.clamp_page();
        self
    }

    /// Every record, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records, ignoring the filter.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page()
    }

    /// Name of the query parameter mirroring the current page.
    pub fn page_param(&self) -> &str {
        &self.page_param
    }

    /// The host location.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Appends a record and returns the id it was given.
    ///
    /// The id is one more than the largest id in the store, or 0 for an
    /// empty store. Ids freed by removals are therefore reused only when
    /// they were the maximum. If the largest id is `u64::MAX`, the smallest
    /// unused id is taken instead.
    ///
    /// ```
    /// use company_table::record::{Address, NewRecord};
    /// use company_table::store::Store;
    ///
    /// let mut store: Store = Store::default();
    /// let id = store.add_item(NewRecord::new(
    ///     "ООО \"Рассвет\"",
    ///     "Орлова О.О.",
    ///     "+7 495 000 00 00",
    ///     Address::new("г. Москва", "ул. Мира", "д. 3"),
    /// ));
    /// assert_eq!(id, 12);
    /// assert_eq!(store.total_pages(), 3);
    /// ```
    pub fn add_item(&mut self, item: NewRecord) -> u64 {
        let id = match self.records.iter().map(|record| record.id).max() {
            None => 0,
            Some(max) => max.checked_add(1).unwrap_or_else(|| self.smallest_unused_id()),
        };

        self.records.push(item.with_id(id));
        log::debug!("added record {} ({} total)", id, self.records.len());
        id
    }

    fn smallest_unused_id(&self) -> u64 {
        let used: HashSet<u64> = self.records.iter().map(|record| record.id).collect();
        // At most `len` ids are taken, so one of `0..=len` is free.
        (0..=self.records.len() as u64)
            .find(|id| !used.contains(id))
            .unwrap_or_default()
    }

    /// Removes the record with `id` and returns it.
    ///
    /// Returns `None` and changes nothing when no record has that id. If the
    /// removal leaves the current page past the last page, the page moves
    /// back to the last page (or page 1 when nothing is left).
    pub fn remove_item(&mut self, id: u64) -> Option<Record> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            log::trace!("remove_item: no record with id {}", id);
            return None;
        };

        let removed = self.records.remove(index);
        log::debug!("removed record {} ({} left)", id, self.records.len());
        self.clamp_page();
        Some(removed)
    }

    /// Replaces the record whose id matches `item.id`, keeping its position.
    ///
    /// Returns false and changes nothing when no record has that id. An edit
    /// that makes the record drop out of the filter can shrink the filtered
    /// view, in which case the page is clamped as in [`Store::remove_item`].
    pub fn update_item(&mut self, item: Record) -> bool {
        let Some(slot) = self.records.iter_mut().find(|record| record.id == item.id) else {
            log::trace!("update_item: no record with id {}", item.id);
            return false;
        };

        log::debug!("updated record {}", item.id);
        *slot = item;
        self.clamp_page();
        true
    }

    /// Handles key presses for page navigation.
    ///
    /// Messages other than [`KeyMsg`], and keys not bound in the paginator
    /// keymap, are ignored.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.paginator.keymap.next_page.matches(key_msg) {
                self.go_to_next_page();
            } else if self.paginator.keymap.prev_page.matches(key_msg) {
                self.go_to_prev_page();
            }
        }
    }

    /// Navigation key bindings.
    pub fn keymap(&self) -> &PaginatorKeyMap {
        &self.paginator.keymap
    }

    /// Mutable navigation key bindings, for rebinding keys.
    pub fn keymap_mut(&mut self) -> &mut PaginatorKeyMap {
        &mut self.paginator.keymap
    }

    /// Chooses how [`Store::pagination_view`] draws the indicator.
    pub fn set_paginator_type(&mut self, paginator_type: paginator::Type) {
        self.paginator.paginator_type = paginator_type;
    }

    /// Renders the page indicator for the filtered records, e.g. "2/3".
    pub fn pagination_view(&self) -> String {
        self.paginator.view(self.filtered_len())
    }
}

impl<L: Location> KeyMap for Store<L> {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.paginator.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.paginator.keymap.full_help()
    }
}
