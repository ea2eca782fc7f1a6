//! Pagination arithmetic and the page indicator.
//!
//! The paginator only tracks which page is current and how many rows fit on
//! a page. It never stores a page count: every method that needs one takes
//! the caller's current item count and derives it, so the count cannot drift
//! away from the data it describes.
//!
//! Pages are 1-based. An empty data set has zero pages, but the current page
//! stays at 1.

use crate::key::{self, KeyMap as KeyMapTrait};

/// How the page indicator is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Page numbers, e.g. "2/3".
    #[default]
    Arabic,
    /// One dot per page, e.g. "○ • ○".
    Dots,
}

/// Key bindings for moving between pages.
///
/// # Examples
///
/// ```rust
/// use company_table::paginator::PaginatorKeyMap;
/// use company_table::key;
///
/// let custom_keymap = PaginatorKeyMap {
///     prev_page: key::new_binding(vec![
///         key::with_keys_str(&["a", "left"]),
///         key::with_help("a/←", "previous page"),
///     ]),
///     next_page: key::new_binding(vec![
///         key::with_keys_str(&["d", "right"]),
///         key::with_help("d/→", "next page"),
///     ]),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Current page plus page size, with the page indicator's display options.
///
/// # Examples
///
/// ```rust
/// use company_table::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(5);
///
/// assert_eq!(paginator.total_pages(12), 3);
/// assert_eq!(paginator.slice_bounds(12), (0, 5));
///
/// assert!(paginator.next_page(12));
/// assert!(paginator.next_page(12));
/// assert!(!paginator.next_page(12)); // already on the last page
/// assert_eq!(paginator.items_on_page(12), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// How the indicator is drawn.
    pub paginator_type: Type,
    page: usize,
    per_page: usize,

    /// Glyph for the current page in dots mode.
    pub active_dot: String,
    /// Glyph for other pages in dots mode.
    pub inactive_dot: String,
    /// Format for arabic mode; the first `%d` is the page, the second the total.
    pub arabic_format: String,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    /// Page 1, one item per page, arabic indicator, default key bindings.
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the page size. Values below 1 are clamped to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Sets the active dot glyph (builder pattern).
    pub fn with_active_dot(mut self, dot: &str) -> Self {
        self.active_dot = dot.to_string();
        self
    }

    /// Sets the inactive dot glyph (builder pattern).
    pub fn with_inactive_dot(mut self, dot: &str) -> Self {
        self.inactive_dot = dot.to_string();
        self
    }

    /// Returns the page size.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages needed for `total_items`; zero when there are none.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.per_page)
    }

    /// Start (inclusive) and end (exclusive) indices of the current page.
    ///
    /// Both bounds are clamped to `length`, so a page past the end yields an
    /// empty range rather than an out-of-bounds slice.
    ///
    /// ```rust
    /// use company_table::paginator::Model;
    ///
    /// let items: Vec<u32> = (0..12).collect();
    /// let mut paginator = Model::new().with_per_page(5);
    /// paginator.set_page(3, items.len());
    ///
    /// let (start, end) = paginator.slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &[10, 11]);
    /// ```
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page.saturating_sub(1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Number of items shown on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.slice_bounds(total_items);
        end - start
    }

    /// Moves to `page` if it lies within `1..=total_pages`.
    ///
    /// Returns true if the current page changed. Out-of-range requests are
    /// ignored.
    pub fn set_page(&mut self, page: usize, total_items: usize) -> bool {
        if page < 1 || page > self.total_pages(total_items) || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Moves to the previous page. Returns true if the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.on_first_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Moves to the next page. Returns true if the page changed.
    pub fn next_page(&mut self, total_items: usize) -> bool {
        if self.on_last_page(total_items) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Pulls the current page back to the last page when it overshoots.
    ///
    /// With no items the page falls back to 1. Returns true if the page
    /// changed.
    pub fn clamp(&mut self, total_items: usize) -> bool {
        let last = self.total_pages(total_items).max(1);
        if self.page <= last {
            return false;
        }
        self.page = last;
        true
    }

    /// Jumps to page 1. Returns true if the page changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.page != 1;
        self.page = 1;
        changed
    }

    /// Returns true on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Returns true when there is no page after the current one.
    pub fn on_last_page(&self, total_items: usize) -> bool {
        self.page >= self.total_pages(total_items)
    }

    /// Renders the page indicator for `total_items`.
    ///
    /// ```rust
    /// use company_table::paginator::{Model, Type};
    ///
    /// let mut paginator = Model::new().with_per_page(5);
    /// assert_eq!(paginator.view(12), "1/3");
    ///
    /// paginator.paginator_type = Type::Dots;
    /// paginator.next_page(12);
    /// assert_eq!(paginator.view(12), "○ • ○");
    /// ```
    pub fn view(&self, total_items: usize) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(total_items),
            Type::Dots => self.dots_view(total_items),
        }
    }

    fn arabic_view(&self, total_items: usize) -> String {
        let total = self.total_pages(total_items).max(1);
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &total.to_string(), 1)
    }

    fn dots_view(&self, total_items: usize) -> String {
        (1..=self.total_pages(total_items))
            .map(|page| {
                if page == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;

    fn five_per_page() -> Model {
        Model::new().with_per_page(5)
    }

    #[test]
    fn test_total_pages() {
        let p = five_per_page();
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(5), 1);
        assert_eq!(p.total_pages(6), 2);
        assert_eq!(p.total_pages(12), 3);
    }

    #[test]
    fn test_per_page_clamped() {
        assert_eq!(Model::new().with_per_page(0).per_page(), 1);
    }

    #[test]
    fn test_set_page_bounds() {
        let mut p = five_per_page();
        assert!(!p.set_page(0, 12));
        assert!(!p.set_page(4, 12));
        assert_eq!(p.page(), 1);

        assert!(p.set_page(3, 12));
        assert_eq!(p.page(), 3);
        assert!(!p.set_page(3, 12)); // unchanged
    }

    #[test]
    fn test_navigation_stops_at_edges() {
        let mut p = five_per_page();
        assert!(!p.prev_page());
        assert!(p.next_page(12));
        assert!(p.next_page(12));
        assert!(!p.next_page(12));
        assert_eq!(p.page(), 3);
        assert!(p.prev_page());
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn test_next_page_with_no_items() {
        let mut p = five_per_page();
        assert!(!p.next_page(0));
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_items_per_page_never_exceed_page_size() {
        let mut p = five_per_page();
        let total = 12;
        let mut sizes = vec![p.items_on_page(total)];
        while p.next_page(total) {
            sizes.push(p.items_on_page(total));
        }
        assert_eq!(sizes, vec![5, 5, 2]);
    }

    #[test]
    fn test_clamp() {
        let mut p = five_per_page();
        p.set_page(3, 12);

        assert!(!p.clamp(11));
        assert_eq!(p.page(), 3);

        assert!(p.clamp(10));
        assert_eq!(p.page(), 2);

        assert!(p.clamp(0));
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_slice_bounds_past_end_is_empty() {
        let mut p = five_per_page();
        p.set_page(3, 12);
        assert_eq!(p.slice_bounds(4), (4, 4));
    }

    #[test]
    fn test_views() {
        let mut p = five_per_page();
        assert_eq!(p.view(0), "1/1");
        assert_eq!(p.view(12), "1/3");

        p.paginator_type = Type::Dots;
        assert_eq!(p.view(0), "");
        p.set_page(3, 12);
        assert_eq!(p.view(12), "○ ○ •");
    }

    #[test]
    fn test_custom_dots() {
        let mut p = five_per_page().with_active_dot("●").with_inactive_dot("·");
        p.paginator_type = Type::Dots;
        assert_eq!(p.view(7), "● ·");
    }

    #[test]
    fn test_keymap_help() {
        let keymap = PaginatorKeyMap::default();
        assert_eq!(keymap.short_help().len(), 2);
        assert_eq!(keymap.full_help().len(), 1);
        assert_eq!(keymap.next_page.help().desc, "next page");
    }
}
