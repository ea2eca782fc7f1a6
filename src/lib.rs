#![warn(missing_docs)]

//! # company-table
//!
//! The state behind a company directory table: an in-memory list of company
//! records with free-text filtering, fixed-size pages, and create, update,
//! and delete operations. The current page is mirrored into a query
//! parameter of the host URL so a reload or shared link lands on the same
//! page.
//!
//! ## Overview
//!
//! The crate holds no rendering code. A view layer reads the derived state
//! of a [`Store`] (filtered rows, the rows on the current page, the page
//! count) and calls its operations in response to user input. Key presses
//! can be forwarded straight to [`Store::update`], which follows the
//! bubbletea-rs message convention.
//!
//! ## Modules
//!
//! - [`store`]: the list store and every operation on it
//! - [`record`]: company records and addresses
//! - [`fixtures`]: the built-in seed data and JSON loading
//! - [`location`]: the host URL seam used for page synchronization
//! - [`paginator`]: page arithmetic and the page indicator
//! - [`key`]: key bindings for page navigation
//! - [`config`]: page size and query parameter settings
//! - [`error`]: errors raised while loading external input
//!
//! ## Quick Start
//!
//! ```rust
//! use company_table::prelude::*;
//!
//! let location = UrlLocation::parse("https://example.com/companies?page=2").unwrap();
//! let mut store = Store::new(location);
//! store.initialize_from_url();
//! assert_eq!(store.current_page(), 2);
//!
//! store.set_filter_value("петров");
//! assert_eq!(store.current_page(), 1);
//! assert_eq!(store.paginated_data()[0].company_name, "ООО \"Стэлс Технолоджи\"");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use company_table::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     companies: Store,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut companies = Store::default();
//!         companies.initialize_from_url();
//!         (Self { companies }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.companies.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         let rows: Vec<String> = self
//!             .companies
//!             .paginated_data()
//!             .iter()
//!             .map(|record| record.to_string())
//!             .collect();
//!         format!("{}\n{}", rows.join("\n"), self.companies.pagination_view())
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod key;
pub mod location;
pub mod paginator;
pub mod record;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use location::{Location, UrlLocation};
pub use paginator::Model as Paginator;
pub use record::{Address, NewRecord, Record};
pub use store::Store;

/// Prelude module for convenient imports.
///
/// ```rust
/// use company_table::prelude::*;
///
/// let store: Store = Store::default();
/// assert_eq!(store.len(), 12);
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap, KeyPress};
    pub use crate::location::{Location, UrlLocation};
    pub use crate::paginator::{Model as Paginator, PaginatorKeyMap, Type as PaginatorType};
    pub use crate::record::{Address, NewRecord, Record};
    pub use crate::store::Store;
}
