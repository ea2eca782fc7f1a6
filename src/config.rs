//! Store configuration.
//!
//! Configuration is plain data with serde defaults, so a partial JSON object
//! such as `{"pageSize": 10}` is enough to override one setting.

use crate::error::Result;
use serde::Deserialize;

/// Rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Query parameter that carries the current page.
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Tunable store settings.
///
/// # Examples
///
/// ```
/// use company_table::config::Config;
///
/// let config = Config::from_json(r#"{"pageSize": 10}"#).unwrap();
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.page_param, "page");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Rows per page. Zero is treated as one.
    pub page_size: usize,
    /// Name of the URL query parameter mirroring the current page.
    pub page_param: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
        }
    }
}

impl Config {
    /// Parses a configuration object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
