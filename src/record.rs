//! Company records displayed by the table.
//!
//! A [`Record`] is one row of the table. Records are created from a
//! [`NewRecord`] by the store, which owns id assignment; callers never pick
//! ids themselves.
//!
//! Field names serialize in camelCase (`companyName`, `directorFullName`,
//! `phoneNumber`) so seed files share one JSON shape with front-end fixtures.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Postal address of a company.
///
/// The address is an opaque payload: no field is validated or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// City, e.g. "г. Москва".
    pub city: String,
    /// Street, e.g. "ул. Ленина".
    pub street: String,
    /// House number and any office suffix.
    pub house: String,
}

impl Address {
    /// Creates an address from its three parts.
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        house: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            house: house.into(),
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.street, self.house)
    }
}

/// One company row, identified by a store-assigned id.
///
/// # Examples
///
/// ```
/// use company_table::record::{Address, NewRecord};
///
/// let record = NewRecord::new(
///     "ООО \"Вектор\"",
///     "Иванов И.И.",
///     "+7:000:123:45",
///     Address::new("г. Москва", "ул. Ленина", "д. 1"),
/// )
/// .with_id(0);
///
/// assert_eq!(record.id, 0);
/// assert!(record.matches_director("иванов"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique id within a store.
    pub id: u64,
    /// Registered company name.
    pub company_name: String,
    /// Director's full name; the only field the filter looks at.
    pub director_full_name: String,
    /// Contact phone, kept verbatim.
    pub phone_number: String,
    /// Postal address.
    pub address: Address,
}

impl Record {
    /// Returns true if the director name contains `needle`.
    ///
    /// `needle` must already be trimmed and lowercased; the director name is
    /// lowercased here. Matching is a plain substring test, so Cyrillic and
    /// Latin text behave the same way.
    pub fn matches_director(&self, needle: &str) -> bool {
        self.director_full_name.to_lowercase().contains(needle)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} | {} | {} | {}",
            self.id, self.company_name, self.director_full_name, self.phone_number, self.address
        )
    }
}

/// A record that has not been assigned an id yet.
///
/// This is what callers pass to `Store::add_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    /// Registered company name.
    pub company_name: String,
    /// Director's full name.
    pub director_full_name: String,
    /// Contact phone.
    pub phone_number: String,
    /// Postal address.
    pub address: Address,
}

impl NewRecord {
    /// Creates a record payload without an id.
    pub fn new(
        company_name: impl Into<String>,
        director_full_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            director_full_name: director_full_name.into(),
            phone_number: phone_number.into(),
            address,
        }
    }

    /// Attaches an id, producing a full [`Record`].
    pub fn with_id(self, id: u64) -> Record {
        Record {
            id,
            company_name: self.company_name,
            director_full_name: self.director_full_name,
            phone_number: self.phone_number,
            address: self.address,
        }
    }
}

impl From<Record> for NewRecord {
    fn from(record: Record) -> Self {
        Self {
            company_name: record.company_name,
            director_full_name: record.director_full_name,
            phone_number: record.phone_number,
            address: record.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        NewRecord::new(
            "ИП Сидоров С.С.",
            "Сидоров С.С.",
            "+7:000:56:7899",
            Address::new("г. Санкт-Петербург", "пр. Невский", "д. 2"),
        )
        .with_id(1)
    }

    #[test]
    fn test_matches_director_is_case_insensitive() {
        let record = sample();
        assert!(record.matches_director("сидоров"));
        assert!(record.matches_director("с.с."));
        assert!(!record.matches_director("иванов"));
    }

    #[test]
    fn test_matches_director_ignores_company_name() {
        let mut record = sample();
        record.company_name = "ООО \"Вектор\"".to_string();
        assert!(!record.matches_director("вектор"));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["companyName"], "ИП Сидоров С.С.");
        assert_eq!(json["directorFullName"], "Сидоров С.С.");
        assert_eq!(json["phoneNumber"], "+7:000:56:7899");
        assert_eq!(json["address"]["street"], "пр. Невский");
    }

    #[test]
    fn test_new_record_drops_id() {
        let record = sample();
        let payload = NewRecord::from(record.clone());
        assert_eq!(payload.with_id(7).company_name, record.company_name);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "#1 ИП Сидоров С.С. | Сидоров С.С. | +7:000:56:7899 | г. Санкт-Петербург, пр. Невский, д. 2"
        );
    }
}
