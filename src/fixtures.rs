//! Built-in seed data.
//!
//! Every store starts from a fixed list of twelve companies unless a caller
//! supplies its own records. Nothing is persisted: a fresh store always starts
//! from the seed again.

use crate::error::{Error, Result};
use crate::record::{Address, NewRecord, Record};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static SEED: Lazy<Vec<Record>> = Lazy::new(|| {
    let rows = [
        ("ООО \"Вектор\"", "Иванов И.И.", "+7:000:123:45", ("г. Москва", "ул. Ленина", "д. 1")),
        ("ИП Сидоров С.С.", "Сидоров С.С.", "+7:000:56:7899", ("г. Санкт-Петербург", "пр. Невский", "д. 2")),
        ("ООО \"Стэлс Технолоджи\"", "Петров П.П.", "+7 495 987 65 43", ("г. Москва", "ул. Тверская", "д. 15, офис 203")),
        ("ЗАО \"Динамика\"", "Синицына А.В.", "+7 812 456 78 90", ("г. Санкт-Петербург", "ул. Садовая", "д. 8")),
        ("ИП Козлов Д.Е.", "Козлов Д.Е.", "+7 495 555 33 22", ("г. Москва", "ул. Арбат", "д. 25")),
        ("ООО \"ТехноМир\"", "Смирнов А.А.", "+7 495 111 22 33", ("г. Москва", "ул. Красная Площадь", "д. 1")),
        ("ИП Волков В.В.", "Волков В.В.", "+7 812 444 55 66", ("г. Санкт-Петербург", "ул. Дворцовая", "д. 10")),
        ("ООО \"Инновации\"", "Новиков Н.Н.", "+7 495 777 88 99", ("г. Москва", "ул. Тверская", "д. 20")),
        ("ИП Морозов М.М.", "Морозов М.М.", "+7 812 333 44 55", ("г. Санкт-Петербург", "пр. Литейный", "д. 5")),
        ("ЗАО \"Прогресс\"", "Федоров Ф.Ф.", "+7 495 666 77 88", ("г. Москва", "ул. Арбат", "д. 30")),
        ("ИП Лебедев Л.Л.", "Лебедев Л.Л.", "+7 812 222 33 44", ("г. Санкт-Петербург", "ул. Невский", "д. 15")),
        ("ООО \"Будущее\"", "Григорьев Г.Г.", "+7 495 999 00 11", ("г. Москва", "ул. Ленина", "д. 50")),
    ];

    rows.into_iter()
        .zip(0u64..)
        .map(|((company, director, phone, (city, street, house)), id)| {
            NewRecord::new(company, director, phone, Address::new(city, street, house)).with_id(id)
        })
        .collect()
});

/// Returns a fresh copy of the built-in seed records (ids `0..=11`).
///
/// # Examples
///
/// ```
/// use company_table::fixtures::seed_records;
///
/// let records = seed_records();
/// assert_eq!(records.len(), 12);
/// assert_eq!(records[0].director_full_name, "Иванов И.И.");
/// ```
pub fn seed_records() -> Vec<Record> {
    SEED.clone()
}

/// Parses seed records from a JSON array.
///
/// The array uses the same camelCase shape as [`Record`]'s serde form.
/// Ids must be unique; the first repeated id is reported as
/// [`Error::DuplicateId`].
///
/// # Examples
///
/// ```
/// use company_table::fixtures::records_from_json;
///
/// let json = r#"[{
///     "id": 3,
///     "companyName": "ЗАО \"Динамика\"",
///     "directorFullName": "Синицына А.В.",
///     "phoneNumber": "+7 812 456 78 90",
///     "address": { "city": "г. Санкт-Петербург", "street": "ул. Садовая", "house": "д. 8" }
/// }]"#;
///
/// let records = records_from_json(json).unwrap();
/// assert_eq!(records[0].id, 3);
/// ```
pub fn records_from_json(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    check_unique_ids(&records)?;
    Ok(records)
}

/// Fails with [`Error::DuplicateId`] on the first id seen twice.
pub fn check_unique_ids(records: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(Error::DuplicateId(record.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<u64> = seed_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_copies_are_independent() {
        let mut first = seed_records();
        first.clear();
        assert_eq!(seed_records().len(), 12);
    }

    #[test]
    fn test_records_from_json_round_trips_seed() {
        let json = serde_json::to_string(&seed_records()).unwrap();
        assert_eq!(records_from_json(&json).unwrap(), seed_records());
    }

    #[test]
    fn test_records_from_json_rejects_duplicate_ids() {
        let mut records = seed_records();
        records[5].id = 2;
        let json = serde_json::to_string(&records).unwrap();

        match records_from_json(&json) {
            Err(Error::DuplicateId(id)) => assert_eq!(id, 2),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_unique_ids() {
        let mut records = seed_records();
        assert!(check_unique_ids(&records).is_ok());

        records[11].id = u64::MAX;
        records[0].id = u64::MAX;
        assert!(matches!(
            check_unique_ids(&records),
            Err(Error::DuplicateId(id)) if id == u64::MAX
        ));
    }

    #[test]
    fn test_records_from_json_rejects_negative_ids() {
        let json = r#"[{"id": -1, "companyName": "", "directorFullName": "", "phoneNumber": "",
            "address": {"city": "", "street": "", "house": ""}}]"#;
        assert!(matches!(records_from_json(json), Err(Error::Json(_))));
    }
}
