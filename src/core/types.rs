use indexmap::IndexMap;
use serde_json::Value;

/// One result row: field name to JSON cell, in column order.
///
/// Column order matters: auto-detection picks the first matching field.
pub type Record = IndexMap<String, Value>;

/// `true` when at least one row carries `field`.
#[must_use]
pub fn field_present(rows: &[Record], field: &str) -> bool {
    rows.iter().any(|row| row.contains_key(field))
}

/// Column names in first-seen order across all rows.
#[must_use]
pub fn column_names(rows: &[Record]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !names.contains(&key.as_str()) {
                names.push(key.as_str());
            }
        }
    }
    names
}

/// First column (in column order) whose name satisfies `predicate`.
#[must_use]
pub fn find_column<'a>(rows: &'a [Record], predicate: impl Fn(&str) -> bool) -> Option<&'a str> {
    column_names(rows).into_iter().find(|name| predicate(name))
}

/// Case-insensitive exact column lookup.
#[must_use]
pub fn find_column_exact<'a>(rows: &'a [Record], wanted: &str) -> Option<&'a str> {
    find_column(rows, |name| name.eq_ignore_ascii_case(wanted))
}

/// Case-insensitive substring column lookup, any of `needles`.
#[must_use]
pub fn find_column_containing<'a>(rows: &'a [Record], needles: &[&str]) -> Option<&'a str> {
    find_column(rows, |name| {
        let lower = name.to_ascii_lowercase();
        needles.iter().any(|needle| lower.contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect()
    }

    #[test]
    fn column_lookup_follows_column_order() {
        let rows = vec![
            row(&[("Total", json!(1)), ("count", json!(2))]),
            row(&[("extra_value", json!(3))]),
        ];
        assert_eq!(column_names(&rows), vec!["Total", "count", "extra_value"]);
        assert_eq!(
            find_column_containing(&rows, &["value", "count", "total"]),
            Some("Total")
        );
        assert_eq!(find_column_exact(&rows, "COUNT"), Some("count"));
        assert!(field_present(&rows, "extra_value"));
    }
}
