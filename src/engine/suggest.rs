//! Name suggestions for the search bar.
//!
//! Uses the same case-insensitive substring rule as the name filter, but always
//! runs against the full store in feed order and ignores every other filter.

use crate::domain::Record;

/// Number of suggestions shown under the search bar.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Returns up to `limit` records whose name contains `term`, ignoring case.
///
/// An empty term yields no suggestions.
///
/// # Examples
///
/// ```
/// use docfinder::domain::Record;
/// use docfinder::engine::suggestions;
///
/// let records = vec![
///     Record::new("1", "Dr. Anita", ["ENT"], "video", 1.0, 1),
///     Record::new("2", "Dr. Anil", ["ENT"], "video", 1.0, 1),
///     Record::new("3", "Dr. Bose", ["ENT"], "video", 1.0, 1),
/// ];
/// let found = suggestions(&records, "ani", 3);
/// assert_eq!(found.len(), 2);
/// assert!(suggestions(&records, "", 3).is_empty());
/// ```
#[must_use]
pub fn suggestions(records: &[Record], term: &str, limit: usize) -> Vec<Record> {
    if term.is_empty() {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.name_contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        ["Dr. Sharma", "Dr. Sharmila", "Dr. Verma", "Dr. Sharad", "Dr. Shah"]
            .iter()
            .enumerate()
            .map(|(i, name)| Record::new(i.to_string(), *name, ["ENT"], "video", 1.0, 1))
            .collect()
    }

    #[test]
    fn caps_at_limit_in_store_order() {
        let found = suggestions(&records(), "dr.", DEFAULT_SUGGESTION_LIMIT);
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Dr. Sharma", "Dr. Sharmila", "Dr. Verma"]);
    }

    #[test]
    fn matches_ignoring_case() {
        let found = suggestions(&records(), "SHAR", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(suggestions(&records(), "kapoor", DEFAULT_SUGGESTION_LIMIT).is_empty());
    }
}
