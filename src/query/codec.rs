//! Query-string codec for [`QueryState`].
//!
//! Parameters:
//!
//! | Key                | Field        | Form                          |
//! |--------------------|--------------|-------------------------------|
//! | `name`             | term         | form-urlencoded               |
//! | `consultationType` | mode         | form-urlencoded               |
//! | `specialities`     | categories   | comma-joined, each escaped    |
//! | `sortBy`           | sort key     | `fee-ascending` / `experience-descending` |
//!
//! Default fields are omitted rather than written as empty values. Both
//! functions are total: anything unrecognized decodes to the field default.

use super::state::QueryState;
use crate::domain::SortKey;
use url::form_urlencoded;

/// Key for the free-text term.
pub const NAME_KEY: &str = "name";
/// Key for the consultation mode.
pub const MODE_KEY: &str = "consultationType";
/// Key for the comma-joined category list.
pub const CATEGORIES_KEY: &str = "specialities";
/// Key for the sort key.
pub const SORT_KEY: &str = "sortBy";

/// Separator between categories inside the `specialities` value.
const CATEGORY_SEPARATOR: &str = ",";

/// Encodes a query state as a query string without the leading `?`.
///
/// Keys are emitted in a fixed order (`name`, `consultationType`,
/// `specialities`, `sortBy`) and categories in sorted order, so equal states
/// always encode to the same string.
///
/// # Examples
///
/// ```
/// use docfinder::domain::SortKey;
/// use docfinder::query::{encode, QueryState};
///
/// let mut query = QueryState::new();
/// query.set_term("x");
/// query.set_mode("video");
/// query.toggle_category("A");
/// query.toggle_category("B");
/// query.set_sort_key(SortKey::ExperienceDescending);
///
/// assert_eq!(
///     encode(&query),
///     "name=x&consultationType=video&specialities=A,B&sortBy=experience-descending"
/// );
/// assert_eq!(encode(&QueryState::new()), "");
/// ```
#[must_use]
pub fn encode(query: &QueryState) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(4);

    if !query.term.is_empty() {
        pairs.push((NAME_KEY, escape(&query.term)));
    }

    if let Some(mode) = query.mode.as_deref().filter(|m| !m.is_empty()) {
        pairs.push((MODE_KEY, escape(mode)));
    }

    if !query.categories.is_empty() {
        let joined = query
            .categories
            .iter()
            .map(|category| escape(category))
            .collect::<Vec<_>>()
            .join(CATEGORY_SEPARATOR);
        pairs.push((CATEGORIES_KEY, joined));
    }

    if let Some(param) = query.sort_key.as_param() {
        pairs.push((SORT_KEY, param.to_string()));
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes a query string into a query state.
///
/// Accepts an optional leading `?`. Absent keys take their defaults, the first
/// occurrence of a repeated key wins, and unknown keys are ignored. The
/// `specialities` value is split on literal commas before unescaping; empty
/// segments are kept. Categories are not checked against the loaded index.
///
/// # Examples
///
/// ```
/// use docfinder::domain::SortKey;
/// use docfinder::query::decode;
///
/// let query = decode("?name=dr+a&specialities=Dentist,ENT&sortBy=fees");
/// assert_eq!(query.term, "dr a");
/// assert_eq!(query.categories.len(), 2);
/// assert_eq!(query.sort_key, SortKey::FeeAscending);
///
/// assert!(decode("").is_default());
/// ```
#[must_use]
pub fn decode(query: &str) -> QueryState {
    let raw = query.strip_prefix('?').unwrap_or(query);

    let mut term = None;
    let mut mode = None;
    let mut categories = None;
    let mut sort = None;

    for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let slot = match unescape(key).as_str() {
            NAME_KEY => &mut term,
            MODE_KEY => &mut mode,
            CATEGORIES_KEY => &mut categories,
            SORT_KEY => &mut sort,
            other => {
                tracing::trace!(key = %other, "ignoring unknown query parameter");
                continue;
            }
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    let mut state = QueryState::new();
    state.term = term.map(unescape).unwrap_or_default();
    state.mode = mode.map(unescape).filter(|m| !m.is_empty());
    if let Some(list) = categories.filter(|list| !list.is_empty()) {
        state.categories = list.split(CATEGORY_SEPARATOR).map(unescape).collect();
    }
    state.sort_key = sort.map_or_else(SortKey::default, |value| SortKey::from_param(&unescape(value)));

    tracing::trace!(query = %raw, decoded = ?state, "query string decoded");
    state
}

fn escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Undoes form-urlencoding for one component.
///
/// `raw` never contains `&` (pairs are split first). A literal `=` is escaped
/// before parsing so it stays part of the component.
fn unescape(raw: &str) -> String {
    let guarded = raw.replace('=', "%3D");
    form_urlencoded::parse(guarded.as_bytes())
        .next()
        .map(|(component, _)| component.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(term: &str, mode: &str, categories: &[&str], sort_key: SortKey) -> QueryState {
        let mut query = QueryState::new();
        query.set_term(term);
        query.set_mode(mode);
        for category in categories {
            query.toggle_category(category);
        }
        query.set_sort_key(sort_key);
        query
    }

    #[test]
    fn scenario_full_state_encodes_and_decodes() {
        let query = state("x", "video", &["A", "B"], SortKey::ExperienceDescending);
        let encoded = encode(&query);
        assert!(encoded
            .contains("name=x&consultationType=video&specialities=A,B&sortBy=experience-descending"));
        assert_eq!(decode(&encoded), query);
    }

    #[test]
    fn empty_string_decodes_to_defaults() {
        let query = decode("");
        assert_eq!(query.term, "");
        assert_eq!(query.mode, None);
        assert!(query.categories.is_empty());
        assert_eq!(query.sort_key, SortKey::Unsorted);
    }

    #[test]
    fn default_fields_are_omitted() {
        let encoded = encode(&state("", "inClinic", &[], SortKey::Unsorted));
        assert_eq!(encoded, "consultationType=inClinic");
    }

    #[test]
    fn awkward_values_survive_a_round_trip() {
        let query = state(
            "Dr. O'Neil & Sons = 100%",
            "inClinic",
            &["Ear, Nose & Throat", "General Physician", "Ünïcode"],
            SortKey::FeeAscending,
        );
        assert_eq!(decode(&encode(&query)), query);
    }

    #[test]
    fn term_with_surrounding_whitespace_round_trips() {
        let query = state("  ali ", "", &[], SortKey::Unsorted);
        assert_eq!(decode(&encode(&query)), query);
    }

    #[test]
    fn empty_segments_are_preserved() {
        let query = decode("specialities=A,,B");
        let expected: Vec<&str> = vec!["", "A", "B"];
        assert_eq!(query.categories.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn short_sort_tokens_and_unknown_values() {
        assert_eq!(decode("sortBy=experience").sort_key, SortKey::ExperienceDescending);
        assert_eq!(decode("sortBy=rating").sort_key, SortKey::Unsorted);
        assert_eq!(decode("sortBy=").sort_key, SortKey::Unsorted);
    }

    #[test]
    fn first_occurrence_wins_and_unknown_keys_are_ignored() {
        let query = decode("?page=2&name=first&name=second&specialities=");
        assert_eq!(query.term, "first");
        assert!(query.categories.is_empty());
    }

    #[test]
    fn encode_is_deterministic_regardless_of_toggle_order() {
        let a = state("", "", &["B", "A", "C"], SortKey::Unsorted);
        let b = state("", "", &["C", "A", "B"], SortKey::Unsorted);
        assert_eq!(encode(&a), encode(&b));
        assert_eq!(encode(&a), "specialities=A,B,C");
    }
}
