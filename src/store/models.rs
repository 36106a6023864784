//! Wire models for the provider feed.
//!
//! These types mirror the JSON objects served by the feed and are kept separate
//! from the domain [`Record`] so the quirks of the upstream shape (a speciality
//! that is sometimes a string and sometimes an array, identifiers that are
//! sometimes numbers) are resolved once, here, and never seen downstream.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::Record;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Speciality field as the feed sends it.
///
/// # Examples
///
/// ```
/// use docfinder::store::Speciality;
///
/// let single: Speciality = serde_json::from_str(r#""Dentist""#).unwrap();
/// let many: Speciality = serde_json::from_str(r#"["Dentist", null, "Orthodontist"]"#).unwrap();
/// assert_eq!(single.into_set().len(), 1);
/// assert_eq!(many.into_set().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(untagged)]
pub enum Speciality {
    /// An array of speciality names. `null` entries are skipped.
    Multiple(Vec<Option<String>>),
    /// A single speciality name.
    Single(String),
    /// Missing or `null`.
    #[default]
    Absent,
}

impl Speciality {
    /// Normalizes into a set of category names.
    ///
    /// Null and blank names are dropped; everything else is kept verbatim.
    #[must_use]
    pub fn into_set(self) -> BTreeSet<String> {
        let names = match self {
            Self::Multiple(names) => names,
            Self::Single(name) => vec![Some(name)],
            Self::Absent => Vec::new(),
        };
        names
            .into_iter()
            .flatten()
            .filter(|name| !name.trim().is_empty())
            .collect()
    }
}

/// Provider identifier as the feed sends it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// String identifier.
    Text(String),
    /// Numeric identifier.
    Number(serde_json::Number),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// One provider object from the feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderRecord {
    /// Identifier. Falls back to the feed position when missing.
    #[serde(default)]
    pub id: Option<RecordId>,

    /// Provider display name.
    pub name: String,

    /// One speciality or several.
    #[serde(default)]
    pub speciality: Speciality,

    /// Consultation fee.
    pub fees: f64,

    /// Years of experience. Any JSON number; fractions are truncated.
    pub experience: f64,

    /// Consultation mode, e.g. `video` or `inClinic`.
    #[serde(default)]
    pub consultation_type: String,
}

impl ProviderRecord {
    /// Converts the wire object into a domain record.
    ///
    /// `position` is the index of the object in the feed and is used as the
    /// identifier when the feed omits one.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidRecord`] if the fee or the experience
    /// is negative or not a finite number, or if the experience does not fit
    /// in a `u32`.
    pub fn into_record(self, position: usize) -> Result<Record> {
        if !self.fees.is_finite() || self.fees < 0.0 {
            return Err(DirectoryError::InvalidRecord(format!(
                "provider {:?} has invalid fee {}",
                self.name, self.fees
            )));
        }
        let experience_years = whole_years(self.experience).ok_or_else(|| {
            DirectoryError::InvalidRecord(format!(
                "provider {:?} has invalid experience {}",
                self.name, self.experience
            ))
        })?;

        let id = self
            .id
            .map_or_else(|| format!("#{position}"), |id| id.to_string());

        Ok(Record {
            id,
            name: self.name,
            categories: self.speciality.into_set(),
            mode: self.consultation_type,
            fee: self.fees,
            experience_years,
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_years(experience: f64) -> Option<u32> {
    let years = experience.trunc();
    (years.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&years)).then(|| years as u32)
}

/// Parses a feed body into provider objects.
///
/// # Errors
///
/// Returns [`DirectoryError::Parse`] if the body is not a JSON array of
/// provider objects.
pub fn parse_feed(body: &str) -> Result<Vec<ProviderRecord>> {
    let providers: Vec<ProviderRecord> = serde_json::from_str(body)?;
    tracing::trace!(count = providers.len(), "parsed provider feed");
    Ok(providers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_and_multiple_specialities() {
        let body = r#"[
            {"id": 1, "name": "Dr. A", "speciality": "Dentist", "fees": 300, "experience": 4, "consultation_type": "video"},
            {"id": "b-2", "name": "Dr. B", "speciality": ["Dentist", "Orthodontist"], "fees": 450.5, "experience": 12, "consultation_type": "inClinic"},
            {"name": "Dr. C", "fees": 0, "experience": 1}
        ]"#;

        let records: Vec<Record> = parse_feed(body)
            .unwrap()
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.into_record(i).unwrap())
            .collect();

        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].categories.len(), 1);
        assert_eq!(records[1].id, "b-2");
        assert_eq!(records[1].categories.len(), 2);
        assert_eq!(records[2].id, "#2");
        assert!(records[2].categories.is_empty());
        assert_eq!(records[2].mode, "");
    }

    #[test]
    fn null_and_blank_specialities_normalize_to_empty() {
        let null: Speciality = serde_json::from_str("null").unwrap();
        assert_eq!(null, Speciality::Absent);
        assert!(null.into_set().is_empty());
        assert!(Speciality::Single("  ".into()).into_set().is_empty());
    }

    #[test]
    fn duplicate_specialities_collapse() {
        let set = Speciality::Multiple(vec![Some("ENT".into()), Some("ENT".into())]).into_set();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn null_inside_speciality_array_is_skipped() {
        let body = r#"[{"id": 1, "name": "Dr. A", "speciality": ["ENT", null], "fees": 100, "experience": 3, "consultation_type": "video"}]"#;
        let record = parse_feed(body).unwrap().remove(0).into_record(0).unwrap();
        assert_eq!(record.categories.iter().collect::<Vec<_>>(), ["ENT"]);
    }

    #[test]
    fn fractional_experience_is_accepted() {
        let body = r#"[
            {"id": 1, "name": "Dr. A", "speciality": "ENT", "fees": 100, "experience": 5.0, "consultation_type": "video"},
            {"id": 2, "name": "Dr. B", "speciality": "ENT", "fees": 100, "experience": 7.9, "consultation_type": "video"}
        ]"#;
        let records: Vec<Record> = parse_feed(body)
            .unwrap()
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.into_record(i).unwrap())
            .collect();
        assert_eq!(records[0].experience_years, 5);
        assert_eq!(records[1].experience_years, 7);
    }

    #[test]
    fn negative_experience_is_rejected() {
        let body = r#"[{"id": 1, "name": "Dr. A", "speciality": "ENT", "fees": 100, "experience": -2.0, "consultation_type": "video"}]"#;
        let provider = parse_feed(body).unwrap().remove(0);
        assert!(matches!(provider.into_record(0), Err(DirectoryError::InvalidRecord(_))));
    }

    #[test]
    fn negative_fee_is_rejected() {
        let provider = ProviderRecord {
            id: None,
            name: "Dr. Neg".into(),
            speciality: Speciality::Absent,
            fees: -1.0,
            experience: 3.0,
            consultation_type: "video".into(),
        };
        assert!(matches!(provider.into_record(0), Err(DirectoryError::InvalidRecord(_))));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(parse_feed("{\"not\": \"an array\"}"), Err(DirectoryError::Parse(_))));
    }
}
