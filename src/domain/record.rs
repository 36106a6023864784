//! Provider record model and ordering keys.
//!
//! A [`Record`] is one provider entry as the rest of the crate sees it: categories
//! already normalized into a set, identifiers already turned into strings. The
//! wire shape of the feed lives in [`crate::store::models`] and is converted once
//! at load time.

use std::collections::BTreeSet;

/// One provider entry in the directory.
///
/// Records are immutable once loaded. The filter engine only reads them and
/// the visible set holds clones.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identifier from the feed, stringified if it arrived as a number.
    pub id: String,
    /// Display name, matched by the search term.
    pub name: String,
    /// Categories (specialities) the provider belongs to. May be empty.
    pub categories: BTreeSet<String>,
    /// Consultation mode, e.g. `video` or `inClinic`.
    pub mode: String,
    /// Consultation fee. Never negative.
    pub fee: f64,
    /// Years of experience.
    pub experience_years: u32,
}

impl Record {
    /// Creates a record from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use docfinder::domain::Record;
    ///
    /// let record = Record::new("7", "Dr. Bob", ["Dermatology"], "inClinic", 50.0, 10);
    /// assert!(record.categories.contains("Dermatology"));
    /// ```
    #[must_use]
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        categories: I,
        mode: impl Into<String>,
        fee: f64,
        experience_years: u32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            mode: mode.into(),
            fee,
            experience_years,
        }
    }

    /// Returns `true` if the name contains `needle_lower` ignoring case.
    ///
    /// The caller passes an already lowercased needle so the term is folded
    /// once per pass rather than once per record.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }
}

/// Ordering applied after filtering.
///
/// Both orderings use a stable sort so ties keep their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the record store order.
    #[default]
    Unsorted,
    /// Lowest fee first.
    FeeAscending,
    /// Most experienced first.
    ExperienceDescending,
}

impl SortKey {
    /// Query-string token for this key, `None` for the default.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Unsorted => None,
            Self::FeeAscending => Some("fee-ascending"),
            Self::ExperienceDescending => Some("experience-descending"),
        }
    }

    /// Parses a query-string token.
    ///
    /// Accepts the canonical tokens as well as the short `fees` and `experience`
    /// forms found in older shared links. Anything else means unsorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use docfinder::domain::SortKey;
    ///
    /// assert_eq!(SortKey::from_param("fees"), SortKey::FeeAscending);
    /// assert_eq!(SortKey::from_param("experience-descending"), SortKey::ExperienceDescending);
    /// assert_eq!(SortKey::from_param("rating"), SortKey::Unsorted);
    /// ```
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "fee-ascending" | "fees" => Self::FeeAscending,
            "experience-descending" | "experience" => Self::ExperienceDescending,
            _ => Self::Unsorted,
        }
    }

    /// Label shown next to the sort control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unsorted => "Original order",
            Self::FeeAscending => "Fees (Low to High)",
            Self::ExperienceDescending => "Experience (High to Low)",
        }
    }
}

/// Consultation modes offered by the filter panel.
///
/// Records carry the mode as a free string and the query matches it
/// case-insensitively, so values outside this list still load and simply
/// never match a panel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultationMode {
    /// Remote video consultation.
    Video,
    /// In-person visit.
    InClinic,
}

impl ConsultationMode {
    /// Modes in panel order.
    pub const ALL: [Self; 2] = [Self::Video, Self::InClinic];

    /// Value used in records and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::InClinic => "inClinic",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "Video Consult",
            Self::InClinic => "In Clinic",
        }
    }

    /// Case-insensitive lookup by value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value))
    }
}
