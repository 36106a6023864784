//! Docfinder: a filterable, shareable healthcare provider directory.
//!
//! Docfinder fetches a list of providers from a JSON feed and lets a user
//! narrow and order it:
//! - Case-insensitive name search with live suggestions
//! - Consultation mode and speciality filters
//! - Sorting by fee or by experience
//! - A query string that reproduces the current view when shared or reloaded

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command-line driver (main.rs)                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Store Layer   │
//! │ (ui/)         │   │ (query/)      │   │ (store/)      │
//! │ - Rendering   │   │ - Transitions │   │ - Feed model  │
//! │ - Commands    │   │ - URL codec   │   │ - HTTP / file │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Engine, Infrastructure & Domain Layers             │
//! │  - Filter and suggestion engine (engine/)           │
//! │  - Persisted address (infrastructure/)              │
//! │  - Record model, error types (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber on stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Record, SortKey, errors)
//! - [`engine`]: Filter engine and suggestion lookup
//! - [`infrastructure`]: Persisted view of the query string
//! - [`query`]: Query state and its query-string codec
//! - [`store`]: Feed model, loading, and the record store
//! - [`ui`]: View model, text rendering, and command parsing
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! The binary reads an optional TOML file; command-line flags override it:
//!
//! ```toml
//! endpoint = "https://example.org/providers.json"
//! suggestion_limit = 3
//! base_path = "/"
//! trace_level = "debug"
//! ```
//!
//! # Data Flow
//!
//! 1. **Startup** (`main.rs`): parse flags and config, initialize tracing,
//!    create `AppState` with the initial address, send `Event::Reload`
//! 2. **Fetch**: `Action::FetchDirectory` runs [`store::load`] and feeds the
//!    outcome back as `Event::DirectoryLoaded`
//! 3. **Initial Address**: the first successful load decodes the pending
//!    query into the query state
//! 4. **Transitions**: each command becomes an event; the handler re-derives
//!    the visible set, then emits `Action::PushQuery` with the encoded query
//! 5. **Render**: the view model is computed from state and printed
//!
//! # Example
//!
//! ```rust
//! use docfinder::domain::Record;
//! use docfinder::store::Dataset;
//! use docfinder::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default(), "sortBy=fee-ascending");
//!
//! let dataset = Dataset::new(vec![
//!     Record::new("1", "Alice", ["Cardiology"], "video", 100.0, 5),
//!     Record::new("2", "Bob", ["Dermatology"], "inClinic", 50.0, 10),
//! ]);
//! let (_, actions) = handle_event(&mut state, &Event::DirectoryLoaded(Ok(dataset)))?;
//!
//! assert_eq!(state.visible[0].name, "Bob");
//! assert_eq!(actions, vec![Action::PushQuery("sortBy=fee-ascending".into())]);
//! # Ok::<(), docfinder::DirectoryError>(())
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod query;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{DirectoryError, Record, Result, SortKey};
pub use query::QueryState;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Feed used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Application configuration.
///
/// Every field has a default, so a configuration file may set any subset of
/// keys. Unknown keys are rejected to catch typos.
///
/// # Example
///
/// ```rust
/// use docfinder::Config;
///
/// let config = Config::from_toml_str("suggestion_limit = 5")?;
/// assert_eq!(config.suggestion_limit, 5);
/// assert_eq!(config.base_path, "/");
/// # Ok::<(), docfinder::DirectoryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// URL of the provider feed. Default: [`DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Local JSON feed read instead of `endpoint` when set.
    pub source_file: Option<PathBuf>,

    /// Maximum number of name suggestions. Default: 3
    pub suggestion_limit: usize,

    /// Path the query string is attached to. Default: `"/"`
    pub base_path: String,

    /// Tracing level.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"warn"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            source_file: None,
            suggestion_limit: engine::DEFAULT_SUGGESTION_LIMIT,
            base_path: "/".to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] for malformed TOML, wrongly typed
    /// values, or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| DirectoryError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Io`] if the file cannot be read and
    /// [`DirectoryError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

/// Creates the application state for a configuration and initial address.
///
/// The initial query is held until the first successful load.
///
/// # Example
///
/// ```rust
/// use docfinder::{initialize, Config};
///
/// let state = initialize(&Config::default(), "name=ali");
/// assert!(state.has_pending_query());
/// assert_eq!(state.suggestion_limit, 3);
/// ```
#[must_use]
pub fn initialize(config: &Config, initial_query: &str) -> AppState {
    tracing::debug!(
        suggestion_limit = config.suggestion_limit,
        base_path = %config.base_path,
        "initializing docfinder"
    );

    AppState::new(initial_query, config.suggestion_limit).with_base_path(config.base_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let config = Config::from_toml_str(
            r#"
            source_file = "providers.json"
            base_path = "/doctors"
            trace_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.source_file, Some(PathBuf::from("providers.json")));
        assert_eq!(config.base_path, "/doctors");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("sugestion_limit = 2").unwrap_err();
        assert!(matches!(err, DirectoryError::Config(_)));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(matches!(
            Config::from_toml_str("suggestion_limit = \"three\""),
            Err(DirectoryError::Config(_))
        ));
    }

    #[test]
    fn config_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"endpoint = \"http://localhost:8080/feed\"\n").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/feed");
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_file(dir.path().join("absent.toml")),
            Err(DirectoryError::Io(_))
        ));
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            suggestion_limit: 5,
            base_path: "/doctors".to_string(),
            ..Config::default()
        };
        let state = initialize(&config, "");
        assert_eq!(state.suggestion_limit, 5);
        assert_eq!(state.href(), "/doctors");
    }
}
