//! Persisted view of the query state.

/// Somewhere the encoded query can be read from and written to.
///
/// The application never calls this directly. It emits
/// [`Action::PushQuery`](crate::app::Action::PushQuery) and the driver applies it.
pub trait Location {
    /// Query string of the current entry, without a leading `?`.
    fn current_query(&self) -> &str;

    /// Records a new query string as the current entry.
    fn push_query(&mut self, query: &str);
}

/// Browser-like history kept in memory.
///
/// Pushing the query that is already current does not add an entry, so
/// transitions that leave the query unchanged do not grow the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    path: String,
    entries: Vec<String>,
}

impl MemoryLocation {
    /// Creates a history whose first entry is `initial_query`.
    ///
    /// A leading `?` is stripped so `--query '?name=ali'` and `--query name=ali`
    /// behave the same.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docfinder::infrastructure::{Location, MemoryLocation};
    ///
    /// let mut location = MemoryLocation::new("/", "?name=ali");
    /// assert_eq!(location.current_query(), "name=ali");
    ///
    /// location.push_query("name=ali&sortBy=fee-ascending");
    /// assert_eq!(location.href(), "/?name=ali&sortBy=fee-ascending");
    /// assert_eq!(location.entries().len(), 2);
    /// ```
    #[must_use]
    pub fn new(path: impl Into<String>, initial_query: &str) -> Self {
        let initial = initial_query.strip_prefix('?').unwrap_or(initial_query);
        Self {
            path: path.into(),
            entries: vec![initial.to_string()],
        }
    }

    /// All queries pushed so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Path plus the current query, or the bare path for an empty query.
    #[must_use]
    pub fn href(&self) -> String {
        let query = self.current_query();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{query}", self.path)
        }
    }
}

impl Location for MemoryLocation {
    fn current_query(&self) -> &str {
        self.entries.last().map_or("", String::as_str)
    }

    fn push_query(&mut self, query: &str) {
        if self.current_query() == query {
            tracing::trace!(query = %query, "query unchanged, history not extended");
            return;
        }
        tracing::debug!(query = %query, "address updated");
        self.entries.push(query.to_string());
    }
}
