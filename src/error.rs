use thiserror::Error;

/// Errors raised while talking to the recipe catalog or driving the explorer.
///
/// The explorer folds every variant into a single user-facing status message per
/// operation, so callers rarely need to match on these directly.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// The catalog answered, but nothing matched
    #[error("{0}")]
    NoResults(String),

    /// Transport failure talking to the catalog
    #[error("Failed to reach recipe catalog: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog answered with a non-success status code
    #[error("Recipe catalog returned status {0}")]
    Status(u16),

    /// The catalog answered with a body we could not make sense of
    #[error("Malformed catalog response: {0}")]
    Parse(String),
}

impl ExplorerError {
    /// True for transport, status and schema failures, i.e. anything that is not
    /// a validation or empty-result condition.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ExplorerError::Network(_) | ExplorerError::Status(_) | ExplorerError::Parse(_)
        )
    }
}
