use thiserror::Error;

/// Errors returned by the editing and storage operations around the
/// computation core. Parsing, rate lookup, decomposition and assembly are
/// total and never produce one of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FakturaError {
    /// One or more draft validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A rate table edit would break a table invariant.
    #[error("rate table error: {0}")]
    RateTable(String),

    /// The invoice store rejected an operation.
    #[error("invoice store error: {0}")]
    Store(String),

    /// Settings could not be serialized or deserialized.
    #[error("settings error: {0}")]
    Settings(String),
}

/// A single validation failure with the offending field and a user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "client.country").
    pub field: String,
    /// Human-readable reason, suitable for showing to the user.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Failure on `field` with a user-facing `message`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
