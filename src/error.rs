use thiserror::Error;

/// Errors raised while converting playlist references.
///
/// Only [`ConvertError::Input`], [`ConvertError::Config`] and
/// [`ConvertError::Aggregate`] abort a run. Everything else is reported for
/// a single reference or track, which is then skipped.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// No playlist reference was supplied
    #[error("No playlist reference supplied: {0}")]
    Input(String),

    /// Every attempt of a fetch failed, or an API answered with a failure status
    #[error("Request to {target} failed (last status: {})", describe_status(.status))]
    Network { target: String, status: Option<u16> },

    /// Content was fetched but nothing usable could be extracted from it
    #[error("Nothing to extract: {0}")]
    Parse(String),

    /// Required configuration is missing
    #[error("Configuration error: {0}")]
    Config(String),

    /// No reference produced a single song
    #[error("No songs could be converted from {attempted} reference(s)")]
    Aggregate { attempted: usize },

    /// Transport level HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "no response".to_string(),
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Whether this error stops the whole run instead of a single reference.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConvertError::Input(_) | ConvertError::Config(_) | ConvertError::Aggregate { .. }
        )
    }
}
