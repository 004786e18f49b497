//! Error taxonomy.
//!
//! Errors are reported through the `log` side channel and absorbed locally:
//! a bad configuration or a bad data record must never crash the host
//! application. Nothing in this crate panics on user data.

use thiserror::Error;

/// Construction-time failure. Non-fatal to the host application: the widget
/// simply fails to materialize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `container` was empty in the options.
    #[error("container is missing from options")]
    MissingContainer,

    /// `fetch_cards` was not provided in the options.
    #[error("option fetch_cards is mandatory")]
    MissingFetcher,

    /// The host could not locate the requested mount point.
    #[error("the selected container does not exist: {0}")]
    MountNotFound(String),
}

/// Render-time, per-card failure. The offending card is skipped; siblings
/// render normally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required record field is absent.
    #[error("{field} is mandatory")]
    MissingRequiredField { field: &'static str },
}

/// Failure reported by a fetch collaborator.
///
/// Exhaustion is never an error: collaborators signal "no more data" by
/// returning fewer items than requested. A `FetchError` means the chunk
/// could not be produced at all; the controller logs it and leaves the
/// page state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("card fetch failed: {0}")]
pub struct FetchError(pub String);

impl FetchError {
    /// Create a fetch error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
