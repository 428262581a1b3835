//! Error types for the site core.

/// Failure loading site configuration.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SiteError {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Contact form input rejected before anything is sent.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContactError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("email address is not valid: {email}")]
    InvalidEmail { email: String },
}

/// The form endpoint could not be reached.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ToastError {
    #[error("toast bus already has {limit} subscribers")]
    TooManySubscribers { limit: usize },
}
