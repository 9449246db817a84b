use thiserror::Error;

/// Failures surfaced by the haste API and its transport.
#[derive(Debug, Error)]
pub enum HasteError {
    #[error("No document found: {key}")]
    NotFound { key: String },

    #[error("Error reading client certificate: {reason}")]
    Certificate { reason: String },

    #[error("Error talking to {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Unexpected response from the server: {reason}")]
    MalformedResponse { reason: String },
}
