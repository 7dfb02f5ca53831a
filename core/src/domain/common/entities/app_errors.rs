use thiserror::Error;

/// Failures a food guess can end in. None of them are retried.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Image too large. Retake with lower quality.")]
    PayloadTooLarge,

    #[error("Missing OPENAI_API_KEY")]
    MissingApiKey,

    #[error("AI error: {status} {body}")]
    Upstream { status: u16, body: String },

    #[error("AI returned invalid JSON")]
    BadUpstreamFormat(String),

    #[error("AI returned unexpected format")]
    UnexpectedFormat { details: serde_json::Value },

    #[error("{0}")]
    ExternalServiceError(String),
}
