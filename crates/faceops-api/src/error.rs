use thiserror::Error;

/// Errors from the face recognition API client.
///
/// A failed fetch is deliberately distinct from an empty result: callers get
/// `Ok(vec![])` only when the service really returned nothing.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("FACEOPS_API_KEY is not set — put it in the environment or a .env file")]
    MissingApiKey,
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
    #[error("http transport: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
}
