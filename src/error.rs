use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfluxError {
    #[error("{0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("{0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("{0}")]
    UrlError(#[from] url::ParseError),

    /// The server rejected a write. The message is the response body text,
    /// verbatim; this API signals failure through the body, not the status
    /// code.
    #[error("{0}")]
    ApiError(String),

    /// A query response body could not be decoded into series. Carries the
    /// query text and the raw body for diagnostics.
    #[error("failed to decode response of query `{query}`: {message}. raw body: {body}")]
    DecodeError { query: String, message: String, body: String },
}
