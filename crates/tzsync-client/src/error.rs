use thiserror::Error;

/// API client errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream reported a failure, either as a non-success HTTP
    /// status or as a `status != "OK"` envelope in a 200 response.
    #[error("API error: {0}")]
    Api(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
