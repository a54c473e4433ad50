use thiserror::Error;

/// Problems found in the form before anything touches the network.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL is required")]
    EmptyUrl,

    #[error("All enabled parameters must have both key and value")]
    IncompleteParam,

    #[error("All enabled headers must have both key and value")]
    IncompleteHeader,

    #[error("Invalid JSON in request body")]
    InvalidJsonBody,
}

/// Anything that ends a single send attempt.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network failure, refused connection, invalid URL and the like.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The transport refused a header the user typed.
    #[error("Invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Body was declared `application/json` but did not parse.
    #[error("Failed to parse JSON response: {0}")]
    ResponseParse(#[from] serde_json::Error),
}

impl RequestError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RequestError::Validation(_))
    }
}
