use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{auth::AuthDescriptor, headers::Headers};

#[derive(Clone, Copy, Serialize, Debug, Deserialize, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
    OPTIONS,
    HEAD,
}
impl HttpMethod {
    /// Order used by the method selector.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::DELETE,
        HttpMethod::PATCH,
        HttpMethod::HEAD,
        HttpMethod::OPTIONS,
    ];

    /// Only POST, PUT and PATCH ever carry a JSON payload.
    pub fn allows_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::PATCH)
    }
}
impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq)]
pub struct HttpMethodParseError;
impl std::fmt::Display for HttpMethodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported http method")
    }
}
impl std::error::Error for HttpMethodParseError {}

impl FromStr for HttpMethod {
    type Err = HttpMethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            "PUT" => Ok(HttpMethod::PUT),
            "PATCH" => Ok(HttpMethod::PATCH),
            "DELETE" => Ok(HttpMethod::DELETE),
            "OPTIONS" => Ok(HttpMethod::OPTIONS),
            "HEAD" => Ok(HttpMethod::HEAD),
            _ => Err(HttpMethodParseError),
        }
    }
}

/// A key/value/enabled triple, shared by query params and headers.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct KeyValueRow {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}
impl KeyValueRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>, enabled: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled,
        }
    }

    /// Enabled with a key; these are the rows validation looks at.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.key.is_empty()
    }

    /// Rows that actually end up in the assembled request.
    pub fn is_complete(&self) -> bool {
        self.is_active() && !self.value.is_empty()
    }
}
impl Default for KeyValueRow {
    fn default() -> Self {
        Self {
            key: String::from(""),
            value: String::from(""),
            enabled: true,
        }
    }
}

/// Everything the user has typed into the request form at the moment Send is pressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RequestDraft {
    pub method: HttpMethod,
    pub url: String,
    pub params: Vec<KeyValueRow>,
    pub headers: Vec<KeyValueRow>,
    pub body: String,
    pub auth: AuthDescriptor,
}

/// A validated request, ready to hand to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRequest {
    pub method: HttpMethod,
    pub final_url: String,
    pub headers: Headers,
    pub body: Option<String>,
}
