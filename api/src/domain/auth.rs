use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AuthMode {
    #[default]
    NONE,
    BEARER,
    BASIC,
}
impl AuthMode {
    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::NONE => "No Auth",
            AuthMode::BEARER => "Bearer Token",
            AuthMode::BASIC => "Basic Auth",
        }
    }
}

/// Auth settings from the form. Only the fields that belong to `r#type` are read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthDescriptor {
    pub r#type: AuthMode,
    pub token: String,
    pub username: String,
    pub password: String,
}

impl AuthDescriptor {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            r#type: AuthMode::BEARER,
            token: token.into(),
            ..Default::default()
        }
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            r#type: AuthMode::BASIC,
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Value for the `Authorization` header, if this descriptor produces one.
    pub fn authorization_header(&self) -> Option<String> {
        match self.r#type {
            AuthMode::BEARER if !self.token.is_empty() => Some(format!("Bearer {}", self.token)),
            AuthMode::BASIC if !self.username.is_empty() && !self.password.is_empty() => {
                Some(basic_auth(&self.username, &self.password))
            }
            _ => None,
        }
    }
}

pub fn basic_auth(username: &str, password: &str) -> String {
    let plain = format!("{}:{}", username, password);
    format!("Basic {}", BASE64.encode(plain))
}
