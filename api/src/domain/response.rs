use serde::{Deserialize, Serialize};

use super::headers::Headers;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ResponseData {
    JSON(serde_json::Value),
    TEXT(String),
}
impl ResponseData {
    /// Display form of the body. Structured JSON is pretty printed with two
    /// space indentation; text and bare JSON strings are shown untouched.
    pub fn render(&self) -> String {
        match self {
            ResponseData::JSON(serde_json::Value::String(s)) => s.clone(),
            ResponseData::JSON(json) => {
                serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string())
            }
            ResponseData::TEXT(text) => text.clone(),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseData::JSON(json) => Some(json),
            ResponseData::TEXT(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusBand {
    SUCCESS,
    REDIRECT,
    ERROR,
    UNKNOWN,
}
impl StatusBand {
    /// Badge colour as an RGB triple.
    pub fn color(&self) -> [u8; 3] {
        match self {
            StatusBand::SUCCESS => [22, 163, 74],
            StatusBand::REDIRECT => [202, 138, 4],
            StatusBand::ERROR => [220, 38, 38],
            StatusBand::UNKNOWN => [107, 114, 128],
        }
    }
}

/// Outcome of one send. Replaces whatever was shown before it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    pub status: u16,
    pub status_text: String,
    pub headers: Headers,
    pub data: ResponseData,
    pub response_time_ms: u64,
    pub url: String,
}
impl ResponseDescriptor {
    pub fn band(&self) -> StatusBand {
        crate::utilities::response::status_band(self.status)
    }
}
