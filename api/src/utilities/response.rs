use crate::domain::headers::Headers;
use crate::domain::response::{ResponseData, ResponseDescriptor, StatusBand};
use crate::error::RequestError;
use crate::utilities::json::parse_json;

/// Everything the transport hands back once the body has been read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Headers,
    pub content_type: Option<String>,
    pub body: String,
}

/// A JSON content type means the body must parse; a malformed body fails the
/// whole send instead of falling back to text.
pub fn build_response(
    raw: RawResponse,
    response_time_ms: u64,
    url: &str,
) -> Result<ResponseDescriptor, RequestError> {
    let is_json = raw
        .content_type
        .as_deref()
        .is_some_and(|res_type| res_type.contains("application/json"));
    let data = if is_json {
        ResponseData::JSON(parse_json(&raw.body)?)
    } else {
        ResponseData::TEXT(raw.body)
    };
    Ok(ResponseDescriptor {
        status: raw.status,
        status_text: raw.status_text,
        headers: raw.headers,
        data,
        response_time_ms,
        url: url.to_string(),
    })
}

pub fn status_band(status: u16) -> StatusBand {
    match status {
        200..=299 => StatusBand::SUCCESS,
        300..=399 => StatusBand::REDIRECT,
        400..=u16::MAX => StatusBand::ERROR,
        _ => StatusBand::UNKNOWN,
    }
}
