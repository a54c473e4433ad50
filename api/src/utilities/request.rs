use log::debug;
use reqwest::Method;
use url::form_urlencoded;

use crate::domain::headers::Headers;
use crate::domain::request::{AssembledRequest, HttpMethod, KeyValueRow, RequestDraft};
use crate::error::ValidationError;
use crate::utilities::json::parse_json;

pub fn convert_http_method(input: HttpMethod) -> Method {
    match input {
        HttpMethod::GET => Method::GET,
        HttpMethod::POST => Method::POST,
        HttpMethod::PUT => Method::PUT,
        HttpMethod::PATCH => Method::PATCH,
        HttpMethod::DELETE => Method::DELETE,
        HttpMethod::HEAD => Method::HEAD,
        HttpMethod::OPTIONS => Method::OPTIONS,
    }
}

/// Checks run in order; the first failure is the one reported.
pub fn validate_request(draft: &RequestDraft) -> Result<(), ValidationError> {
    if draft.url.trim().is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    if draft
        .params
        .iter()
        .any(|p| p.is_active() && p.value.is_empty())
    {
        return Err(ValidationError::IncompleteParam);
    }
    if draft
        .headers
        .iter()
        .any(|h| h.is_active() && h.value.is_empty())
    {
        return Err(ValidationError::IncompleteHeader);
    }
    if has_json_body(draft) && parse_json(&draft.body).is_err() {
        return Err(ValidationError::InvalidJsonBody);
    }
    Ok(())
}

pub fn build_request(draft: &RequestDraft) -> Result<AssembledRequest, ValidationError> {
    validate_request(draft)?;

    let final_url = append_query(&draft.url, &draft.params);

    let mut headers: Headers = draft
        .headers
        .iter()
        .filter(|h| h.is_complete())
        .map(|h| (h.key.clone(), h.value.clone()))
        .collect();

    if let Some(authorization) = draft.auth.authorization_header() {
        headers.insert("Authorization", authorization);
    }

    let body = if has_json_body(draft) {
        headers.insert("Content-Type", "application/json");
        Some(draft.body.clone())
    } else {
        None
    };

    debug!(
        "assembled {} {} with {} header(s), body: {}",
        draft.method,
        final_url,
        headers.len(),
        body.is_some()
    );

    Ok(AssembledRequest {
        method: draft.method,
        final_url,
        headers,
        body,
    })
}

fn has_json_body(draft: &RequestDraft) -> bool {
    draft.method.allows_body() && !draft.body.trim().is_empty()
}

fn append_query(url: &str, params: &[KeyValueRow]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut appended = 0;
    for param in params.iter().filter(|p| p.is_complete()) {
        serializer.append_pair(&param.key, &param.value);
        appended += 1;
    }
    if appended == 0 {
        return url.to_string();
    }
    let query = serializer.finish();
    let separator = if !url.contains('?') {
        "?"
    } else if url.ends_with('?') || url.ends_with('&') {
        ""
    } else {
        "&"
    };
    format!("{}{}{}", url, separator, query)
}
