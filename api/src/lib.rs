pub mod config;
pub mod domain;
pub mod error;
pub mod utilities;

use std::time::Instant;

use log::{info, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use uuid::Uuid;

pub use config::RelayConfig;
pub use domain::auth::{AuthDescriptor, AuthMode};
pub use domain::form::{RequestForm, RowField, RowGroup};
pub use domain::headers::{Header, Headers};
pub use domain::request::{AssembledRequest, HttpMethod, KeyValueRow, RequestDraft};
pub use domain::response::{ResponseData, ResponseDescriptor, StatusBand};
pub use error::{RequestError, ValidationError};
pub use utilities::request::build_request;
pub use utilities::response::{build_response, status_band};

use utilities::request::convert_http_method;
use utilities::response::RawResponse;

/// Handle on the HTTP transport. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct RelayApi {
    pub client: reqwest::Client,
}

impl RelayApi {
    pub fn new(config: &RelayConfig) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(RelayApi { client })
    }

    /// Validates and assembles `draft`, then sends it.
    pub async fn submit(&self, draft: &RequestDraft) -> Result<ResponseDescriptor, RequestError> {
        let request = build_request(draft)?;
        self.send(request).await
    }

    pub async fn send(&self, input: AssembledRequest) -> Result<ResponseDescriptor, RequestError> {
        let request_id = Uuid::new_v4();
        info!("[{}] submitting {} {}", request_id, input.method, input.final_url);

        let headers = Self::header_map(&input.headers)?;
        let mut req = self
            .client
            .request(convert_http_method(input.method), &input.final_url)
            .headers(headers);
        if let Some(body) = input.body {
            req = req.body(body);
        }

        // Timing covers dispatch through the last byte of the body.
        let started = Instant::now();
        let res = req.send().await.map_err(|err| {
            warn!("[{}] request failed: {}", request_id, err);
            err
        })?;
        let status = res.status();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
        let mut res_headers = Headers::new();
        for (name, value) in res.headers() {
            res_headers.append(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
        }
        let res_text = res.text().await?;
        let response_time_ms = started.elapsed().as_millis() as u64;

        let raw = RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            headers: res_headers,
            content_type,
            body: res_text,
        };
        let response = build_response(raw, response_time_ms, &input.final_url).map_err(|err| {
            warn!("[{}] could not read response: {}", request_id, err);
            err
        })?;
        info!(
            "[{}] {} {} in {}ms",
            request_id, response.status, response.status_text, response.response_time_ms
        );
        Ok(response)
    }

    fn header_map(headers: &Headers) -> Result<HeaderMap, RequestError> {
        let mut header_map = HeaderMap::new();
        for header in headers {
            let header_name = HeaderName::from_bytes(header.key.as_bytes()).map_err(|e| {
                RequestError::InvalidHeader {
                    name: header.key.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(&header.value).map_err(|e| RequestError::InvalidHeader {
                    name: header.key.clone(),
                    reason: e.to_string(),
                })?;
            header_map.append(header_name, header_value);
        }
        Ok(header_map)
    }
}
