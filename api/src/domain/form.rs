use serde::{Deserialize, Serialize};

use super::{
    auth::AuthDescriptor,
    request::{HttpMethod, KeyValueRow, RequestDraft},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowGroup {
    PARAMS,
    HEADERS,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowField {
    Key(String),
    Value(String),
    Enabled(bool),
}

/// Editable request state behind the form. Every setter takes a full
/// replacement value; row lists are never patched in place.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestForm {
    method: HttpMethod,
    url: String,
    params: Vec<KeyValueRow>,
    headers: Vec<KeyValueRow>,
    body: String,
    auth: AuthDescriptor,
    busy: bool,
}
impl Default for RequestForm {
    fn default() -> Self {
        Self {
            method: HttpMethod::GET,
            url: "".into(),
            params: vec![KeyValueRow::default()],
            headers: vec![KeyValueRow::default()],
            body: "".into(),
            auth: AuthDescriptor::default(),
            busy: false,
        }
    }
}

impl RequestForm {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }
    pub fn set_method(&mut self, method: HttpMethod) {
        self.method = method;
    }

    pub fn url(&self) -> &str {
        &self.url
    }
    pub fn set_url(&mut self, url: String) {
        self.url = url;
    }

    pub fn params(&self) -> &[KeyValueRow] {
        &self.params
    }
    pub fn set_params(&mut self, params: Vec<KeyValueRow>) {
        self.params = params;
    }

    pub fn headers(&self) -> &[KeyValueRow] {
        &self.headers
    }
    pub fn set_headers(&mut self, headers: Vec<KeyValueRow>) {
        self.headers = headers;
    }

    pub fn rows(&self, group: RowGroup) -> &[KeyValueRow] {
        match group {
            RowGroup::PARAMS => self.params(),
            RowGroup::HEADERS => self.headers(),
        }
    }
    pub fn set_rows(&mut self, group: RowGroup, rows: Vec<KeyValueRow>) {
        match group {
            RowGroup::PARAMS => self.set_params(rows),
            RowGroup::HEADERS => self.set_headers(rows),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
    pub fn set_body(&mut self, body: String) {
        self.body = body;
    }

    pub fn auth(&self) -> &AuthDescriptor {
        &self.auth
    }
    pub fn set_auth(&mut self, auth: AuthDescriptor) {
        self.auth = auth;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Snapshot of the current fields for the assembler.
    pub fn draft(&self) -> RequestDraft {
        RequestDraft {
            method: self.method,
            url: self.url.clone(),
            params: self.params.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
            auth: self.auth.clone(),
        }
    }
}

pub fn append_row(rows: &[KeyValueRow]) -> Vec<KeyValueRow> {
    let mut updated = rows.to_vec();
    updated.push(KeyValueRow::default());
    updated
}

pub fn remove_row(rows: &[KeyValueRow], index: usize) -> Vec<KeyValueRow> {
    rows.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, row)| row.clone())
        .collect()
}

pub fn update_row(rows: &[KeyValueRow], index: usize, field: RowField) -> Vec<KeyValueRow> {
    let mut updated = rows.to_vec();
    if let Some(row) = updated.get_mut(index) {
        match field {
            RowField::Key(key) => row.key = key,
            RowField::Value(value) => row.value = value,
            RowField::Enabled(enabled) => row.enabled = enabled,
        }
    }
    updated
}
