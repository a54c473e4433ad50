use relay_api::{
  AuthDescriptor, HttpMethod, RequestError, ResponseData, StatusBand, ValidationError,
};
use reqwest::Url;
use serde_json::json;
use wiremock::{
  matchers::{body_string, header, method, path},
  Match, Mock, ResponseTemplate,
};

use crate::helpers::{draft, row, spawn_test_app};

// wiremock matches dont include a raw url match, only path and
// query pieces. this is used to validate the full url the client
// actually sent, query string included.
pub struct MockUrlMatcher(String);
impl Match for MockUrlMatcher {
  fn matches(&self, request: &wiremock::Request) -> bool {
    match Url::parse(&self.0) {
      Ok(expected) => request.url == expected,
      Err(_) => false,
    }
  }
}

#[tokio::test]
async fn enabled_params_are_sent_in_row_order() {
  let test_app = spawn_test_app().await;
  Mock::given(method("GET"))
    .and(MockUrlMatcher(test_app.url("/y?a=1&a=3")))
    .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
    .expect(1)
    .mount(&test_app.server)
    .await;

  let mut input = draft(HttpMethod::GET, &test_app.url("/y"));
  input.params = vec![row("a", "1", true), row("b", "2", false), row("a", "3", true)];
  let response = test_app.app.submit(&input).await.unwrap();

  assert_eq!(response.status, 200);
  assert_eq!(response.status_text, "OK");
  assert_eq!(response.data, ResponseData::TEXT(String::from("ok")));
  assert_eq!(response.url, test_app.url("/y?a=1&a=3"));
  assert_eq!(response.band(), StatusBand::SUCCESS);
}

#[tokio::test]
async fn post_sends_raw_body_with_json_content_type() {
  let test_app = spawn_test_app().await;
  let raw_body = "{ \"a\":   1 }";
  Mock::given(method("POST"))
    .and(path("/items"))
    .and(header("content-type", "application/json"))
    .and(body_string(raw_body))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
    .expect(1)
    .mount(&test_app.server)
    .await;

  let mut input = draft(HttpMethod::POST, &test_app.url("/items"));
  input.body = String::from(raw_body);
  let response = test_app.app.submit(&input).await.unwrap();

  assert_eq!(response.status, 201);
  assert_eq!(response.status_text, "Created");
  assert_eq!(response.data, ResponseData::JSON(json!({ "id": 7 })));
}

#[tokio::test]
async fn get_never_sends_a_body() {
  let test_app = spawn_test_app().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(204))
    .expect(1)
    .mount(&test_app.server)
    .await;

  let mut input = draft(HttpMethod::GET, &test_app.url("/"));
  input.body = String::from("{\"ignored\": true}");
  let _ = test_app.app.submit(&input).await.unwrap();

  let received = test_app.server.received_requests().await.unwrap();
  assert_eq!(received.len(), 1);
  assert!(received[0].body.is_empty());
  assert!(received[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn headers_differing_only_in_case_are_both_sent() {
  let test_app = spawn_test_app().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&test_app.server)
    .await;

  let mut input = draft(HttpMethod::GET, &test_app.url("/"));
  input.headers = vec![row("Accept", "text/plain", true), row("accept", "text/html", true)];
  let _ = test_app.app.submit(&input).await.unwrap();

  let received = test_app.server.received_requests().await.unwrap();
  let accept: Vec<&str> = received[0]
    .headers
    .get_all("accept")
    .iter()
    .filter_map(|value| value.to_str().ok())
    .collect();
  assert_eq!(accept, vec!["text/plain", "text/html"]);
}

#[tokio::test]
async fn bearer_token_is_sent_as_authorization() {
  let test_app = spawn_test_app().await;
  Mock::given(method("GET"))
    .and(header("authorization", "Bearer abc.def"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&test_app.server)
    .await;

  let mut input = draft(HttpMethod::GET, &test_app.url("/me"));
  input.auth = AuthDescriptor::bearer("abc.def");
  let response = test_app.app.submit(&input).await.unwrap();
  assert_eq!(response.status, 200);
}

#[tokio::test]
async fn basic_credentials_are_base64_encoded() {
  let test_app = spawn_test_app().await;
  Mock::given(method("GET"))
    .and(header("authorization", "Basic dXNlcjpwYXNz"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&test_app.server)
    .await;

  let mut input = draft(HttpMethod::GET, &test_app.url("/me"));
  input.auth = AuthDescriptor::basic("user", "pass");
  let response = test_app.app.submit(&input).await.unwrap();
  assert_eq!(response.status, 200);
}

#[tokio::test]
async fn response_headers_and_error_status_are_reported() {
  let test_app = spawn_test_app().await;
  Mock::given(method("GET"))
    .and(path("/missing"))
    .respond_with(
      ResponseTemplate::new(404)
        .insert_header("x-request-id", "42")
        .set_body_string("nope"),
    )
    .mount(&test_app.server)
    .await;

  let input = draft(HttpMethod::GET, &test_app.url("/missing"));
  let response = test_app.app.submit(&input).await.unwrap();

  assert_eq!(response.status, 404);
  assert_eq!(response.status_text, "Not Found");
  assert_eq!(response.band(), StatusBand::ERROR);
  assert_eq!(response.headers.get("x-request-id"), Some("42"));
  assert_eq!(response.data.render(), "nope");
}

#[tokio::test]
async fn malformed_json_response_fails_the_send() {
  let test_app = spawn_test_app().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
    .mount(&test_app.server)
    .await;

  let input = draft(HttpMethod::GET, &test_app.url("/broken"));
  let err = test_app.app.submit(&input).await.unwrap_err();
  assert!(matches!(err, RequestError::ResponseParse(_)));
}

#[tokio::test]
async fn validation_failure_never_reaches_the_network() {
  let test_app = spawn_test_app().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&test_app.server)
    .await;

  let mut input = draft(HttpMethod::GET, &test_app.url("/"));
  input.headers = vec![row("X-Empty", "", true)];
  let err = test_app.app.submit(&input).await.unwrap_err();
  assert!(matches!(
    err,
    RequestError::Validation(ValidationError::IncompleteHeader)
  ));
  assert!(err.is_validation());
}

#[tokio::test]
async fn invalid_header_name_is_rejected_before_sending() {
  let test_app = spawn_test_app().await;
  let mut input = draft(HttpMethod::GET, &test_app.url("/"));
  input.headers = vec![row("bad header", "x", true)];

  let err = test_app.app.submit(&input).await.unwrap_err();
  assert!(matches!(err, RequestError::InvalidHeader { .. }));
  assert!(test_app.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_host_is_a_transport_failure() {
  let test_app = spawn_test_app().await;
  let input = draft(HttpMethod::GET, "http://127.0.0.1:1/");

  let err = test_app.app.submit(&input).await.unwrap_err();
  assert!(matches!(err, RequestError::Transport(_)));
}
