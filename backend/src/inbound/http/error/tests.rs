//! Regression coverage for the HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::{Error, ErrorCode};

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::validation_failed("bad fields"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn maps_each_code_to_its_status(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let response = Error::internal("connection refused on 127.0.0.1:5432").error_response();
    let body = to_bytes(response.into_body()).await.expect("body");
    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Internal server error")
    );
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some(ErrorCode::InternalError.as_str())
    );
}

#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("student id must be an integer")
        .with_details(json!({ "field": "id", "code": "invalid_id" }));
    let response = error.error_response();
    let body = to_bytes(response.into_body()).await.expect("body");
    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("student id must be an integer")
    );
    assert_eq!(
        value
            .get("details")
            .and_then(|d| d.get("field"))
            .and_then(Value::as_str),
        Some("id")
    );
}
