//! Tests for the domain error type and its wire envelope.

use super::*;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_data("Invalid data"), ErrorCode::InvalidData)]
#[case(Error::unauthorized("Unauthorized"), ErrorCode::Unauthorized)]
#[case(Error::conflict("Username already exists"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("db down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidData, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn serialises_as_error_envelope() {
    let error = Error::conflict("Username already exists").with_trace_id(TRACE_ID);
    let value: Value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(value, json!({ "error": "Username already exists" }));
}

#[rstest]
fn trace_id_is_none_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::unauthorized("Unauthorized") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}
