//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use factory_health_api::error::{AppError, INVALID_INPUT_MESSAGE};
use factory_health_core::error::CoreError;
use factory_health_core::MachineType;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn invalid_input_returns_400_with_fixed_message() {
    let (status, json) = error_to_response(AppError::InvalidInput).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": INVALID_INPUT_MESSAGE }));
}

#[test]
fn invalid_input_display_matches_response_message() {
    assert_eq!(AppError::InvalidInput.to_string(), INVALID_INPUT_MESSAGE);
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("missing field".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "missing field");
}

#[tokio::test]
async fn unknown_machine_returns_404() {
    let err = AppError::Core(CoreError::UnknownMachine("forklift".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Unknown machine type: 'forklift'");
}

#[tokio::test]
async fn unknown_part_returns_404() {
    let err = AppError::Core(CoreError::UnknownPart {
        machine: MachineType::AssemblyLine,
        part: "nozzle".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Unknown part 'nozzle' for machine type assemblyLine");
}

#[test]
fn core_error_converts_into_app_error() {
    let err: AppError = "forklift".parse::<MachineType>().unwrap_err().into();
    assert_matches!(err, AppError::Core(CoreError::UnknownMachine(name)) if name == "forklift");
}
