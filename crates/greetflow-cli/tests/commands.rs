//! Integration tests for the CLI commands against a mock service.

use mockito::Matcher;
use serde_json::json;

use greetflow_cli::commands::{run_greet, run_health};
use greetflow_client::{ClientSettings, Occasion, Tone};
use greetflow_form::{FormFields, SubmissionState};

fn settings_for(server: &mockito::Server) -> ClientSettings {
    ClientSettings::with_base_url(server.url())
}

#[test]
fn test_greet_defaults() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/greet")
        .match_body(Matcher::Json(json!({
            "name": "Radhe",
            "dob": "1995-01-10",
            "occasion": "new_year",
            "tone": "motivational"
        })))
        .with_status(200)
        .with_body(r#"{"message":"Shine on, Radhe!","source":"llm","env":"prod"}"#)
        .create();

    let outcome = run_greet(FormFields::default(), settings_for(&server)).unwrap();

    assert!(!outcome.is_failure());
    match &outcome.state {
        SubmissionState::Success(response) => {
            assert_eq!(response.message, "Shine on, Radhe!");
            assert_eq!(response.source, "llm");
            assert_eq!(response.env, "prod");
        }
        other => panic!("expected success, got {other:?}"),
    }
    mock.assert();
}

#[test]
fn test_greet_sends_edited_fields() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/greet")
        .match_body(Matcher::Json(json!({
            "name": "Meera",
            "dob": "2001-06-30",
            "occasion": "birthday",
            "tone": "formal"
        })))
        .with_status(200)
        .with_body(r#"{"message":"Many happy returns, Meera.","source":"templated","env":"dev"}"#)
        .create();

    let fields = FormFields {
        name: "Meera".to_string(),
        dob: "2001-06-30".to_string(),
        occasion: Occasion::Birthday,
        tone: Tone::Formal,
    };
    let outcome = run_greet(fields.clone(), settings_for(&server)).unwrap();

    assert_eq!(outcome.request, fields.to_request());
    assert!(!outcome.is_failure());
    mock.assert();
}

#[test]
fn test_greet_service_error_is_failure_outcome() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/greet")
        .with_status(500)
        .with_body(r#"{"detail":"model unavailable"}"#)
        .create();

    let outcome = run_greet(FormFields::default(), settings_for(&server)).unwrap();

    assert!(outcome.is_failure());
    assert_eq!(
        outcome.state,
        SubmissionState::Failed("model unavailable".to_string())
    );
}

#[test]
fn test_health() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/healthz")
        .with_status(200)
        .with_body(r#"{"ok":true,"env":"dev"}"#)
        .create();

    let status = run_health(settings_for(&server)).unwrap();

    assert!(status.ok);
    assert_eq!(status.env, "dev");
}

#[test]
fn test_health_error_has_context() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/healthz").with_status(503).create();

    let error = run_health(settings_for(&server)).unwrap_err();

    assert!(format!("{error:#}").contains("HTTP 503"));
}
