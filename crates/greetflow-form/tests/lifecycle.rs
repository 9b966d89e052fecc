//! End-to-end submission scenarios against a mock greeting service.

use greetflow_client::{ClientSettings, GreetingClient, GreetingResponse, Occasion, Tone};
use greetflow_form::{FieldUpdate, FormState, SubmissionState};
use mockito::Matcher;
use serde_json::json;

async fn mock_reply(server: &mut mockito::Server, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("POST", "/api/greet")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn client_for(server: &mockito::Server) -> GreetingClient {
    GreetingClient::new(ClientSettings::with_base_url(server.url())).unwrap()
}

#[tokio::test]
async fn test_success_reply_lands_in_state() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_reply(
        &mut server,
        200,
        r#"{"message":"Happy New Year, Radhe!","source":"templated","env":"dev"}"#,
    )
    .await;

    let mut form = FormState::new();
    form.submit(&client_for(&server)).await;

    assert_eq!(
        form.submission(),
        &SubmissionState::Success(GreetingResponse {
            message: "Happy New Year, Radhe!".to_string(),
            source: "templated".to_string(),
            env: "dev".to_string(),
        })
    );
}

#[tokio::test]
async fn test_service_detail_becomes_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_reply(&mut server, 500, r#"{"detail":"model unavailable"}"#).await;

    let mut form = FormState::new();
    form.submit(&client_for(&server)).await;

    assert_eq!(
        form.submission(),
        &SubmissionState::Failed("model unavailable".to_string())
    );
}

#[tokio::test]
async fn test_unparseable_error_body_uses_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_reply(&mut server, 500, "Internal Server Error").await;

    let mut form = FormState::new();
    form.submit(&client_for(&server)).await;

    assert_eq!(form.submission(), &SubmissionState::Failed("HTTP 500".to_string()));
}

#[tokio::test]
async fn test_defaults_scenario() {
    let mut server = mockito::Server::new_async().await;
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
        .expect(1)
        .create_async()
        .await;

    let mut form = FormState::new();
    form.submit(&client_for(&server)).await;

    let response = form.response().expect("submission should succeed");
    assert_eq!(response.source, "llm");
    assert_eq!(response.env, "prod");
    assert_eq!(response.message, "Shine on, Radhe!");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_edited_fields_are_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/greet")
        .match_body(Matcher::Json(json!({
            "name": "Meera",
            "dob": "2001-06-30",
            "occasion": "birthday",
            "tone": "formal"
        })))
        .with_status(200)
        .with_body(r#"{"message":"Dear Meera","source":"template","env":"dev"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut form = FormState::new();
    form.update_field(FieldUpdate::Name("Meera".to_string()));
    form.update_field(FieldUpdate::Dob("2001-06-30".to_string()));
    form.update_field(FieldUpdate::Occasion(Occasion::Birthday));
    form.update_field(FieldUpdate::Tone(Tone::Formal));
    form.submit(&client_for(&server)).await;

    assert!(form.response().is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_identical_requests_resolve_independently() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("POST", "/api/greet")
        .with_status(500)
        .with_body(r#"{"detail":"model unavailable"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut form = FormState::new();
    form.submit(&client).await;
    assert_eq!(form.error(), Some("model unavailable"));
    first.assert_async().await;
    first.remove_async().await;

    let second = server
        .mock("POST", "/api/greet")
        .with_status(200)
        .with_body(r#"{"message":"Shine on, Radhe!","source":"llm","env":"prod"}"#)
        .expect(1)
        .create_async()
        .await;

    form.submit(&client).await;
    assert_eq!(form.error(), None);
    assert_eq!(
        form.response().map(|r| r.message.as_str()),
        Some("Shine on, Radhe!")
    );
    second.assert_async().await;
}

#[tokio::test]
async fn test_split_submit_accepts_edits_while_in_flight() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/greet")
        .match_body(Matcher::PartialJson(json!({ "name": "Radhe" })))
        .with_status(200)
        .with_body(r#"{"message":"Hi Radhe","source":"template","env":"dev"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut form = FormState::new();

    let request = form.begin_submit().expect("idle form accepts submit");
    form.update_field(FieldUpdate::Name("Someone else".to_string()));
    assert!(form.begin_submit().is_none());

    let outcome = client.greet(&request).await.map_err(|e| e.user_message());
    form.finish_submit(outcome);

    assert_eq!(form.response().map(|r| r.message.as_str()), Some("Hi Radhe"));
    assert_eq!(form.fields().name, "Someone else");
    mock.assert_async().await;
}
