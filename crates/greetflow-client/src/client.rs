//! HTTP client for the greeting service.

use std::future::Future;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::config::ClientSettings;
use crate::error::{ClientError, Result};
use crate::model::{GreetingRequest, GreetingResponse, HealthStatus};
use crate::{GREET_PATH, HEALTH_PATH};

/// Header used to correlate a call with the service's logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("greetflow/", env!("CARGO_PKG_VERSION"));

/// Something that can turn one [`GreetingRequest`] into one outcome.
///
/// [`GreetingClient`] is the production implementation; the form state
/// machine only depends on this trait.
pub trait Greeter {
    /// Issues exactly one greeting call.
    fn greet(
        &self,
        request: &GreetingRequest,
    ) -> impl Future<Output = Result<GreetingResponse>> + Send;
}

/// Client for the greeting service.
///
/// Every call is a single attempt: no timeout is configured and nothing is
/// retried.
#[derive(Debug, Clone)]
pub struct GreetingClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl GreetingClient {
    /// Creates a client for the service described by `settings`.
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { http, settings })
    }

    /// Settings this client was built with.
    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Requests a greeting via `POST <base>/api/greet`.
    pub async fn greet(&self, request: &GreetingRequest) -> Result<GreetingResponse> {
        let url = self.settings.endpoint(GREET_PATH)?;
        let request_id = Uuid::new_v4();

        tracing::info!(
            %request_id,
            occasion = %request.occasion,
            tone = %request.tone,
            "Requesting greeting from {}",
            url
        );

        let response = self
            .http
            .post(url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(request)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%request_id, "Greeting request failed: {e}"))?;

        let greeting: GreetingResponse = self.handle_response(response, request_id).await?;

        tracing::info!(
            %request_id,
            source = %greeting.source,
            env = %greeting.env,
            "Greeting received"
        );

        Ok(greeting)
    }

    /// Probes `GET <base>/healthz`.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.settings.endpoint(HEALTH_PATH)?;
        let request_id = Uuid::new_v4();

        tracing::debug!(%request_id, "Checking service health at {}", url);

        let response = self
            .http
            .get(url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await?;

        self.handle_response(response, request_id).await
    }

    /// Reads the body as JSON regardless of status and classifies the outcome.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        request_id: Uuid,
    ) -> Result<T> {
        let status = response.status();

        if let Some(echoed) = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            tracing::debug!(%request_id, service_request_id = echoed, "Service echoed request id");
        }

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice::<Value>(&body);

        if !status.is_success() {
            let detail = parsed.ok().and_then(|value| detail_message(&value));
            let err = ClientError::from_status(status.as_u16(), detail);
            tracing::warn!(
                %request_id,
                status = status.as_u16(),
                "Greeting service error: {}",
                err
            );
            return Err(err);
        }

        let value = parsed?;
        serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

impl Greeter for GreetingClient {
    fn greet(
        &self,
        request: &GreetingRequest,
    ) -> impl Future<Output = Result<GreetingResponse>> + Send {
        GreetingClient::greet(self, request)
    }
}

/// Extracts a human-readable message from an error body's `detail` field.
///
/// A non-empty string is used as-is, whitespace included. `null`, `false`,
/// `0` and `""` count as no detail. A list of validation entries (each with a
/// `msg` and an optional `loc` path) is flattened to `"field: msg; ..."`.
fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(detail) if detail.is_empty() => None,
        Value::String(detail) => Some(detail.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(entries) => {
            let messages: Vec<String> = entries.iter().filter_map(validation_entry).collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}

fn validation_entry(entry: &Value) -> Option<String> {
    if let Some(text) = entry.as_str() {
        return Some(text.to_string());
    }
    let msg = entry.get("msg").and_then(Value::as_str)?;
    let field = entry
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .and_then(Value::as_str);
    Some(match field {
        Some(field) => format!("{field}: {msg}"),
        None => msg.to_string(),
    })
}
