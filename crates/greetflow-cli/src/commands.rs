//! Command implementations.

use anyhow::{Context, Result};
use greetflow_client::{ClientSettings, GreetingClient, GreetingRequest, HealthStatus};
use greetflow_form::{FormFields, FormState, SubmissionState};

use crate::logging::redact_value;

/// Result of one `greet` invocation.
#[derive(Debug, Clone)]
pub struct GreetOutcome {
    /// Request that was sent.
    pub request: GreetingRequest,
    /// Final submission state.
    pub state: SubmissionState,
}

impl GreetOutcome {
    /// Whether the submission ended in `Failed`.
    pub fn is_failure(&self) -> bool {
        matches!(self.state, SubmissionState::Failed(_))
    }
}

/// Submits `fields` once and waits for the service's answer.
///
/// The call runs on a current-thread runtime; a failed submission is a normal
/// outcome, only setup problems are returned as errors.
pub fn run_greet(fields: FormFields, settings: ClientSettings) -> Result<GreetOutcome> {
    let client = GreetingClient::new(settings).context("failed to create greeting client")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let mut form = FormState::with_fields(fields);
    let request = form
        .begin_submit()
        .context("a fresh form refused to start a submission")?;

    tracing::info!(
        name = redact_value(&request.name),
        dob = redact_value(&request.dob),
        occasion = %request.occasion,
        tone = %request.tone,
        "Submitting greeting request"
    );

    let outcome = runtime
        .block_on(client.greet(&request))
        .map_err(|e| e.user_message());
    form.finish_submit(outcome);

    if let Some(message) = form.error() {
        tracing::warn!("Greeting request failed: {message}");
    }

    Ok(GreetOutcome {
        request,
        state: form.submission().clone(),
    })
}

/// Probes the service's health endpoint.
pub fn run_health(settings: ClientSettings) -> Result<HealthStatus> {
    let client = GreetingClient::new(settings).context("failed to create greeting client")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime
        .block_on(client.health())
        .context("health check failed")
}
