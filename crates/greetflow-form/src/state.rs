//! Submission lifecycle.

use greetflow_client::{GENERIC_FAILURE, Greeter, GreetingRequest, GreetingResponse};

use crate::fields::{FieldUpdate, FormFields};

/// Lifecycle of the current submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading,

    /// The last submission produced a greeting.
    Success(GreetingResponse),

    /// The last submission failed; holds the message to display.
    Failed(String),
}

impl SubmissionState {
    /// Short name of the variant, for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failed(_) => "failed",
        }
    }
}

/// Field values plus the state of the one in-flight submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: FormFields,
    submission: SubmissionState,
}

impl FormState {
    /// Creates a form with default field values in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle form with the given field values.
    #[must_use]
    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            submission: SubmissionState::Idle,
        }
    }

    /// Current field values.
    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Current submission state.
    #[must_use]
    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.submission, SubmissionState::Loading)
    }

    /// Whether the submit trigger should be offered.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// The greeting from the last successful submission, if that is the
    /// current state.
    #[must_use]
    pub fn response(&self) -> Option<&GreetingResponse> {
        match &self.submission {
            SubmissionState::Success(response) => Some(response),
            _ => None,
        }
    }

    /// The error message of the last failed submission, if that is the
    /// current state.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Applies a field edit. Allowed in every state; never touches the
    /// submission state.
    pub fn update_field(&mut self, update: FieldUpdate) {
        tracing::trace!(field = update.field(), "Field updated");
        self.fields.apply(update);
    }

    /// Starts a submission.
    ///
    /// Clears any previous result, moves to `Loading`, and returns the request
    /// snapshot to send. Returns `None` without changing anything while a
    /// request is already in flight.
    pub fn begin_submit(&mut self) -> Option<GreetingRequest> {
        if self.is_loading() {
            tracing::debug!("Submit ignored: a request is already in flight");
            return None;
        }

        tracing::debug!(from = self.submission.label(), "Submission started");
        self.submission = SubmissionState::Loading;
        Some(self.fields.to_request())
    }

    /// Applies the outcome of the submission started by [`begin_submit`](Self::begin_submit).
    ///
    /// An empty error message is replaced with a generic one.
    pub fn finish_submit(&mut self, outcome: Result<GreetingResponse, String>) {
        if !self.is_loading() {
            tracing::debug!(
                state = self.submission.label(),
                "Resolution arrived outside Loading; applying anyway"
            );
        }

        self.submission = match outcome {
            Ok(response) => SubmissionState::Success(response),
            Err(message) if message.is_empty() => {
                SubmissionState::Failed(GENERIC_FAILURE.to_string())
            }
            Err(message) => SubmissionState::Failed(message),
        };

        tracing::debug!(to = self.submission.label(), "Submission resolved");
    }

    /// Runs one full submission against `greeter`: begin, await exactly one
    /// outcome, resolve.
    ///
    /// A no-op that makes no call while a request is already in flight.
    pub async fn submit<G: Greeter>(&mut self, greeter: &G) -> &SubmissionState {
        let Some(request) = self.begin_submit() else {
            return &self.submission;
        };

        let outcome = greeter
            .greet(&request)
            .await
            .map_err(|e| e.user_message());

        self.finish_submit(outcome);
        &self.submission
    }
}
