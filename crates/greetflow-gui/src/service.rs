//! Greeting service calls.
//!
//! Async functions wrapped with Iced's `Task::perform` pattern. Errors are
//! reduced to display text before they reach the message loop.

use greetflow_client::{GreetingClient, GreetingRequest};
use iced::Task;

use crate::message::Message;

/// Request a greeting for `request`.
///
/// Returns a Task that will produce a `GreetingReceived` message.
pub fn request_greeting(client: GreetingClient, request: GreetingRequest) -> Task<Message> {
    Task::perform(
        async move {
            client
                .greet(&request)
                .await
                .map_err(|e| e.user_message())
        },
        Message::GreetingReceived,
    )
}

/// Probe the service's health endpoint.
///
/// Returns a Task that will produce a `HealthChecked` message.
pub fn check_health(client: GreetingClient) -> Task<Message> {
    Task::perform(
        async move { client.health().await.map_err(|e| e.user_message()) },
        Message::HealthChecked,
    )
}
