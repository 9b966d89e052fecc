//! Client for the GreetFlow greeting service.
//!
//! This crate owns the only external boundary of the GreetFlow form: one JSON
//! call to `<base>/api/greet` per submission, plus a `/healthz` probe.
//!
//! # Overview
//!
//! - [`GreetingRequest`] / [`GreetingResponse`] mirror the wire format.
//! - [`GreetingClient`] issues exactly one request per call, with no timeout
//!   and no retry.
//! - [`ClientError`] classifies failures as service or transport errors and
//!   collapses them to display text through [`ClientError::user_message`].
//! - [`ClientSettings`] holds the base URL and the origin that relative paths
//!   resolve against.
//!
//! # Example
//!
//! ```no_run
//! use greetflow_client::{ClientSettings, GreetingClient, GreetingRequest, Occasion, Tone};
//!
//! async fn greet() -> greetflow_client::Result<()> {
//!     let client = GreetingClient::new(ClientSettings::default())?;
//!     let request = GreetingRequest {
//!         name: "Radhe".to_string(),
//!         dob: "1995-01-10".to_string(),
//!         occasion: Occasion::NewYear,
//!         tone: Tone::Motivational,
//!     };
//!
//!     let response = client.greet(&request).await?;
//!     println!("{} ({} / {})", response.message, response.source, response.env);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{Greeter, GreetingClient};
pub use config::ClientSettings;
pub use error::{ClientError, GENERIC_FAILURE, Result};
pub use model::{GreetingRequest, GreetingResponse, HealthStatus, Occasion, Tone};

/// Path of the greeting endpoint, relative to the base URL.
pub const GREET_PATH: &str = "/api/greet";

/// Path of the health endpoint, relative to the base URL.
pub const HEALTH_PATH: &str = "/healthz";

/// Current version of the client.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted() {
        assert!(GREET_PATH.starts_with('/'));
        assert!(HEALTH_PATH.starts_with('/'));
    }

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }
}
