//! Message module for GreetFlow.
//!
//! All user interactions and async results flow through [`Message`].

use greetflow_client::{GreetingResponse, HealthStatus, Occasion, Tone};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Form fields
    // =========================================================================
    /// Name input edited
    NameChanged(String),

    /// Date of birth input edited
    DobChanged(String),

    /// Occasion picked
    OccasionSelected(Occasion),

    /// Tone picked
    ToneSelected(Tone),

    // =========================================================================
    // Submission
    // =========================================================================
    /// "Generate Greeting" pressed
    Submit,

    /// The greeting call finished
    GreetingReceived(Result<GreetingResponse, String>),

    // =========================================================================
    // Service status
    // =========================================================================
    /// Probe the service again
    CheckHealth,

    /// The health probe finished
    HealthChecked(Result<HealthStatus, String>),

    // =========================================================================
    // Display
    // =========================================================================
    /// Switch between light and dark themes
    ToggleTheme,
}
