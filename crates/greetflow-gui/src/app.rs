//! Main application module for GreetFlow.
//!
//! The architecture follows the Elm pattern: State → Message → Update → View.
//! All state changes happen in [`App::update`]; async work runs through
//! `Task::perform` and comes back as a message.

use greetflow_client::{GreetingClient, HealthStatus};
use greetflow_form::{FieldUpdate, FormState};
use iced::{Element, Task, Theme};

use crate::message::Message;
use crate::service;
use crate::settings::Settings;
use crate::theme::app_theme;
use crate::view::view_main;

/// Last known reachability of the greeting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthState {
    /// A probe is in flight.
    Checking,
    /// The service answered the probe.
    Reachable(HealthStatus),
    /// The probe failed.
    Unreachable(String),
}

impl HealthState {
    /// One-line summary shown under the form.
    pub fn summary(&self) -> String {
        match self {
            Self::Checking => "Service: checking...".to_string(),
            Self::Reachable(status) if !status.ok => "Service: unhealthy".to_string(),
            Self::Reachable(status) if status.env.is_empty() => "Service: online".to_string(),
            Self::Reachable(status) => format!("Service: online (env: {})", status.env),
            Self::Unreachable(message) => format!("Service: unreachable ({message})"),
        }
    }

    /// Whether the last probe reported a healthy service.
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Reachable(status) if status.ok)
    }
}

/// Main application struct.
pub struct App {
    /// Field values and submission lifecycle.
    pub form: FormState,
    /// HTTP client, or the reason it could not be built.
    pub client: Result<GreetingClient, String>,
    /// Service status line.
    pub health: HealthState,
    /// Persisted preferences.
    pub settings: Settings,
}

impl App {
    /// Create a new application instance from the settings on disk.
    pub fn new() -> (Self, Task<Message>) {
        Self::with_settings(Settings::load())
    }

    /// Create an application instance from explicit settings.
    ///
    /// Starts a health probe when the client could be built.
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let client_settings = settings.client_settings();
        tracing::info!(
            base_url = %client_settings.base_url,
            origin = %client_settings.origin,
            "Using greeting service"
        );

        let client = GreetingClient::new(client_settings).map_err(|e| e.user_message());
        let (health, task) = match &client {
            Ok(client) => (HealthState::Checking, service::check_health(client.clone())),
            Err(message) => (HealthState::Unreachable(message.clone()), Task::none()),
        };

        let app = Self {
            form: FormState::new(),
            client,
            health,
            settings,
        };
        (app, task)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Form fields
            // =================================================================
            Message::NameChanged(name) => self.edit(FieldUpdate::Name(name)),
            Message::DobChanged(dob) => self.edit(FieldUpdate::Dob(dob)),
            Message::OccasionSelected(occasion) => self.edit(FieldUpdate::Occasion(occasion)),
            Message::ToneSelected(tone) => self.edit(FieldUpdate::Tone(tone)),

            // =================================================================
            // Submission
            // =================================================================
            Message::Submit => {
                let Some(request) = self.form.begin_submit() else {
                    return Task::none();
                };
                match &self.client {
                    Ok(client) => service::request_greeting(client.clone(), request),
                    Err(message) => {
                        self.form.finish_submit(Err(message.clone()));
                        Task::none()
                    }
                }
            }

            Message::GreetingReceived(result) => {
                if let Err(message) = &result {
                    tracing::warn!("Greeting request failed: {message}");
                }
                self.form.finish_submit(result);
                Task::none()
            }

            // =================================================================
            // Service status
            // =================================================================
            Message::CheckHealth => match &self.client {
                Ok(client) => {
                    self.health = HealthState::Checking;
                    service::check_health(client.clone())
                }
                Err(_) => Task::none(),
            },

            Message::HealthChecked(result) => {
                self.health = match result {
                    Ok(status) => HealthState::Reachable(status),
                    Err(message) => {
                        tracing::warn!("Health check failed: {message}");
                        HealthState::Unreachable(message)
                    }
                };
                Task::none()
            }

            // =================================================================
            // Display
            // =================================================================
            Message::ToggleTheme => {
                self.settings.display.dark_mode = !self.settings.display.dark_mode;
                if let Err(e) = self.settings.save() {
                    tracing::warn!("Failed to save settings: {e}");
                }
                Task::none()
            }
        }
    }

    fn edit(&mut self, update: FieldUpdate) -> Task<Message> {
        self.form.update_field(update);
        Task::none()
    }

    /// Render the application.
    pub fn view(&self) -> Element<'_, Message> {
        view_main(self)
    }

    /// Window title.
    pub fn title(&self) -> String {
        "GreetFlow".to_string()
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        app_theme(self.settings.display.dark_mode)
    }
}
