//! Views for the greeting form.
//!
//! Views are pure functions of [`App`] state.

use std::fmt;

use greetflow_client::{GreetingResponse, Occasion, Tone};
use greetflow_form::{FormState, SubmissionState};
use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::app::{App, HealthState};
use crate::message::Message;
use crate::theme::{
    FORM_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, card, text_error, text_muted,
    text_status,
};

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Generate Greeting";

/// Submit button label while a request is in flight.
pub const LOADING_LABEL: &str = "Generating...";

// =============================================================================
// PICKER OPTIONS
// =============================================================================

/// Occasion as shown in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccasionOption(pub Occasion);

impl fmt::Display for OccasionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label())
    }
}

/// Tone as shown in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneOption(pub Tone);

impl fmt::Display for ToneOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label())
    }
}

// =============================================================================
// MAIN VIEW
// =============================================================================

/// Root view: form, outcome, service status.
pub fn view_main(app: &App) -> Element<'_, Message> {
    let content = column![
        text("GreetFlow").size(28),
        text("New Year and birthday greetings").size(14).style(text_muted),
        Space::new().height(SPACING_MD),
        view_form(&app.form),
        view_outcome(app.form.submission()),
        Space::new().height(Length::Fill),
        view_footer(&app.health, app.settings.display.dark_mode),
    ]
    .spacing(SPACING_SM)
    .width(FORM_WIDTH);

    container(content)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_LG)
        .into()
}

fn view_form(form: &FormState) -> Element<'_, Message> {
    let fields = form.fields();

    let occasions: Vec<OccasionOption> = Occasion::ALL.into_iter().map(OccasionOption).collect();
    let tones: Vec<ToneOption> = Tone::ALL.into_iter().map(ToneOption).collect();

    column![
        labeled(
            "Name",
            text_input("Name", &fields.name)
                .on_input(Message::NameChanged)
                .padding(SPACING_SM)
                .into(),
        ),
        labeled(
            "Date of birth",
            text_input("YYYY-MM-DD", &fields.dob)
                .on_input(Message::DobChanged)
                .padding(SPACING_SM)
                .into(),
        ),
        row![
            labeled(
                "Occasion",
                pick_list(occasions, Some(OccasionOption(fields.occasion)), |o| {
                    Message::OccasionSelected(o.0)
                })
                .width(Length::Fill)
                .into(),
            ),
            labeled(
                "Tone",
                pick_list(tones, Some(ToneOption(fields.tone)), |t| {
                    Message::ToneSelected(t.0)
                })
                .width(Length::Fill)
                .into(),
            ),
        ]
        .spacing(SPACING_MD),
        Space::new().height(SPACING_XS),
        button(text(submit_label(form)))
            .on_press_maybe(form.can_submit().then_some(Message::Submit))
            .padding([SPACING_SM, SPACING_MD])
            .style(button::primary),
    ]
    .spacing(SPACING_SM)
    .into()
}

fn labeled<'a>(label: &'a str, input: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(12).style(text_muted), input]
        .spacing(SPACING_XS)
        .width(Length::Fill)
        .into()
}

fn view_outcome(submission: &SubmissionState) -> Element<'_, Message> {
    match submission {
        SubmissionState::Failed(message) => text(error_line(message)).style(text_error).into(),
        SubmissionState::Success(response) => container(
            column![
                text(&response.message).size(18),
                text(provider_line(response)).size(12).style(text_muted),
            ]
            .spacing(SPACING_SM),
        )
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card)
        .into(),
        SubmissionState::Idle | SubmissionState::Loading => Space::new().height(0.0).into(),
    }
}

fn view_footer(health: &HealthState, dark_mode: bool) -> Element<'_, Message> {
    let status = match health {
        HealthState::Checking => text(health.summary()).size(12).style(text_muted),
        _ => text(health.summary())
            .size(12)
            .style(text_status(health.is_healthy())),
    };
    let recheck = button(text("Recheck").size(12))
        .on_press_maybe((*health != HealthState::Checking).then_some(Message::CheckHealth))
        .style(button::text);
    let theme_toggle = button(text(if dark_mode { "Light" } else { "Dark" }).size(12))
        .on_press(Message::ToggleTheme)
        .style(button::text);

    row![status, Space::new().width(Length::Fill), recheck, theme_toggle]
        .align_y(Alignment::Center)
        .spacing(SPACING_XS)
        .into()
}

// =============================================================================
// TEXT HELPERS
// =============================================================================

/// Label of the submit button for the current state.
pub fn submit_label(form: &FormState) -> &'static str {
    if form.is_loading() {
        LOADING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// Error line shown for a failed submission.
pub fn error_line(message: &str) -> String {
    format!("Error: {message}")
}

/// Metadata line under a greeting.
pub fn provider_line(response: &GreetingResponse) -> String {
    format!("Provider: {} | Env: {}", response.source, response.env)
}
