//! Editable form fields.

use greetflow_client::{GreetingRequest, Occasion, Tone};

/// Name pre-filled in a fresh form.
pub const DEFAULT_NAME: &str = "Radhe";

/// Date of birth pre-filled in a fresh form.
pub const DEFAULT_DOB: &str = "1995-01-10";

/// Current values of the four form fields.
///
/// Values are free-form; nothing here checks them. The service is the
/// validation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    /// Person to greet.
    pub name: String,
    /// Date of birth, expected as `YYYY-MM-DD`.
    pub dob: String,
    /// Greeting category.
    pub occasion: Occasion,
    /// Stylistic register.
    pub tone: Tone,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            dob: DEFAULT_DOB.to_string(),
            occasion: Occasion::default(),
            tone: Tone::default(),
        }
    }
}

impl FormFields {
    /// Applies a single field edit.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Dob(dob) => self.dob = dob,
            FieldUpdate::Occasion(occasion) => self.occasion = occasion,
            FieldUpdate::Tone(tone) => self.tone = tone,
        }
    }

    /// Snapshots the fields into a request.
    #[must_use]
    pub fn to_request(&self) -> GreetingRequest {
        GreetingRequest {
            name: self.name.clone(),
            dob: self.dob.clone(),
            occasion: self.occasion,
            tone: self.tone,
        }
    }
}

/// A change to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// New name.
    Name(String),
    /// New date of birth.
    Dob(String),
    /// New occasion.
    Occasion(Occasion),
    /// New tone.
    Tone(Tone),
}

impl FieldUpdate {
    /// Name of the field this update targets.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Dob(_) => "dob",
            Self::Occasion(_) => "occasion",
            Self::Tone(_) => "tone",
        }
    }
}
