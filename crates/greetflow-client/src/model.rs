//! Wire types for the greeting service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Greeting category requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    /// New Year greeting.
    #[default]
    NewYear,
    /// Birthday greeting.
    Birthday,
}

impl Occasion {
    /// All occasions, in picker order.
    pub const ALL: [Self; 2] = [Self::NewYear, Self::Birthday];

    /// Name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewYear => "new_year",
            Self::Birthday => "birthday",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NewYear => "New Year",
            Self::Birthday => "Birthday",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|occasion| occasion.as_str() == s)
            .ok_or_else(|| format!("unknown occasion: {s}"))
    }
}

/// Stylistic register requested for the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Encouraging, upbeat.
    #[default]
    Motivational,
    /// Light-hearted.
    Funny,
    /// Polite and reserved.
    Formal,
}

impl Tone {
    /// All tones, in picker order.
    pub const ALL: [Self; 3] = [Self::Motivational, Self::Funny, Self::Formal];

    /// Name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Motivational => "motivational",
            Self::Funny => "funny",
            Self::Formal => "formal",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Motivational => "Motivational",
            Self::Funny => "Funny",
            Self::Formal => "Formal",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| format!("unknown tone: {s}"))
    }
}

/// Body of `POST /api/greet`.
///
/// `dob` is expected in `YYYY-MM-DD` form. The client does not check it;
/// the service rejects malformed dates with a `detail` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRequest {
    /// Person to greet.
    pub name: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    /// Greeting category.
    pub occasion: Occasion,
    /// Stylistic register.
    pub tone: Tone,
}

/// Successful reply from `POST /api/greet`.
///
/// All three fields are required; a 2xx reply missing any of them is
/// reported as [`ClientError::InvalidResponse`](crate::ClientError::InvalidResponse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    /// Generated greeting text.
    pub message: String,
    /// Which generation provider produced the text.
    pub source: String,
    /// Deployment environment that served the request.
    pub env: String,
}

/// Reply from `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Whether the service reports itself healthy.
    pub ok: bool,
    /// Deployment environment of the service.
    #[serde(default)]
    pub env: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = GreetingRequest {
            name: "Radhe".to_string(),
            dob: "1995-01-10".to_string(),
            occasion: Occasion::NewYear,
            tone: Tone::Motivational,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Radhe",
                "dob": "1995-01-10",
                "occasion": "new_year",
                "tone": "motivational"
            })
        );
    }

    #[test]
    fn test_wire_names_match_serde() {
        for occasion in Occasion::ALL {
            let encoded = serde_json::to_value(occasion).unwrap();
            assert_eq!(encoded, serde_json::Value::from(occasion.as_str()));
        }
        for tone in Tone::ALL {
            let encoded = serde_json::to_value(tone).unwrap();
            assert_eq!(encoded, serde_json::Value::from(tone.as_str()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("birthday".parse::<Occasion>(), Ok(Occasion::Birthday));
        assert_eq!("funny".parse::<Tone>(), Ok(Tone::Funny));
        assert!("christmas".parse::<Occasion>().is_err());
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn test_response_requires_all_fields() {
        let full = r#"{"message":"Hi","source":"template","env":"dev"}"#;
        assert!(serde_json::from_str::<GreetingResponse>(full).is_ok());

        let missing_env = r#"{"message":"Hi","source":"template"}"#;
        assert!(serde_json::from_str::<GreetingResponse>(missing_env).is_err());
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let body = r#"{"message":"Hi","source":"openai","env":"prod","latency_ms":12}"#;
        let response: GreetingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.source, "openai");
    }

    #[test]
    fn test_health_env_defaults() {
        let health: HealthStatus = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(health.ok);
        assert!(health.env.is_empty());
    }
}
