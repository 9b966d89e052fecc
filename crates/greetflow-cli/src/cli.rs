//! CLI argument definitions for GreetFlow.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use greetflow_client::{Occasion, Tone};
use greetflow_form::{DEFAULT_DOB, DEFAULT_NAME, FormFields};

#[derive(Parser)]
#[command(
    name = "greetflow",
    version,
    about = "GreetFlow - New Year and birthday greetings",
    long_about = "Request a personalised greeting from the GreetFlow service.\n\n\
                  The service base URL is read from GREETFLOW_API_BASE_URL or --api-base.\n\
                  Leave it empty to send relative requests to the configured origin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include names and dates of birth in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Greeting service base URL (overrides GREETFLOW_API_BASE_URL).
    #[arg(long = "api-base", value_name = "URL", global = true)]
    pub api_base: Option<String>,

    /// Origin for relative requests when the base URL is empty (overrides GREETFLOW_ORIGIN).
    #[arg(long = "origin", value_name = "URL", global = true)]
    pub origin: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Request a greeting and print it.
    Greet(GreetArgs),

    /// Check that the greeting service is reachable.
    Health,
}

#[derive(Parser)]
pub struct GreetArgs {
    /// Name of the person to greet.
    #[arg(long = "name", default_value = DEFAULT_NAME)]
    pub name: String,

    /// Date of birth (YYYY-MM-DD).
    #[arg(long = "dob", value_name = "DATE", default_value = DEFAULT_DOB)]
    pub dob: String,

    /// Greeting occasion.
    #[arg(long = "occasion", value_enum, default_value = "new_year")]
    pub occasion: OccasionArg,

    /// Tone of the greeting.
    #[arg(long = "tone", value_enum, default_value = "motivational")]
    pub tone: ToneArg,

    /// Print the service reply as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

impl GreetArgs {
    /// Form field values described by these arguments.
    pub fn to_fields(&self) -> FormFields {
        FormFields {
            name: self.name.clone(),
            dob: self.dob.clone(),
            occasion: self.occasion.into(),
            tone: self.tone.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OccasionArg {
    #[value(name = "new_year")]
    NewYear,
    Birthday,
}

impl From<OccasionArg> for Occasion {
    fn from(arg: OccasionArg) -> Self {
        match arg {
            OccasionArg::NewYear => Self::NewYear,
            OccasionArg::Birthday => Self::Birthday,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ToneArg {
    Motivational,
    Funny,
    Formal,
}

impl From<ToneArg> for Tone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Motivational => Self::Motivational,
            ToneArg::Funny => Self::Funny,
            ToneArg::Formal => Self::Formal,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
