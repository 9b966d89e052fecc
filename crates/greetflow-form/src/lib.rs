//! Form state for the GreetFlow greeting form.
//!
//! [`FormState`] is the single source of truth a rendering layer observes:
//! the editable [`FormFields`] and the [`SubmissionState`] of the one request
//! that may be in flight.
//!
//! The lifecycle is a small state machine:
//!
//! ```text
//! Idle ──submit──▶ Loading ──resolve──▶ Success(response)
//!                     ▲                 Failed(message)
//!                     └──────submit─────────┘
//! ```
//!
//! Event loops that cannot hold `&mut FormState` across the network call use
//! the split form, [`FormState::begin_submit`] then [`FormState::finish_submit`];
//! field edits keep flowing in between.

#![warn(missing_docs)]

pub mod fields;
pub mod state;

pub use fields::{DEFAULT_DOB, DEFAULT_NAME, FieldUpdate, FormFields};
pub use state::{FormState, SubmissionState};
