//! Property-based tests for field edits.
//!
//! Field edits must always leave the latest value per field in place and must
//! never disturb the submission state, whatever that state is.

use greetflow_client::{GreetingResponse, Occasion, Tone};
use greetflow_form::{FieldUpdate, FormFields, FormState};
use proptest::prelude::*;

fn occasion() -> impl Strategy<Value = Occasion> {
    prop::sample::select(Occasion::ALL.to_vec())
}

fn tone() -> impl Strategy<Value = Tone> {
    prop::sample::select(Tone::ALL.to_vec())
}

fn field_update() -> impl Strategy<Value = FieldUpdate> {
    prop_oneof![
        ".{0,24}".prop_map(FieldUpdate::Name),
        "[0-9-]{0,12}".prop_map(FieldUpdate::Dob),
        occasion().prop_map(FieldUpdate::Occasion),
        tone().prop_map(FieldUpdate::Tone),
    ]
}

/// Puts a fresh form into one of the four lifecycle states.
fn form_in_state(which: u8) -> FormState {
    let mut form = FormState::new();
    match which % 4 {
        0 => {}
        1 => {
            form.begin_submit();
        }
        2 => {
            form.begin_submit();
            form.finish_submit(Ok(GreetingResponse {
                message: "Hi".to_string(),
                source: "template".to_string(),
                env: "dev".to_string(),
            }));
        }
        _ => {
            form.begin_submit();
            form.finish_submit(Err("HTTP 500".to_string()));
        }
    }
    form
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_latest_value_per_field_wins(
        which in any::<u8>(),
        updates in prop::collection::vec(field_update(), 0..32),
    ) {
        let mut form = form_in_state(which);
        let submission_before = form.submission().clone();

        let mut expected = FormFields::default();
        for update in &updates {
            match update {
                FieldUpdate::Name(name) => expected.name = name.clone(),
                FieldUpdate::Dob(dob) => expected.dob = dob.clone(),
                FieldUpdate::Occasion(occasion) => expected.occasion = *occasion,
                FieldUpdate::Tone(tone) => expected.tone = *tone,
            }
        }

        for update in updates {
            form.update_field(update);
        }

        prop_assert_eq!(form.fields(), &expected);
        prop_assert_eq!(form.submission(), &submission_before);
    }

    #[test]
    fn test_request_mirrors_fields_at_submit(
        updates in prop::collection::vec(field_update(), 0..16),
        later in prop::collection::vec(field_update(), 1..8),
    ) {
        let mut form = FormState::new();
        for update in updates {
            form.update_field(update);
        }
        let snapshot = form.fields().to_request();

        let request = form.begin_submit().expect("idle form accepts submit");
        for update in later {
            form.update_field(update);
        }

        prop_assert_eq!(request, snapshot);
        prop_assert!(form.begin_submit().is_none());
    }
}
