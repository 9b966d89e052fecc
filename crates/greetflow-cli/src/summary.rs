use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use greetflow_client::{GreetingResponse, HealthStatus};
use greetflow_form::SubmissionState;
use greetflow_cli::commands::GreetOutcome;

pub fn print_outcome(outcome: &GreetOutcome, json: bool) {
    match &outcome.state {
        SubmissionState::Success(response) if json => {
            match serde_json::to_string_pretty(response) {
                Ok(body) => println!("{body}"),
                Err(error) => eprintln!("error: failed to encode response: {error}"),
            }
        }
        SubmissionState::Success(response) => {
            println!("{}", greeting_table(outcome, response));
        }
        SubmissionState::Failed(message) if json => {
            println!("{}", serde_json::json!({ "error": message }));
        }
        SubmissionState::Failed(message) => eprintln!("Error: {message}"),
        SubmissionState::Idle | SubmissionState::Loading => {
            eprintln!("error: submission did not complete");
        }
    }
}

pub fn print_health(status: &HealthStatus) {
    let state = if status.ok { "ok" } else { "unhealthy" };
    if status.env.is_empty() {
        println!("Service: {state}");
    } else {
        println!("Service: {state} (env: {})", status.env);
    }
}

fn greeting_table(outcome: &GreetOutcome, response: &GreetingResponse) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Greeting"), header_cell("")]);
    table.add_row(vec![
        label_cell("Message"),
        Cell::new(&response.message).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![label_cell("Occasion"), dim_cell(outcome.request.occasion.label())]);
    table.add_row(vec![label_cell("Tone"), dim_cell(outcome.request.tone.label())]);
    table.add_row(vec![label_cell("Provider"), Cell::new(&response.source)]);
    table.add_row(vec![label_cell("Env"), Cell::new(&response.env)]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
