//! Text formatting for records, yields and session views.
//!
//! Both front-ends render through these helpers so the wording of the details
//! panel, the `list` table and the plain-text view stays in one place.

use crate::app::session::{Action, ViewState};
use crate::domain::{AnimalRecord, YieldOutcome};
use crate::rules::compute_yield;

pub const GOAT_PLACEHOLDER: &str = "N/A (goat)";
pub const NO_YIELD: &str = "N/A";

pub fn format_liters(liters: f64) -> String {
    format!("{liters:.2} liters")
}

pub fn format_age(record: &AnimalRecord) -> String {
    match record.vitals() {
        Some(v) => format!("{} years {} months", v.age_years, v.age_months),
        None => GOAT_PLACEHOLDER.to_string(),
    }
}

pub fn format_teats(record: &AnimalRecord) -> String {
    match record.teat_count() {
        Some(n) => n.to_string(),
        None => GOAT_PLACEHOLDER.to_string(),
    }
}

pub fn format_yield(outcome: YieldOutcome) -> String {
    match outcome {
        YieldOutcome::Value(liters) => format_liters(liters),
        YieldOutcome::NotApplicableGoat | YieldOutcome::NotMilkable => NO_YIELD.to_string(),
    }
}

/// Plain-text table of every record, one line each.
pub fn format_registry_table<'a>(records: impl Iterator<Item = &'a AnimalRecord>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<20} {:<12} {}\n",
        "ID", "AGE", "TEATS", "YIELD"
    ));
    for record in records {
        out.push_str(&format!(
            "{:<10} {:<20} {:<12} {}\n",
            record.id(),
            format_age(record),
            format_teats(record),
            format_yield(compute_yield(record)),
        ));
    }
    out
}

/// Multi-line text rendering of a view: message, details, available action.
pub fn render_view(view: &ViewState) -> String {
    let mut out = view.message.clone();
    if let Some(d) = &view.details {
        out.push_str(&format!(
            "\n  ID:    {}\n  Age:   {}\n  Teats: {}\n  Milk:  {}",
            d.id, d.age, d.teats, d.milk
        ));
    }
    match view.action {
        Some(Action::YieldMilk) => out.push_str("\n  [milk] Yield milk"),
        Some(Action::KickBack) => out.push_str("\n  [kick] Kick back to the mountain"),
        None => {}
    }
    out
}
