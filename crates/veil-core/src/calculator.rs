//! # Quote Calculator
//!
//! The deterministic, single-pass pricing calculator: a pure function from
//! (service selection, per-service forms, rate cards, event dates) to
//! per-artist calculation results and a grand summary.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      calculate_quote                                    │
//! │                                                                         │
//! │  ServiceChoice ──┬── makeup? ──► calculate_service(makeup card)        │
//! │                  └── hair?   ──► calculate_service(hair card)          │
//! │                                        │                                │
//! │   one generic rule set, two calls      │                                │
//! │                                        ▼                                │
//! │  per service:  global lines (trials, trial travel)                     │
//! │                + per-day lines (guests, bridal, scheduled return,      │
//! │                  travel split, exclusivity, touch-ups)                 │
//! │                = subtotal, day breakdowns, flattened display lines     │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                 GrandSummary (totals across services)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totality
//!
//! The calculator never fails. Numeric fields arrive sanitized (non-negative)
//! from the form layer, and disallowed combinations — a scheduled return on a
//! day with a positive travel fee — are treated as if the gated feature were
//! off. The forms block those combinations at submission; re-enforcing them
//! here keeps the output well-formed regardless of the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{
    CalculationLine, CalculationResult, DayBreakdown, DayDetails, GrandSummary, HairForm,
    MakeupForm, PriceBook, ServiceChoice, ServiceInput, ServicePricing,
};
use crate::ASSISTANT_TRAVEL_RATE_BPS;

// =============================================================================
// Input / Output
// =============================================================================

/// Everything one calculation runs on. A fresh snapshot per invocation;
/// the calculator holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct CalculationInput<'a> {
    pub service_choice: ServiceChoice,

    /// Absence of a selected service's form silently skips that service.
    pub makeup_form: Option<&'a MakeupForm>,
    pub hair_form: Option<&'a HairForm>,

    /// Resolved rate cards (default vs. artist-specific vs. custom is the
    /// caller's concern, see [`crate::pricing`]).
    pub prices: &'a PriceBook,

    /// Ordered event dates. Duplicate filtering is a caller-side concern.
    pub wedding_dates: &'a [NaiveDate],
}

/// What a calculation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutcome {
    pub calculations: Vec<CalculationResult>,
    pub grand_summary: GrandSummary,
}

/// Cross-service total for one event date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PerDayTotal {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub total: Money,
}

// =============================================================================
// Entry Point
// =============================================================================

/// Computes the full quote for the selected services.
///
/// Make-up is computed first, then hair, each against its own rate card but
/// through the same rule set. A selected service whose form is missing is
/// skipped without error.
pub fn calculate_quote(input: &CalculationInput<'_>) -> QuoteOutcome {
    let mut calculations = Vec::new();

    if input.service_choice.makeup {
        if let Some(form) = input.makeup_form {
            calculations.push(calculate_service(
                &form.as_input(),
                &input.prices.makeup,
                input.wedding_dates,
            ));
        }
    }

    if input.service_choice.hair {
        if let Some(form) = input.hair_form {
            calculations.push(calculate_service(
                &form.as_input(),
                &input.prices.hair,
                input.wedding_dates,
            ));
        }
    }

    let grand_summary = grand_summary(&calculations);
    QuoteOutcome {
        calculations,
        grand_summary,
    }
}

// =============================================================================
// Per-Service Calculation
// =============================================================================

/// Prices one service against its rate card.
///
/// The same function serves make-up and hair; [`ServiceInput`] carries the
/// only differences (artist, service tag, per-day inputs).
pub fn calculate_service(
    input: &ServiceInput<'_>,
    pricing: &ServicePricing,
    wedding_dates: &[NaiveDate],
) -> CalculationResult {
    let global_lines = global_lines(input, pricing);

    let default_day = DayDetails::default();
    let day_breakdowns: Vec<DayBreakdown> = wedding_dates
        .iter()
        .enumerate()
        .map(|(idx, &date)| {
            // Missing per-day entries read as the quiet-day defaults.
            let day = input.per_day.get(idx).unwrap_or(&default_day);
            let lines = day_lines(day, pricing, input.service_type.bridal_label());
            let subtotal = lines.iter().map(|l| l.total).sum();
            let venue = (!day.beauty_venue.is_empty()).then(|| day.beauty_venue.clone());
            DayBreakdown {
                date,
                lines,
                subtotal,
                venue,
            }
        })
        .collect();

    let per_day_total: Money = day_breakdowns.iter().map(|d| d.subtotal).sum();
    let global_total: Money = global_lines.iter().map(|l| l.total).sum();
    let subtotal = per_day_total + global_total;

    let lines = flatten_lines(&global_lines, &day_breakdowns);

    CalculationResult {
        artist_name: input.artist_name.to_string(),
        service_type: input.service_type,
        lines,
        subtotal,
        payments: Vec::new(),
        total_paid: Money::zero(),
        due: subtotal,
        wedding_dates: wedding_dates.to_vec(),
        venue_notes: input.trial_venue.to_string(),
        day_breakdowns,
    }
}

/// Pre-wedding lines, independent of any event date: trials and the trial
/// travel fee.
fn global_lines(input: &ServiceInput<'_>, pricing: &ServicePricing) -> Vec<CalculationLine> {
    let mut lines = Vec::new();

    if input.trials > 0 {
        lines.push(CalculationLine::per_unit(
            "Trials",
            input.trials as i64,
            pricing.trial_unit,
        ));
    }

    if input.trial_travel_enabled && input.trial_travel_fee.is_positive() {
        let mut line = CalculationLine::flat("Trial travel fee", input.trial_travel_fee);
        if !input.trial_venue.is_empty() {
            line = line.with_meta(input.trial_venue);
        }
        lines.push(line);
    }

    lines
}

/// Prices one event day.
fn day_lines(day: &DayDetails, pricing: &ServicePricing, bridal_label: &str) -> Vec<CalculationLine> {
    let mut lines = Vec::new();

    // Guests
    if day.guests > 0 {
        lines.push(CalculationLine::per_unit(
            "Guests",
            day.guests as i64,
            pricing.guest_unit,
        ));
    }

    // The bridal service is charged every day, regardless of all other
    // toggles. Exactly one line per day.
    lines.push(CalculationLine::per_unit(bridal_label, 1, pricing.bridal_unit));

    // Scheduled return: any positive travel fee voids it for the day, and a
    // guest return without the bride's produces no charge.
    let scheduled_return_allowed = day.travel_fee.is_zero() && day.scheduled_return;
    let bride_sr = scheduled_return_allowed && day.scheduled_return_bride;
    let guests_sr = bride_sr && day.scheduled_return_guests > 0;
    if bride_sr {
        lines.push(CalculationLine::per_unit(
            "scheduled return (bride)",
            1,
            pricing.scheduled_return_bride,
        ));
    }
    if guests_sr {
        lines.push(CalculationLine::per_unit(
            "scheduled return (guests)",
            day.scheduled_return_guests as i64,
            pricing.scheduled_return_guest_unit,
        ));
    }

    // Travel fee, split by cars vs. assistants. One full fee per car making
    // the trip (capped at the headcount); everyone traveling without a car
    // of their own is an assistant billed the 35% share.
    if day.travel_fee.is_positive() {
        let people = i64::from(day.num_people.max(1));
        let cars = i64::from(day.num_cars);
        let car_count = cars.min(people);
        let assistants = (people - cars).max(0);

        let cars_total = day.travel_fee.multiply_quantity(car_count);
        if cars_total.is_positive() {
            lines.push(CalculationLine {
                label: "Travelling fee (cars)".to_string(),
                qty: Some(car_count),
                unit: Some(day.travel_fee),
                total: cars_total,
                meta: None,
            });
        }

        if assistants > 0 {
            let assistant_unit = day.travel_fee.apply_bps(ASSISTANT_TRAVEL_RATE_BPS);
            let assistant_total = day
                .travel_fee
                .multiply_quantity(assistants)
                .apply_bps(ASSISTANT_TRAVEL_RATE_BPS);
            lines.push(CalculationLine {
                label: "Assistant travel fee".to_string(),
                qty: Some(assistants),
                unit: Some(assistant_unit),
                total: assistant_total,
                meta: Some("35% × (people − cars)".to_string()),
            });
        }
    }

    // Exclusivity: flat, not scaled by quantity.
    if day.exclusivity {
        lines.push(CalculationLine::flat("Exclusivity fee", pricing.exclusivity_fee));
    }

    // Touch-ups
    if day.touchup_hours > 0 {
        lines.push(
            CalculationLine::per_unit(
                "Touch-ups",
                day.touchup_hours as i64,
                pricing.touchup_hourly,
            )
            .with_meta(format!("{}h", day.touchup_hours)),
        );
    }

    lines
}

/// Flattens global + per-day lines into the display list: globals first,
/// then each day's lines in date order with the day's date folded into the
/// line meta (`"14/08/2026 • 2h"` when the line already carried a note).
pub(crate) fn flatten_lines(
    global_lines: &[CalculationLine],
    day_breakdowns: &[DayBreakdown],
) -> Vec<CalculationLine> {
    let mut lines: Vec<CalculationLine> = global_lines.to_vec();

    for day in day_breakdowns {
        let date = format_date(day.date);
        for line in &day.lines {
            let mut line = line.clone();
            line.meta = Some(match line.meta.take() {
                Some(meta) => format!("{date} • {meta}"),
                None => date.clone(),
            });
            lines.push(line);
        }
    }

    lines
}

/// Dates print en-GB style on quotes: `14/08/2026`.
fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// =============================================================================
// Summaries
// =============================================================================

/// Sums across all calculations in the current quote.
///
/// `total_due` is floored at zero: an overpaying client owes nothing, never
/// a negative amount.
pub fn grand_summary(calculations: &[CalculationResult]) -> GrandSummary {
    let grand_total: Money = calculations.iter().map(|c| c.subtotal).sum();
    let total_paid: Money = calculations.iter().map(|c| c.total_paid).sum();
    GrandSummary {
        grand_total,
        total_paid,
        total_due: (grand_total - total_paid).max(Money::zero()),
    }
}

/// Cross-service totals per event date, in date order.
///
/// Global lines (trials, trial travel) are not tied to a date and are
/// deliberately absent here.
pub fn per_day_totals(calculations: &[CalculationResult]) -> Vec<PerDayTotal> {
    let mut totals: std::collections::BTreeMap<NaiveDate, Money> = Default::default();
    for calc in calculations {
        for day in &calc.day_breakdowns {
            *totals.entry(day.date).or_default() += day.subtotal;
        }
    }
    totals
        .into_iter()
        .map(|(date, total)| PerDayTotal { date, total })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
