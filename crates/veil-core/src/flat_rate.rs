//! # Flat-Rate Package Pricing
//!
//! One hairstylist (Agne) bills through a bundled package instead of the
//! per-unit model: a base price covering a preset allowance, with add-on
//! rates for everything beyond it.
//!
//! ## Package Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Agne's €1400 Flat Rate                                  │
//! │                                                                         │
//! │  Included (first event day):        Add-ons:                           │
//! │  • 1 trial                          • extra trial      €175 each       │
//! │  • bridal + up to 3 guests          • extra day        €250 (bride)    │
//! │  • 8 hours (touch-ups included)     • extra guest      €100 each       │
//! │                                     • extra hour       €50 each        │
//! │                                                                         │
//! │  Extra event days carry the €250 bride rate; every guest and every     │
//! │  touch-up hour on an extra day is an add-on (no allowance).            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Travel fees, scheduled returns, and exclusivity are never billed on this
//! path; the package's inputs are trial count, day index, guest count, and
//! touch-up hours only.
//!
//! The output is an ordinary [`CalculationResult`], so payments and the
//! grand summary treat flat-rate and per-unit services identically.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::flatten_lines;
use crate::money::Money;
use crate::types::{CalculationLine, CalculationResult, DayBreakdown, DayDetails, ServiceInput};

// =============================================================================
// Package Definition
// =============================================================================

/// A bundled fixed-price package with per-unit add-on rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FlatRatePackage {
    /// Base price covering the inclusions below, on the first event day.
    pub base: Money,

    /// Trials covered by the base price.
    pub included_trials: u32,
    /// Guests covered on the first day (the bride is always covered).
    pub included_guests: u32,
    /// Hours covered on the first day, touch-ups and second look included.
    pub included_hours: u32,

    /// Per trial beyond the allowance.
    pub extra_trial_unit: Money,
    /// Per extra event day, bride only.
    pub extra_day_bride_unit: Money,
    /// Per guest beyond the allowance (and per guest on extra days).
    pub extra_guest_unit: Money,
    /// Per hour beyond the allowance (and per hour on extra days).
    pub extra_hour_unit: Money,
}

impl FlatRatePackage {
    /// Agne's package. The one flat-rate scheme in the roster.
    pub const fn agne() -> Self {
        FlatRatePackage {
            base: Money::from_euros(1400),
            included_trials: 1,
            included_guests: 3,
            included_hours: 8,
            extra_trial_unit: Money::from_euros(175),
            extra_day_bride_unit: Money::from_euros(250),
            extra_guest_unit: Money::from_euros(100),
            extra_hour_unit: Money::from_euros(50),
        }
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Prices a service through a flat-rate package.
///
/// Same output shape as the generic calculator: global lines for the trial
/// allowance overflow, per-day breakdowns with the base package on day one,
/// and the flattened display list with date metas.
pub fn calculate_flat_rate_service(
    input: &ServiceInput<'_>,
    package: &FlatRatePackage,
    wedding_dates: &[NaiveDate],
) -> CalculationResult {
    // Trials are pre-wedding, so the overflow beyond the included allowance
    // is a global line.
    let mut global_lines = Vec::new();
    let extra_trials = input.trials.saturating_sub(package.included_trials);
    if extra_trials > 0 {
        global_lines.push(CalculationLine::per_unit(
            "Extra trials",
            extra_trials as i64,
            package.extra_trial_unit,
        ));
    }

    let default_day = DayDetails::default();
    let day_breakdowns: Vec<DayBreakdown> = wedding_dates
        .iter()
        .enumerate()
        .map(|(idx, &date)| {
            let day = input.per_day.get(idx).unwrap_or(&default_day);
            let lines = if idx == 0 {
                first_day_lines(day, package)
            } else {
                extra_day_lines(day, package)
            };
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

/// Day one carries the base package plus anything beyond its allowance.
fn first_day_lines(day: &DayDetails, package: &FlatRatePackage) -> Vec<CalculationLine> {
    let mut lines = vec![CalculationLine::flat("Flat rate package", package.base).with_meta(
        format!(
            "incl. {} trial, bridal + up to {} guests, {}h",
            package.included_trials, package.included_guests, package.included_hours
        ),
    )];

    let extra_guests = day.guests.saturating_sub(package.included_guests);
    if extra_guests > 0 {
        lines.push(CalculationLine::per_unit(
            "Extra guests",
            extra_guests as i64,
            package.extra_guest_unit,
        ));
    }

    let extra_hours = day.touchup_hours.saturating_sub(package.included_hours);
    if extra_hours > 0 {
        lines.push(
            CalculationLine::per_unit("Extra hours", extra_hours as i64, package.extra_hour_unit)
                .with_meta(format!("beyond {}h included", package.included_hours)),
        );
    }

    lines
}

/// Extra days have no allowance: the bride rate plus every guest and every
/// hour as add-ons.
fn extra_day_lines(day: &DayDetails, package: &FlatRatePackage) -> Vec<CalculationLine> {
    let mut lines = vec![CalculationLine::per_unit(
        "Extra day (bride)",
        1,
        package.extra_day_bride_unit,
    )];

    if day.guests > 0 {
        lines.push(CalculationLine::per_unit(
            "Guests",
            day.guests as i64,
            package.extra_guest_unit,
        ));
    }

    if day.touchup_hours > 0 {
        lines.push(
            CalculationLine::per_unit(
                "Touch-ups",
                day.touchup_hours as i64,
                package.extra_hour_unit,
            )
            .with_meta(format!("{}h", day.touchup_hours)),
        );
    }

    lines
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HairArtist, HairForm, ServiceType};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn agne_form(trials: u32, days: Vec<DayDetails>) -> HairForm {
        HairForm {
            artist: HairArtist::Agne,
            trials,
            per_day: days,
            ..HairForm::default()
        }
    }

    #[test]
    fn base_package_covers_a_day_within_allowance() {
        // 1 trial, 3 guests, 8 hours: everything inside the bundle.
        let form = agne_form(
            1,
            vec![DayDetails {
                guests: 3,
                touchup_hours: 8,
                ..DayDetails::default()
            }],
        );
        let result = calculate_flat_rate_service(
            &form.as_input(),
            &FlatRatePackage::agne(),
            &[date("2026-08-14")],
        );

        assert_eq!(result.subtotal, Money::from_euros(1400));
        assert_eq!(result.day_breakdowns[0].lines.len(), 1);
        assert_eq!(result.day_breakdowns[0].lines[0].label, "Flat rate package");
        assert_eq!(result.service_type, ServiceType::Hair);
        assert_eq!(result.artist_name, "Agne");
    }

    #[test]
    fn overflow_bills_at_addon_rates() {
        // 3 trials (2 extra), 5 guests (2 extra), 10 hours (2 extra)
        let form = agne_form(
            3,
            vec![DayDetails {
                guests: 5,
                touchup_hours: 10,
                ..DayDetails::default()
            }],
        );
        let result = calculate_flat_rate_service(
            &form.as_input(),
            &FlatRatePackage::agne(),
            &[date("2026-08-14")],
        );

        // 1400 + 2×175 + 2×100 + 2×50
        assert_eq!(result.subtotal, Money::from_euros(1400 + 350 + 200 + 100));

        let trials = result.lines.iter().find(|l| l.label == "Extra trials").unwrap();
        assert_eq!(trials.qty, Some(2));
        assert_eq!(trials.total, Money::from_euros(350));

        let guests = result.lines.iter().find(|l| l.label == "Extra guests").unwrap();
        assert_eq!(guests.total, Money::from_euros(200));

        let hours = result.lines.iter().find(|l| l.label == "Extra hours").unwrap();
        assert_eq!(hours.unit, Some(Money::from_euros(50)));
    }

    #[test]
    fn extra_days_have_no_allowance() {
        let form = agne_form(
            1,
            vec![
                DayDetails::default(),
                DayDetails {
                    guests: 2,
                    touchup_hours: 3,
                    ..DayDetails::default()
                },
            ],
        );
        let result = calculate_flat_rate_service(
            &form.as_input(),
            &FlatRatePackage::agne(),
            &[date("2026-08-14"), date("2026-08-15")],
        );

        // Day 1: base only. Day 2: 250 bride + 2×100 guests + 3×50 hours.
        assert_eq!(result.day_breakdowns[0].subtotal, Money::from_euros(1400));
        assert_eq!(result.day_breakdowns[1].subtotal, Money::from_euros(250 + 200 + 150));
        assert_eq!(result.subtotal, Money::from_euros(2000));

        let bride = result.day_breakdowns[1]
            .lines
            .iter()
            .find(|l| l.label == "Extra day (bride)")
            .unwrap();
        assert_eq!(bride.total, Money::from_euros(250));
    }

    #[test]
    fn travel_and_returns_never_bill_on_the_flat_rate_path() {
        let form = agne_form(
            1,
            vec![DayDetails {
                travel_fee: Money::from_euros(100),
                num_people: 3,
                num_cars: 1,
                scheduled_return: true,
                scheduled_return_bride: true,
                exclusivity: true,
                ..DayDetails::default()
            }],
        );
        let result = calculate_flat_rate_service(
            &form.as_input(),
            &FlatRatePackage::agne(),
            &[date("2026-08-14")],
        );

        assert_eq!(result.subtotal, Money::from_euros(1400));
        assert!(!result
            .lines
            .iter()
            .any(|l| l.label.contains("Travelling") || l.label.contains("scheduled return")));
    }

    #[test]
    fn flattened_lines_carry_date_metas() {
        let form = agne_form(2, vec![DayDetails::default()]);
        let result = calculate_flat_rate_service(
            &form.as_input(),
            &FlatRatePackage::agne(),
            &[date("2026-08-14")],
        );

        // Global extra-trials line has no date prefix.
        let trials = result.lines.iter().find(|l| l.label == "Extra trials").unwrap();
        assert_eq!(trials.meta, None);

        // The day-one package line joins its inclusions note with the date.
        let package = result.lines.iter().find(|l| l.label == "Flat rate package").unwrap();
        assert_eq!(
            package.meta.as_deref(),
            Some("14/08/2026 • incl. 1 trial, bridal + up to 3 guests, 8h")
        );
    }

    #[test]
    fn fewer_trials_than_included_bill_nothing_extra() {
        let form = agne_form(0, vec![DayDetails::default()]);
        let result = calculate_flat_rate_service(
            &form.as_input(),
            &FlatRatePackage::agne(),
            &[date("2026-08-14")],
        );
        assert!(!result.lines.iter().any(|l| l.label == "Extra trials"));
        assert_eq!(result.subtotal, Money::from_euros(1400));
    }
}
