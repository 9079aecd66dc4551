//! # Validation Module
//!
//! Business-rule validation for quote forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Numeric coercion (negative inputs clamp to 0, people/cars to 1)   │
//! │  └── Submission-blocking rule messages under the offending input       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── The same rules as typed checks, for any non-form caller           │
//! │  └── Date list and payment well-formedness                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator                                                   │
//! │  └── Treats a disallowed combination as if the gated feature were off  │
//! │                                                                         │
//! │  Defense in depth: a violation that slips past one layer never          │
//! │  produces a malformed quote                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use veil_core::validation::{validate_day_rules, validate_event_dates};
//! use veil_core::DayDetails;
//!
//! validate_event_dates(&["2026-08-14".parse().unwrap()]).unwrap();
//! validate_day_rules(&DayDetails::default(), 1).unwrap();
//! ```

use chrono::NaiveDate;

use crate::error::{QuoteFormError, ValidationError};
use crate::types::{DayDetails, Payment};
use crate::MAX_EVENT_DAYS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Event Dates
// =============================================================================

/// Validates the ordered event-date list.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_EVENT_DAYS`] days
/// - No duplicate dates
///
/// The calculator itself does not enforce duplicates; this is the caller's
/// check before invoking it.
pub fn validate_event_dates(dates: &[NaiveDate]) -> ValidationResult<()> {
    if dates.is_empty() {
        return Err(ValidationError::Required {
            field: "weddingDates".to_string(),
        });
    }

    if dates.len() > MAX_EVENT_DAYS {
        return Err(ValidationError::OutOfRange {
            field: "weddingDates".to_string(),
            min: 1,
            max: MAX_EVENT_DAYS as i64,
        });
    }

    for (idx, date) in dates.iter().enumerate() {
        if dates[..idx].contains(date) {
            return Err(ValidationError::Duplicate {
                field: "weddingDates".to_string(),
                value: date.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Day Details
// =============================================================================

/// Validates a day's headcounts.
///
/// ## Rules
/// - At least 1 person (the main artist travels)
/// - At least 1 car
pub fn validate_day_counts(day: &DayDetails) -> ValidationResult<()> {
    if day.num_people < 1 {
        return Err(ValidationError::MustBePositive {
            field: "numPeople".to_string(),
        });
    }

    if day.num_cars < 1 {
        return Err(ValidationError::MustBePositive {
            field: "numCars".to_string(),
        });
    }

    Ok(())
}

/// Checks a day against the submission-blocking business rules.
///
/// `day_number` is 1-based, for the message only.
///
/// ## Rules
/// - A scheduled return requires a zero travel fee
/// - A guest scheduled return requires the bride's scheduled return
/// - Touch-ups with assistants require a second car (the assistants have to
///   get back)
///
/// The calculator independently voids the gated features; callers use this
/// to block submission with a message instead of silently dropping charges.
pub fn validate_day_rules(day: &DayDetails, day_number: usize) -> Result<(), QuoteFormError> {
    if day.scheduled_return && day.travel_fee.is_positive() {
        return Err(QuoteFormError::ScheduledReturnWithTravelFee { day: day_number });
    }

    if day.scheduled_return_guests > 0 && !day.scheduled_return_bride {
        return Err(QuoteFormError::GuestReturnWithoutBride { day: day_number });
    }

    if day.num_people > 1 && day.num_cars == 1 && day.touchup_hours > 0 {
        return Err(QuoteFormError::AssistantsNeedSecondCar { day: day_number });
    }

    Ok(())
}

/// Runs every per-day check across a service's day list.
///
/// Returns all violations rather than the first, so a form can flag every
/// offending day at once.
pub fn validate_service_days(per_day: &[DayDetails]) -> Vec<QuoteFormError> {
    per_day
        .iter()
        .enumerate()
        .filter_map(|(idx, day)| validate_day_rules(day, idx + 1).err())
        .collect()
}

// =============================================================================
// Payments
// =============================================================================

/// Validates a submitted payment.
///
/// ## Rules
/// - Id must be a UUID
/// - Amount must be positive (blank editing rows are filtered out before
///   submission)
pub fn validate_payment(payment: &Payment) -> ValidationResult<()> {
    if payment.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "payment id".to_string(),
        });
    }

    uuid::Uuid::parse_str(&payment.id).map_err(|_| ValidationError::InvalidFormat {
        field: "payment id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    if !payment.amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_event_dates() {
        assert!(validate_event_dates(&[date("2026-08-14")]).is_ok());
        assert!(validate_event_dates(&[date("2026-08-14"), date("2026-08-15")]).is_ok());

        assert!(matches!(
            validate_event_dates(&[]),
            Err(ValidationError::Required { .. })
        ));

        let too_many: Vec<NaiveDate> = (14..19).map(|d| date(&format!("2026-08-{d}"))).collect();
        assert!(matches!(
            validate_event_dates(&too_many),
            Err(ValidationError::OutOfRange { .. })
        ));

        assert!(matches!(
            validate_event_dates(&[date("2026-08-14"), date("2026-08-14")]),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_validate_day_counts() {
        assert!(validate_day_counts(&DayDetails::default()).is_ok());

        let no_people = DayDetails {
            num_people: 0,
            ..DayDetails::default()
        };
        assert!(validate_day_counts(&no_people).is_err());

        let no_cars = DayDetails {
            num_cars: 0,
            ..DayDetails::default()
        };
        assert!(validate_day_counts(&no_cars).is_err());
    }

    #[test]
    fn test_scheduled_return_blocks_on_travel_fee() {
        let day = DayDetails {
            scheduled_return: true,
            travel_fee: Money::from_euros(50),
            ..DayDetails::default()
        };
        assert_eq!(
            validate_day_rules(&day, 1),
            Err(QuoteFormError::ScheduledReturnWithTravelFee { day: 1 })
        );

        // Fee back to zero: the return is fine.
        let day = DayDetails {
            scheduled_return: true,
            ..DayDetails::default()
        };
        assert!(validate_day_rules(&day, 1).is_ok());
    }

    #[test]
    fn test_guest_return_requires_bride() {
        let day = DayDetails {
            scheduled_return: true,
            scheduled_return_guests: 2,
            scheduled_return_bride: false,
            ..DayDetails::default()
        };
        assert_eq!(
            validate_day_rules(&day, 2),
            Err(QuoteFormError::GuestReturnWithoutBride { day: 2 })
        );
    }

    #[test]
    fn test_touchups_need_a_second_car_for_assistants() {
        let day = DayDetails {
            num_people: 3,
            num_cars: 1,
            touchup_hours: 2,
            ..DayDetails::default()
        };
        assert_eq!(
            validate_day_rules(&day, 1),
            Err(QuoteFormError::AssistantsNeedSecondCar { day: 1 })
        );

        // A second car clears it; so does traveling alone.
        let two_cars = DayDetails {
            num_cars: 2,
            ..day.clone()
        };
        assert!(validate_day_rules(&two_cars, 1).is_ok());

        let alone = DayDetails {
            num_people: 1,
            ..day
        };
        assert!(validate_day_rules(&alone, 1).is_ok());
    }

    #[test]
    fn test_validate_service_days_reports_every_violation() {
        let days = vec![
            DayDetails {
                scheduled_return: true,
                travel_fee: Money::from_euros(10),
                ..DayDetails::default()
            },
            DayDetails::default(),
            DayDetails {
                scheduled_return_guests: 1,
                ..DayDetails::default()
            },
        ];
        let violations = validate_service_days(&days);
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0],
            QuoteFormError::ScheduledReturnWithTravelFee { day: 1 }
        );
        assert_eq!(violations[1], QuoteFormError::GuestReturnWithoutBride { day: 3 });
    }

    #[test]
    fn test_validate_payment() {
        let good = Payment {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            date: date("2026-08-01"),
            occasion: "deposit".to_string(),
            amount: Money::from_euros(100),
        };
        assert!(validate_payment(&good).is_ok());

        let bad_id = Payment {
            id: "not-a-uuid".to_string(),
            ..good.clone()
        };
        assert!(matches!(
            validate_payment(&bad_id),
            Err(ValidationError::InvalidFormat { .. })
        ));

        let zero_amount = Payment {
            amount: Money::zero(),
            ..good
        };
        assert!(matches!(
            validate_payment(&zero_amount),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}
