//! # Error Types
//!
//! Domain-specific error types for veil-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  veil-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── QuoteFormError   - Submission-blocking business rules             │
//! │                                                                         │
//! │  The calculator itself NEVER returns an error: it is total over its    │
//! │  sanitized input domain. Errors here cover form validation and         │
//! │  payment-editing operations only.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (payment id, day index, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No calculation result exists for the given service.
    ///
    /// ## When This Occurs
    /// - Recording a payment against a service that was never calculated
    /// - The form was edited to deselect the service and then recalculated
    #[error("No calculation found for {service}")]
    CalculationNotFound { service: String },

    /// Payment cannot be found on the calculation it was addressed to.
    ///
    /// ## When This Occurs
    /// - Payment was removed in another edit before this one landed
    /// - A stale payment id survived a session reset
    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    /// Payment amount is invalid.
    #[error("Invalid payment amount: {reason}")]
    InvalidPaymentAmount { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Form rule violation (wraps QuoteFormError).
    #[error("Form rule violation: {0}")]
    FormRule(#[from] QuoteFormError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same event date entered twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Quote Form Rules
// =============================================================================

/// Submission-blocking business rules for a day's details.
///
/// The forms block submission on these; the calculator independently treats
/// the gated feature as off (defense-in-depth, not an error path there).
/// Messages mirror what the forms show under the offending input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteFormError {
    /// Scheduled return requires a zero travel fee.
    #[error(
        "Scheduled return is not allowed when a travel fee is applied on day {day}. \
         Set the travel fee to 0 or turn off the scheduled return."
    )]
    ScheduledReturnWithTravelFee { day: usize },

    /// A guest scheduled return without the bride produces no charge.
    #[error("Guest scheduled return on day {day} requires the bride's scheduled return")]
    GuestReturnWithoutBride { day: usize },

    /// Assistants can't get back from the venue without a second car.
    #[error(
        "With assistants and only 1 car on day {day}, add another car so assistants \
         can return. The travelling fee is charged per car."
    )]
    AssistantsNeedSecondCar { day: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PaymentNotFound("a1b2".to_string());
        assert_eq!(err.to_string(), "Payment not found: a1b2");

        let err = CoreError::CalculationNotFound {
            service: "Hairstyling".to_string(),
        };
        assert_eq!(err.to_string(), "No calculation found for Hairstyling");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "weddingDates".to_string(),
        };
        assert_eq!(err.to_string(), "weddingDates is required");

        let err = ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: 0,
            max: 200,
        };
        assert_eq!(err.to_string(), "guests must be between 0 and 200");
    }

    #[test]
    fn test_form_rule_messages_name_the_day() {
        let err = QuoteFormError::GuestReturnWithoutBride { day: 2 };
        assert!(err.to_string().contains("day 2"));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "artist".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));

        let rule_err = QuoteFormError::ScheduledReturnWithTravelFee { day: 1 };
        let core_err: CoreError = rule_err.into();
        assert!(matches!(core_err, CoreError::FormRule(_)));
    }
}
