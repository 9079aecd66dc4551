//! # Payment Operations
//!
//! Pure payment math over calculation results. Payments are layered onto a
//! result after calculation — the calculator itself always returns
//! `payments = [], total_paid = 0, due = subtotal`.
//!
//! ## Payment Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payments on a Result                                 │
//! │                                                                         │
//! │  record_payment ──► payments.push ──┐                                  │
//! │  update_payment ──► replace by id ──┼──► total_paid = Σ amounts        │
//! │  remove_payment ──► drop by id    ──┘    due = max(0, subtotal − paid) │
//! │                                                                         │
//! │  Form edit ──► recalculation ──► preserve_payments                     │
//! │    fresh results match previous on (artist, service) and inherit       │
//! │    their payment lists; totals re-derive against the NEW subtotal      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{CalculationResult, Payment};

// =============================================================================
// Payment Construction
// =============================================================================

/// A blank payment row, dated but with no occasion or amount yet.
///
/// Mirrors how payments are entered: a row is added first, then filled in
/// through [`update_payment`].
pub fn new_payment(date: NaiveDate) -> Payment {
    Payment {
        id: Uuid::new_v4().to_string(),
        date,
        occasion: String::new(),
        amount: crate::Money::zero(),
    }
}

// =============================================================================
// Record / Update / Remove
// =============================================================================

/// Records a payment against a result and re-derives its totals.
///
/// A zero amount is allowed (blank rows get their amount afterwards); a
/// negative amount is not.
pub fn record_payment(result: &mut CalculationResult, payment: Payment) -> CoreResult<()> {
    if payment.amount.is_negative() {
        return Err(CoreError::InvalidPaymentAmount {
            reason: format!("{} is negative", payment.amount),
        });
    }

    result.payments.push(payment);
    result.recompute_payment_totals();
    Ok(())
}

/// Replaces the payment with the same id and re-derives the totals.
pub fn update_payment(result: &mut CalculationResult, payment: Payment) -> CoreResult<()> {
    if payment.amount.is_negative() {
        return Err(CoreError::InvalidPaymentAmount {
            reason: format!("{} is negative", payment.amount),
        });
    }

    let existing = result
        .payments
        .iter_mut()
        .find(|p| p.id == payment.id)
        .ok_or_else(|| CoreError::PaymentNotFound(payment.id.clone()))?;
    *existing = payment;
    result.recompute_payment_totals();
    Ok(())
}

/// Removes a payment by id, returning it, and re-derives the totals.
pub fn remove_payment(result: &mut CalculationResult, payment_id: &str) -> CoreResult<Payment> {
    let idx = result
        .payments
        .iter()
        .position(|p| p.id == payment_id)
        .ok_or_else(|| CoreError::PaymentNotFound(payment_id.to_string()))?;
    let removed = result.payments.remove(idx);
    result.recompute_payment_totals();
    Ok(removed)
}

// =============================================================================
// Preservation Across Recomputation
// =============================================================================

/// Carries payments forward onto freshly calculated results.
///
/// Results are matched index-aligned on `(artist_name, service_type)` — the
/// identity a payment was recorded against. On a match the previous payment
/// list carries over and totals re-derive against the new subtotal; a result
/// whose artist or service changed starts clean.
pub fn preserve_payments(new_results: &mut [CalculationResult], previous: &[CalculationResult]) {
    for (idx, result) in new_results.iter_mut().enumerate() {
        let Some(prior) = previous.get(idx) else {
            continue;
        };
        if prior.artist_name == result.artist_name && prior.service_type == result.service_type {
            result.payments = prior.payments.clone();
            result.recompute_payment_totals();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
