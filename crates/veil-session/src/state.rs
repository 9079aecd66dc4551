//! # Quote Session State
//!
//! Manages the state of one quote-building session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. A host shell may access the session from multiple handlers
//! 2. Only one handler should modify the session at a time
//! 3. Recomputation must see a consistent form snapshot
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Session State Operations                              │
//! │                                                                         │
//! │  Shell Action             Session Method          State Change          │
//! │  ────────────             ──────────────          ────────────          │
//! │                                                                         │
//! │  Edit service form ─────► set_makeup_form() ────► forms replaced        │
//! │                                                                         │
//! │  Change dates ──────────► set_multi_day() ──────► per-day lists resized │
//! │                                                                         │
//! │  Confirm pricing ───────► recalculate() ────────► calculations rebuilt, │
//! │                                                   payments preserved    │
//! │                                                                         │
//! │  Record payment ────────► record_payment() ─────► totals re-derived     │
//! │                                                                         │
//! │  Clear all ─────────────► reset() ──────────────► back to defaults      │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use veil_core::calculator::{self, PerDayTotal};
use veil_core::payments;
use veil_core::pricing::{hair_scheme, makeup_scheme, resolve_price_book};
use veil_core::{
    CalculationResult, CoreError, CoreResult, GrandSummary, HairForm, MakeupForm, MultiDay,
    Payment, PriceBook, PriceMode, ServiceChoice, ServiceType,
};

// =============================================================================
// Quote Session
// =============================================================================

/// The state of one quote-building session.
///
/// Calculations are always a projection of the current form snapshot: every
/// input edit leaves them stale until [`QuoteSession::recalculate`] rebuilds
/// them from scratch. The one thing that survives a rebuild is the payment
/// list, re-matched on `(artist, service)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSession {
    pub service_choice: ServiceChoice,
    pub multi_day: MultiDay,
    pub makeup_form: Option<MakeupForm>,
    pub hair_form: Option<HairForm>,

    pub price_mode: PriceMode,
    pub default_prices: PriceBook,
    pub custom_prices: Option<PriceBook>,

    pub calculations: Vec<CalculationResult>,
    pub grand_summary: GrandSummary,

    /// When the session last changed.
    pub last_updated: DateTime<Utc>,
}

impl QuoteSession {
    /// Creates a fresh session: nothing selected, default pricing.
    pub fn new() -> Self {
        QuoteSession {
            service_choice: ServiceChoice::default(),
            multi_day: MultiDay::default(),
            makeup_form: None,
            hair_form: None,
            price_mode: PriceMode::Default,
            default_prices: PriceBook::default(),
            custom_prices: None,
            calculations: Vec::new(),
            grand_summary: GrandSummary::default(),
            last_updated: Utc::now(),
        }
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    // -------------------------------------------------------------------------
    // Form Snapshot
    // -------------------------------------------------------------------------

    /// Selects which services the quote covers.
    pub fn set_service_choice(&mut self, choice: ServiceChoice) {
        debug!(makeup = choice.makeup, hair = choice.hair, "service choice updated");
        self.service_choice = choice;
        self.touch();
    }

    /// Replaces the event-date block and resizes both forms' per-day lists
    /// to the new day count (existing day entries are kept, new days start
    /// at the quiet-day defaults).
    pub fn set_multi_day(&mut self, multi_day: MultiDay) {
        let day_count = multi_day.effective_dates().len();
        debug!(day_count, "event dates updated");
        self.multi_day = multi_day;

        if let Some(form) = &mut self.makeup_form {
            form.per_day.resize_with(day_count, Default::default);
        }
        if let Some(form) = &mut self.hair_form {
            form.per_day.resize_with(day_count, Default::default);
        }
        self.touch();
    }

    /// Replaces the make-up section of the form.
    pub fn set_makeup_form(&mut self, form: MakeupForm) {
        debug!(artist = form.artist.name(), "make-up form updated");
        self.makeup_form = Some(form);
        self.touch();
    }

    /// Replaces the hairstyling section of the form.
    pub fn set_hair_form(&mut self, form: HairForm) {
        debug!(artist = form.artist.name(), "hair form updated");
        self.hair_form = Some(form);
        self.touch();
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Switches between default and custom pricing.
    pub fn set_price_mode(&mut self, mode: PriceMode) {
        debug!(?mode, "price mode updated");
        self.price_mode = mode;
        self.touch();
    }

    /// Stores a user-edited price book (sanitized: negative rates clamp to
    /// zero) and switches to custom mode.
    pub fn set_custom_prices(&mut self, book: PriceBook) {
        debug!("custom prices updated");
        self.custom_prices = Some(book.sanitized());
        self.price_mode = PriceMode::Custom;
        self.touch();
    }

    // -------------------------------------------------------------------------
    // Recalculation
    // -------------------------------------------------------------------------

    /// Rebuilds the calculations from the current form snapshot.
    ///
    /// Resolves the price book for the current mode, dispatches each
    /// selected service through its artist's pricing scheme (per-unit or
    /// flat-rate), carries payments forward from the previous results, and
    /// refreshes the grand summary.
    pub fn recalculate(&mut self) -> GrandSummary {
        let wedding_dates = self.multi_day.effective_dates();
        if wedding_dates.is_empty() {
            warn!("recalculate without event dates; clearing results");
            self.calculations.clear();
            self.grand_summary = GrandSummary::default();
            self.touch();
            return self.grand_summary;
        }

        let book = resolve_price_book(
            self.price_mode,
            &self.default_prices,
            self.custom_prices.as_ref(),
        );

        let mut calculations = Vec::new();

        if self.service_choice.makeup {
            if let Some(form) = &self.makeup_form {
                let scheme = makeup_scheme(form.artist, book);
                calculations.push(scheme.calculate(&form.as_input(), &wedding_dates));
            }
        }

        if self.service_choice.hair {
            if let Some(form) = &self.hair_form {
                let scheme = hair_scheme(form.artist, book);
                calculations.push(scheme.calculate(&form.as_input(), &wedding_dates));
            }
        }

        payments::preserve_payments(&mut calculations, &self.calculations);

        self.calculations = calculations;
        self.grand_summary = calculator::grand_summary(&self.calculations);
        self.touch();

        info!(
            services = self.calculations.len(),
            days = wedding_dates.len(),
            grand_total = %self.grand_summary.grand_total,
            "quote recalculated"
        );
        self.grand_summary
    }

    // -------------------------------------------------------------------------
    // Payments
    // -------------------------------------------------------------------------

    fn result_mut(&mut self, service: ServiceType) -> CoreResult<&mut CalculationResult> {
        self.calculations
            .iter_mut()
            .find(|c| c.service_type == service)
            .ok_or_else(|| CoreError::CalculationNotFound {
                service: service.display_name().to_string(),
            })
    }

    /// Records a payment against one service's result.
    pub fn record_payment(&mut self, service: ServiceType, payment: Payment) -> CoreResult<()> {
        debug!(service = service.display_name(), amount = %payment.amount, "payment recorded");
        let result = self.result_mut(service)?;
        payments::record_payment(result, payment)?;
        self.refresh_summary();
        Ok(())
    }

    /// Replaces a payment (matched by id) on one service's result.
    pub fn update_payment(&mut self, service: ServiceType, payment: Payment) -> CoreResult<()> {
        debug!(service = service.display_name(), id = %payment.id, "payment updated");
        let result = self.result_mut(service)?;
        payments::update_payment(result, payment)?;
        self.refresh_summary();
        Ok(())
    }

    /// Removes a payment by id from one service's result.
    pub fn remove_payment(&mut self, service: ServiceType, payment_id: &str) -> CoreResult<Payment> {
        debug!(service = service.display_name(), id = payment_id, "payment removed");
        let result = self.result_mut(service)?;
        let removed = payments::remove_payment(result, payment_id)?;
        self.refresh_summary();
        Ok(removed)
    }

    fn refresh_summary(&mut self) {
        self.grand_summary = calculator::grand_summary(&self.calculations);
        self.touch();
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// Cross-service totals per event date, for the per-day summary card.
    pub fn per_day_totals(&self) -> Vec<PerDayTotal> {
        calculator::per_day_totals(&self.calculations)
    }

    /// Clears everything back to a fresh session (the "Clear All" action).
    pub fn reset(&mut self) {
        info!("session reset");
        *self = QuoteSession::new();
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        QuoteSession::new()
    }
}

// =============================================================================
// Shared Session State
// =============================================================================

/// Shell-managed session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<QuoteSession>>` because:
/// - `Arc`: Allows shared ownership across handlers
/// - `Mutex`: Ensures only one handler modifies the session at a time
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<QuoteSession>>,
}

impl SessionState {
    /// Creates a fresh session state.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(QuoteSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = state.with_session(|s| s.grand_summary);
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&QuoteSession) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_session_mut(|s| s.recalculate());
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut QuoteSession) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
