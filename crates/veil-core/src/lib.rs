//! # veil-core: Pure Business Logic for Veil Quotes
//!
//! This crate is the **heart** of Veil Quotes. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Veil Quotes Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript)                          │   │
//! │  │   Service Form ──► Price Confirmation ──► Quote Result         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 veil-session (State Layer)                      │   │
//! │  │   holds forms + prices, recomputes, preserves payments         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ veil-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌────────────────┐  │   │
//! │  │  │  types   │ │  money   │ │ calculator │ │pricing/flat_rate│ │   │
//! │  │  │ DayDetails│ │  Money   │ │ line items │ │ artist dispatch │ │   │
//! │  │  │  Forms   │ │ cents+bps│ │ summaries  │ │ rate packages   │  │   │
//! │  │  └──────────┘ └──────────┘ └────────────┘ └────────────────┘  │   │
//! │  │  ┌──────────┐ ┌──────────┐                                    │   │
//! │  │  │ payments │ │validation│                                    │   │
//! │  │  └──────────┘ └──────────┘                                    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (forms, rate cards, calculation output)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`calculator`] - The per-unit quote calculator and summaries
//! - [`pricing`] - Price-book resolution and per-artist scheme dispatch
//! - [`flat_rate`] - The one flat-rate package scheme
//! - [`payments`] - Payment recording and preservation across recomputes
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Recomputing the same form twice yields identical
//!    results, byte for byte
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in euro cents (i64)
//! 4. **Total Calculator**: the calculator never fails; disallowed input
//!    combinations are treated as if the gated feature were off
//!
//! ## Example Usage
//!
//! ```rust
//! use veil_core::calculator::{calculate_quote, CalculationInput};
//! use veil_core::{MakeupForm, Money, PriceBook, ServiceChoice};
//!
//! let mut form = MakeupForm::default();
//! form.per_day = veil_core::DayDetails::seed_days(1);
//!
//! let input = CalculationInput {
//!     service_choice: ServiceChoice { makeup: true, hair: false },
//!     makeup_form: Some(&form),
//!     hair_form: None,
//!     prices: &PriceBook::default(),
//!     wedding_dates: &["2026-08-14".parse().unwrap()],
//! };
//!
//! let outcome = calculate_quote(&input);
//! // One quiet day charges the bridal service and nothing else.
//! assert_eq!(outcome.grand_summary.grand_total, Money::from_euros(120));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod flat_rate;
pub mod money;
pub mod payments;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use veil_core::Money` instead of
// `use veil_core::money::Money`

pub use error::{CoreError, CoreResult, QuoteFormError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Travel share billed per assistant, in basis points (3500 = 35%).
///
/// An assistant is a person traveling without a car of their own; each one
/// is billed 35% of the day's per-car travel fee. Fixed business constant,
/// kept as a literal.
pub const ASSISTANT_TRAVEL_RATE_BPS: u32 = 3500;

/// Maximum number of event days a single quote can cover.
///
/// The form offers 1 day, or 2-4 for multi-day weddings.
pub const MAX_EVENT_DAYS: usize = 4;
