//! # veil-session: Quote Session State
//!
//! Owns the mutable state of one quote-building session and orchestrates
//! veil-core on its behalf.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Responsibilities                             │
//! │                                                                         │
//! │  UI shell action              This crate                veil-core       │
//! │  ───────────────              ──────────                ─────────       │
//! │  edit a form          ──────► store snapshot                            │
//! │  confirm / reprice    ──────► recalculate()      ─────► calculator,    │
//! │                               · resolve price book       pricing,      │
//! │                               · dispatch per artist      flat_rate     │
//! │                               · preserve payments ─────► payments      │
//! │  record a payment     ──────► record_payment()   ─────► payments       │
//! │  clear all            ──────► reset()                                   │
//! │                                                                         │
//! │  The calculator itself stays pure and single-threaded; the mutex        │
//! │  exists only at this session boundary.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod state;

pub use state::{QuoteSession, SessionState};
