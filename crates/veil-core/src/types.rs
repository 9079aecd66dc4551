//! # Domain Types
//!
//! Core domain types used throughout Veil Quotes.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  MakeupForm     │   │   DayDetails    │   │ ServicePricing  │       │
//! │  │  HairForm       │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ─────────────  │   │  guests         │   │  trial_unit     │       │
//! │  │  artist         │   │  travel_fee     │   │  bridal_unit    │       │
//! │  │  trials         │   │  num_people     │   │  guest_unit     │       │
//! │  │  per_day ───────┼──►│  num_cars ...   │   │  ...            │       │
//! │  └────────┬────────┘   └─────────────────┘   └────────┬────────┘       │
//! │           │                                           │                 │
//! │           └────────────► Calculator ◄─────────────────┘                 │
//! │                              │                                          │
//! │  ┌─────────────────┐   ┌────▼────────────┐   ┌─────────────────┐       │
//! │  │ CalculationLine │◄──│CalculationResult│──►│  GrandSummary   │       │
//! │  │  DayBreakdown   │   │  + Payments     │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All UI-facing types serialize as camelCase JSON and export TypeScript
//! bindings, so the TypeScript frontend and this crate never drift.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Service Selection
// =============================================================================

/// The two services a quote can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Makeup,
    Hair,
}

impl ServiceType {
    /// Human-readable service name, as the quote documents print it.
    pub const fn display_name(&self) -> &'static str {
        match self {
            ServiceType::Makeup => "Make-up",
            ServiceType::Hair => "Hairstyling",
        }
    }

    /// Label of the one bridal line charged on every event day.
    pub const fn bridal_label(&self) -> &'static str {
        match self {
            ServiceType::Makeup => "Bridal MU",
            ServiceType::Hair => "Bridal H",
        }
    }
}

/// Which services the client selected for this quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChoice {
    pub makeup: bool,
    pub hair: bool,
}

// =============================================================================
// Artists
// =============================================================================

/// Make-up artist roster.
///
/// Serialized as the display name — quote documents store the human-readable
/// artist string, not an internal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MakeupArtist {
    Lola,
    #[serde(rename = "Inês")]
    Ines,
    Teresa,
    Miguel,
    #[serde(rename = "Ana Roma")]
    AnaRoma,
    #[serde(rename = "Ana Neves")]
    AnaNeves,
    Rita,
    Sara,
    Sofia,
    Filipa,
}

impl MakeupArtist {
    /// Every bookable make-up artist, in roster order.
    pub const ALL: [MakeupArtist; 10] = [
        MakeupArtist::Lola,
        MakeupArtist::Ines,
        MakeupArtist::Teresa,
        MakeupArtist::Miguel,
        MakeupArtist::AnaRoma,
        MakeupArtist::AnaNeves,
        MakeupArtist::Rita,
        MakeupArtist::Sara,
        MakeupArtist::Sofia,
        MakeupArtist::Filipa,
    ];

    /// Display name as printed on quotes.
    pub const fn name(&self) -> &'static str {
        match self {
            MakeupArtist::Lola => "Lola",
            MakeupArtist::Ines => "Inês",
            MakeupArtist::Teresa => "Teresa",
            MakeupArtist::Miguel => "Miguel",
            MakeupArtist::AnaRoma => "Ana Roma",
            MakeupArtist::AnaNeves => "Ana Neves",
            MakeupArtist::Rita => "Rita",
            MakeupArtist::Sara => "Sara",
            MakeupArtist::Sofia => "Sofia",
            MakeupArtist::Filipa => "Filipa",
        }
    }
}

impl std::fmt::Display for MakeupArtist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hairstylist roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HairArtist {
    /// Agne bills through a flat-rate package instead of per-unit pricing.
    /// See [`crate::flat_rate`].
    Agne,
    #[serde(rename = "Lília")]
    Lilia,
    Andreia,
    Eric,
    Oksana,
    Joana,
    #[serde(rename = "Olga H")]
    OlgaH,
}

impl HairArtist {
    /// Every bookable hairstylist, in roster order.
    pub const ALL: [HairArtist; 7] = [
        HairArtist::Agne,
        HairArtist::Lilia,
        HairArtist::Andreia,
        HairArtist::Eric,
        HairArtist::Oksana,
        HairArtist::Joana,
        HairArtist::OlgaH,
    ];

    /// Display name as printed on quotes.
    pub const fn name(&self) -> &'static str {
        match self {
            HairArtist::Agne => "Agne",
            HairArtist::Lilia => "Lília",
            HairArtist::Andreia => "Andreia",
            HairArtist::Eric => "Eric",
            HairArtist::Oksana => "Oksana",
            HairArtist::Joana => "Joana",
            HairArtist::OlgaH => "Olga H",
        }
    }
}

impl std::fmt::Display for HairArtist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Event Dates
// =============================================================================

/// The event-date block of the main form.
///
/// A wedding can span up to [`crate::MAX_EVENT_DAYS`] days. The entered date
/// list may be longer than the selected day count while the user is editing;
/// [`MultiDay::effective_dates`] is the canonical projection the calculator
/// receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MultiDay {
    pub has_multiple_days: bool,

    /// Number of event days when `has_multiple_days` (2-4). `None` means a
    /// single-day wedding.
    pub count: Option<u8>,

    /// Entered dates, in event order.
    #[ts(as = "Vec<String>")]
    pub dates: Vec<NaiveDate>,

    pub bride_name: String,
}

impl MultiDay {
    /// The ordered event dates the calculator works with: the entered dates
    /// truncated to the selected day count (one day when no count is set).
    pub fn effective_dates(&self) -> Vec<NaiveDate> {
        let count = self.count.unwrap_or(1) as usize;
        self.dates.iter().copied().take(count.max(1)).collect()
    }
}

impl Default for MultiDay {
    fn default() -> Self {
        MultiDay {
            has_multiple_days: false,
            count: None,
            dates: Vec::new(),
            bride_name: String::new(),
        }
    }
}

// =============================================================================
// Day Details
// =============================================================================

/// Per-day form inputs, shared by both services.
///
/// One instance per event date, index-aligned with the date list. A missing
/// entry is synthesized via [`Default`], which is the single source of truth
/// for "nothing requested on this day".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DayDetails {
    /// Second on-site visit by the artist later in the day.
    pub scheduled_return: bool,
    pub scheduled_return_bride: bool,
    pub scheduled_return_guests: u32,

    /// Guests receiving the service (beyond the bride).
    pub guests: u32,

    /// Travel fee per car for this day. A positive fee voids any scheduled
    /// return for the day.
    pub travel_fee: Money,

    /// Total people traveling, including the main artist.
    pub num_people: u32,

    /// Cars going on behalf of this service.
    pub num_cars: u32,

    /// Client pays the flat exclusivity fee for this day.
    pub exclusivity: bool,

    /// Touch-up hours booked for this day.
    pub touchup_hours: u32,

    /// Beauty venue (location) for this day.
    pub beauty_venue: String,
}

/// The day-defaults constructor: no scheduled return, no guests, no travel
/// fee, the main artist alone with one car, no exclusivity, no touch-ups.
impl Default for DayDetails {
    fn default() -> Self {
        DayDetails {
            scheduled_return: false,
            scheduled_return_bride: false,
            scheduled_return_guests: 0,
            guests: 0,
            travel_fee: Money::zero(),
            num_people: 1,
            num_cars: 1,
            exclusivity: false,
            touchup_hours: 0,
            beauty_venue: String::new(),
        }
    }
}

impl DayDetails {
    /// Seeds per-day entries for an `n`-day wedding.
    pub fn seed_days(n: usize) -> Vec<DayDetails> {
        vec![DayDetails::default(); n]
    }
}

// =============================================================================
// Service Forms
// =============================================================================

/// Make-up section of the quote form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MakeupForm {
    pub artist: MakeupArtist,

    /// Pre-wedding trial sessions.
    pub trials: u32,
    pub trial_travel_enabled: bool,
    pub trial_venue: String,
    pub trial_travel_fee: Money,

    /// Per-day inputs, index-aligned with the event dates.
    pub per_day: Vec<DayDetails>,
}

impl Default for MakeupForm {
    fn default() -> Self {
        MakeupForm {
            artist: MakeupArtist::Lola,
            trials: 0,
            trial_travel_enabled: false,
            trial_venue: String::new(),
            trial_travel_fee: Money::zero(),
            per_day: Vec::new(),
        }
    }
}

/// Hairstyling section of the quote form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HairForm {
    pub artist: HairArtist,

    pub trials: u32,
    pub trial_travel_enabled: bool,
    pub trial_venue: String,
    pub trial_travel_fee: Money,

    pub per_day: Vec<DayDetails>,
}

impl Default for HairForm {
    fn default() -> Self {
        HairForm {
            artist: HairArtist::Agne,
            trials: 0,
            trial_travel_enabled: false,
            trial_venue: String::new(),
            trial_travel_fee: Money::zero(),
            per_day: Vec::new(),
        }
    }
}

/// Borrowed, service-agnostic view of a form.
///
/// Both forms project into this one shape so a single calculator serves
/// make-up and hair; only the rate card differs between the two calls.
#[derive(Debug, Clone, Copy)]
pub struct ServiceInput<'a> {
    pub artist_name: &'a str,
    pub service_type: ServiceType,
    pub trials: u32,
    pub trial_travel_enabled: bool,
    pub trial_venue: &'a str,
    pub trial_travel_fee: Money,
    pub per_day: &'a [DayDetails],
}

impl MakeupForm {
    /// Projects this form into the calculator's generic input view.
    pub fn as_input(&self) -> ServiceInput<'_> {
        ServiceInput {
            artist_name: self.artist.name(),
            service_type: ServiceType::Makeup,
            trials: self.trials,
            trial_travel_enabled: self.trial_travel_enabled,
            trial_venue: &self.trial_venue,
            trial_travel_fee: self.trial_travel_fee,
            per_day: &self.per_day,
        }
    }
}

impl HairForm {
    /// Projects this form into the calculator's generic input view.
    pub fn as_input(&self) -> ServiceInput<'_> {
        ServiceInput {
            artist_name: self.artist.name(),
            service_type: ServiceType::Hair,
            trials: self.trials,
            trial_travel_enabled: self.trial_travel_enabled,
            trial_venue: &self.trial_venue,
            trial_travel_fee: self.trial_travel_fee,
            per_day: &self.per_day,
        }
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// A named per-unit rate card for one service.
///
/// Immutable per calculation; the caller resolves which card applies
/// (system default, artist-specific, or user-edited custom) before the
/// calculator runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ServicePricing {
    /// Per pre-wedding trial session.
    pub trial_unit: Money,
    /// The bridal service, charged once per event day.
    pub bridal_unit: Money,
    /// Per guest receiving the service.
    pub guest_unit: Money,
    /// The bride's scheduled return visit.
    pub scheduled_return_bride: Money,
    /// Per guest covered by a scheduled return.
    pub scheduled_return_guest_unit: Money,
    /// Per touch-up hour.
    pub touchup_hourly: Money,
    /// Flat exclusivity fee for a day.
    pub exclusivity_fee: Money,
}

/// The pair of rate cards a calculation runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBook {
    pub makeup: ServicePricing,
    pub hair: ServicePricing,
}

/// System default rate cards.
impl Default for PriceBook {
    fn default() -> Self {
        PriceBook {
            makeup: ServicePricing {
                trial_unit: Money::from_euros(80),
                bridal_unit: Money::from_euros(120),
                guest_unit: Money::from_euros(60),
                scheduled_return_bride: Money::from_euros(80),
                scheduled_return_guest_unit: Money::from_euros(40),
                touchup_hourly: Money::from_euros(50),
                exclusivity_fee: Money::from_euros(200),
            },
            hair: ServicePricing {
                trial_unit: Money::from_euros(70),
                bridal_unit: Money::from_euros(100),
                guest_unit: Money::from_euros(50),
                scheduled_return_bride: Money::from_euros(70),
                scheduled_return_guest_unit: Money::from_euros(35),
                touchup_hourly: Money::from_euros(45),
                exclusivity_fee: Money::from_euros(150),
            },
        }
    }
}

/// Whether the quote runs on default or user-edited pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    Default,
    Custom,
}

impl Default for PriceMode {
    fn default() -> Self {
        PriceMode::Default
    }
}

// =============================================================================
// Calculation Output
// =============================================================================

/// One priced line item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationLine {
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Money>,

    pub total: Money,

    /// Descriptive note: a date, a venue, a formula, an hour count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

impl CalculationLine {
    /// A quantity × unit line.
    pub fn per_unit(label: impl Into<String>, qty: i64, unit: Money) -> Self {
        CalculationLine {
            label: label.into(),
            qty: Some(qty),
            unit: Some(unit),
            total: unit.multiply_quantity(qty),
            meta: None,
        }
    }

    /// A flat line with no quantity or unit price.
    pub fn flat(label: impl Into<String>, total: Money) -> Self {
        CalculationLine {
            label: label.into(),
            qty: None,
            unit: None,
            total,
            meta: None,
        }
    }

    /// Attaches a descriptive note to the line.
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

/// The priced lines for one event day, with their subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DayBreakdown {
    #[ts(as = "String")]
    pub date: NaiveDate,

    pub lines: Vec<CalculationLine>,

    /// Sum of this day's line totals.
    pub subtotal: Money,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

/// A payment recorded against one service's quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// UUID, assigned when the payment is recorded.
    pub id: String,

    #[ts(as = "String")]
    pub date: NaiveDate,

    /// What the payment was for ("deposit", "final balance", ...).
    pub occasion: String,

    pub amount: Money,
}

/// Per-service output of the calculator.
///
/// ## Invariants
/// - `subtotal = Σ day_breakdowns[*].subtotal + Σ global line totals`
/// - `due = max(0, subtotal - total_paid)`
/// - `lines` is the flattened display list: global lines first, then every
///   day's lines in date order with the date folded into each line's meta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub artist_name: String,
    pub service_type: ServiceType,

    /// Flattened lines for display and export.
    pub lines: Vec<CalculationLine>,

    pub subtotal: Money,

    /// Recorded payments; empty straight out of the calculator.
    pub payments: Vec<Payment>,
    pub total_paid: Money,
    pub due: Money,

    #[ts(as = "Vec<String>")]
    pub wedding_dates: Vec<NaiveDate>,

    /// Free-text venue notes (the trial venue).
    pub venue_notes: String,

    pub day_breakdowns: Vec<DayBreakdown>,
}

impl CalculationResult {
    /// Re-derives `total_paid` and `due` from the payment list.
    ///
    /// `due` never goes negative; an overpaying client owes zero.
    pub fn recompute_payment_totals(&mut self) {
        self.total_paid = self.payments.iter().map(|p| p.amount).sum();
        self.due = (self.subtotal - self.total_paid).max(Money::zero());
    }
}

/// Sums across all calculations in the current quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GrandSummary {
    pub grand_total: Money,
    pub total_paid: Money,
    /// Floored at zero.
    pub total_due: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_labels() {
        assert_eq!(ServiceType::Makeup.bridal_label(), "Bridal MU");
        assert_eq!(ServiceType::Hair.bridal_label(), "Bridal H");
        assert_eq!(ServiceType::Hair.display_name(), "Hairstyling");
    }

    #[test]
    fn test_artist_serializes_as_display_name() {
        let json = serde_json::to_string(&MakeupArtist::AnaRoma).unwrap();
        assert_eq!(json, "\"Ana Roma\"");
        let json = serde_json::to_string(&HairArtist::OlgaH).unwrap();
        assert_eq!(json, "\"Olga H\"");

        let artist: MakeupArtist = serde_json::from_str("\"Inês\"").unwrap();
        assert_eq!(artist, MakeupArtist::Ines);
    }

    #[test]
    fn test_day_details_default_is_quiet_day() {
        let day = DayDetails::default();
        assert!(!day.scheduled_return);
        assert_eq!(day.guests, 0);
        assert!(day.travel_fee.is_zero());
        assert_eq!(day.num_people, 1);
        assert_eq!(day.num_cars, 1);
        assert!(!day.exclusivity);
        assert_eq!(day.touchup_hours, 0);
        assert!(day.beauty_venue.is_empty());
    }

    #[test]
    fn test_seed_days() {
        let days = DayDetails::seed_days(3);
        assert_eq!(days.len(), 3);
        assert_eq!(days[2], DayDetails::default());
    }

    #[test]
    fn test_effective_dates_truncates_to_count() {
        let d = |s: &str| s.parse::<NaiveDate>().unwrap();
        let multi = MultiDay {
            has_multiple_days: true,
            count: Some(2),
            dates: vec![d("2026-08-14"), d("2026-08-15"), d("2026-08-16")],
            bride_name: "Maria".to_string(),
        };
        assert_eq!(multi.effective_dates(), vec![d("2026-08-14"), d("2026-08-15")]);

        let single = MultiDay {
            has_multiple_days: false,
            count: None,
            dates: vec![d("2026-08-14"), d("2026-08-15")],
            bride_name: String::new(),
        };
        assert_eq!(single.effective_dates(), vec![d("2026-08-14")]);
    }

    #[test]
    fn test_default_price_book() {
        let book = PriceBook::default();
        assert_eq!(book.makeup.bridal_unit, Money::from_euros(120));
        assert_eq!(book.makeup.exclusivity_fee, Money::from_euros(200));
        assert_eq!(book.hair.bridal_unit, Money::from_euros(100));
        assert_eq!(book.hair.scheduled_return_guest_unit, Money::from_euros(35));
    }

    #[test]
    fn test_calculation_line_constructors() {
        let line = CalculationLine::per_unit("Guests", 4, Money::from_euros(60));
        assert_eq!(line.total, Money::from_euros(240));
        assert_eq!(line.qty, Some(4));

        let line = CalculationLine::flat("Exclusivity fee", Money::from_euros(200))
            .with_meta("Hotel Cascais");
        assert_eq!(line.qty, None);
        assert_eq!(line.meta.as_deref(), Some("Hotel Cascais"));
    }

    #[test]
    fn test_line_serializes_without_empty_fields() {
        let line = CalculationLine::flat("Trial travel fee", Money::from_euros(50));
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("qty"));
        assert!(!json.contains("meta"));
    }

    #[test]
    fn test_recompute_payment_totals_floors_due() {
        let mut result = CalculationResult {
            artist_name: "Lola".to_string(),
            service_type: ServiceType::Makeup,
            lines: Vec::new(),
            subtotal: Money::from_euros(100),
            payments: vec![Payment {
                id: "p1".to_string(),
                date: "2026-08-01".parse().unwrap(),
                occasion: "deposit".to_string(),
                amount: Money::from_euros(150),
            }],
            total_paid: Money::zero(),
            due: Money::from_euros(100),
            wedding_dates: Vec::new(),
            venue_notes: String::new(),
            day_breakdowns: Vec::new(),
        };
        result.recompute_payment_totals();
        assert_eq!(result.total_paid, Money::from_euros(150));
        assert_eq!(result.due, Money::zero());
    }
}
