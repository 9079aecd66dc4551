//! # Pricing Resolution
//!
//! Resolves which prices a calculation runs on, before the calculator is
//! invoked:
//!
//! 1. **Price mode** — the user either accepts the default rate cards or
//!    edits a custom copy ([`resolve_price_book`]).
//! 2. **Per-artist scheme** — most artists bill per unit against the
//!    service's rate card; one hairstylist bills through a flat-rate
//!    package instead ([`hair_scheme`]). The dispatch is keyed on artist
//!    identity and resolved once, up front; the calculator never branches
//!    on who the artist is.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pricing Resolution Flow                              │
//! │                                                                         │
//! │  PriceMode ──► resolve_price_book ──► &PriceBook                       │
//! │                                          │                              │
//! │  artist ──────► makeup_scheme/hair_scheme┴──► PricingScheme            │
//! │                                                 │                       │
//! │                       ┌─────────────────────────┴──────────┐           │
//! │                       ▼                                    ▼           │
//! │            PerUnit(ServicePricing)              FlatRate(package)      │
//! │            → calculator::calculate_service      → flat_rate::...       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::flat_rate::FlatRatePackage;
use crate::money::Money;
use crate::types::{HairArtist, MakeupArtist, PriceBook, PriceMode, ServicePricing};

// =============================================================================
// Price Mode Resolution
// =============================================================================

/// Picks the rate cards for the selected price mode.
///
/// Custom mode without an edited book falls back to the defaults — the user
/// switched modes but never changed a number.
pub fn resolve_price_book<'a>(
    mode: PriceMode,
    default: &'a PriceBook,
    custom: Option<&'a PriceBook>,
) -> &'a PriceBook {
    match mode {
        PriceMode::Default => default,
        PriceMode::Custom => custom.unwrap_or(default),
    }
}

impl ServicePricing {
    /// Clamps every rate at zero. Custom price edits arrive from free-form
    /// inputs; a negative rate is never meaningful.
    pub fn sanitized(&self) -> ServicePricing {
        let clamp = |m: Money| m.max(Money::zero());
        ServicePricing {
            trial_unit: clamp(self.trial_unit),
            bridal_unit: clamp(self.bridal_unit),
            guest_unit: clamp(self.guest_unit),
            scheduled_return_bride: clamp(self.scheduled_return_bride),
            scheduled_return_guest_unit: clamp(self.scheduled_return_guest_unit),
            touchup_hourly: clamp(self.touchup_hourly),
            exclusivity_fee: clamp(self.exclusivity_fee),
        }
    }
}

impl PriceBook {
    /// Sanitizes both cards, see [`ServicePricing::sanitized`].
    pub fn sanitized(&self) -> PriceBook {
        PriceBook {
            makeup: self.makeup.sanitized(),
            hair: self.hair.sanitized(),
        }
    }
}

// =============================================================================
// Per-Artist Scheme Dispatch
// =============================================================================

/// How one service of a quote is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum PricingScheme {
    /// The generic line-item model: every charge is quantity × unit rate
    /// from a [`ServicePricing`] card.
    PerUnit(ServicePricing),

    /// A bundled package with a base price and add-on rates, used instead
    /// of per-unit pricing for specific artists.
    FlatRate(FlatRatePackage),
}

impl PricingScheme {
    /// Runs the calculation this scheme selects: the generic per-unit
    /// calculator or the flat-rate path. Callers resolve the scheme once and
    /// never branch on artist identity again.
    pub fn calculate(
        &self,
        input: &crate::types::ServiceInput<'_>,
        wedding_dates: &[chrono::NaiveDate],
    ) -> crate::types::CalculationResult {
        match self {
            PricingScheme::PerUnit(card) => {
                crate::calculator::calculate_service(input, card, wedding_dates)
            }
            PricingScheme::FlatRate(package) => {
                crate::flat_rate::calculate_flat_rate_service(input, package, wedding_dates)
            }
        }
    }
}

/// Resolves the pricing scheme for a make-up artist.
///
/// Every make-up artist currently bills per unit against the book's make-up
/// card; the artist argument keeps the dispatch symmetric with
/// [`hair_scheme`], which is where an artist-specific card would slot in.
pub fn makeup_scheme(_artist: MakeupArtist, book: &PriceBook) -> PricingScheme {
    PricingScheme::PerUnit(book.makeup.clone())
}

/// Resolves the pricing scheme for a hairstylist.
///
/// Agne bills through her flat-rate package; everyone else per unit against
/// the book's hair card.
pub fn hair_scheme(artist: HairArtist, book: &PriceBook) -> PricingScheme {
    match artist {
        HairArtist::Agne => PricingScheme::FlatRate(FlatRatePackage::agne()),
        _ => PricingScheme::PerUnit(book.hair.clone()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_uses_default_book() {
        let default = PriceBook::default();
        let mut custom = PriceBook::default();
        custom.makeup.bridal_unit = Money::from_euros(150);

        let resolved = resolve_price_book(PriceMode::Default, &default, Some(&custom));
        assert_eq!(resolved.makeup.bridal_unit, Money::from_euros(120));
    }

    #[test]
    fn test_custom_mode_uses_custom_book() {
        let default = PriceBook::default();
        let mut custom = PriceBook::default();
        custom.makeup.bridal_unit = Money::from_euros(150);

        let resolved = resolve_price_book(PriceMode::Custom, &default, Some(&custom));
        assert_eq!(resolved.makeup.bridal_unit, Money::from_euros(150));
    }

    #[test]
    fn test_custom_mode_without_edits_falls_back() {
        let default = PriceBook::default();
        let resolved = resolve_price_book(PriceMode::Custom, &default, None);
        assert_eq!(resolved, &default);
    }

    #[test]
    fn test_sanitized_clamps_negative_rates() {
        let mut book = PriceBook::default();
        book.hair.guest_unit = Money::from_euros(-10);
        let clean = book.sanitized();
        assert_eq!(clean.hair.guest_unit, Money::zero());
        // Untouched rates survive.
        assert_eq!(clean.hair.bridal_unit, Money::from_euros(100));
    }

    #[test]
    fn test_makeup_artists_all_bill_per_unit() {
        let book = PriceBook::default();
        for artist in MakeupArtist::ALL {
            match makeup_scheme(artist, &book) {
                PricingScheme::PerUnit(card) => assert_eq!(card, book.makeup),
                PricingScheme::FlatRate(_) => panic!("{artist} should bill per unit"),
            }
        }
    }

    #[test]
    fn test_scheme_calculate_dispatches() {
        use crate::types::{DayDetails, HairArtist, HairForm};

        let book = PriceBook::default();
        let dates = ["2026-08-14".parse().unwrap()];

        let mut form = HairForm {
            artist: HairArtist::Eric,
            per_day: DayDetails::seed_days(1),
            ..HairForm::default()
        };
        let per_unit = hair_scheme(form.artist, &book).calculate(&form.as_input(), &dates);
        assert_eq!(per_unit.subtotal, Money::from_euros(100));

        form.artist = HairArtist::Agne;
        let flat = hair_scheme(form.artist, &book).calculate(&form.as_input(), &dates);
        assert_eq!(flat.subtotal, Money::from_euros(1400));
    }

    #[test]
    fn test_agne_is_the_only_flat_rate_hairstylist() {
        let book = PriceBook::default();
        for artist in HairArtist::ALL {
            let scheme = hair_scheme(artist, &book);
            match artist {
                HairArtist::Agne => {
                    assert!(matches!(scheme, PricingScheme::FlatRate(_)))
                }
                _ => assert!(matches!(scheme, PricingScheme::PerUnit(_))),
            }
        }
    }
}
