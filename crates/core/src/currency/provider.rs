//! Exchange-rate provider interface.
//!
//! The provider is an external collaborator and may resolve long after the
//! request was issued. Every quote is tagged with the currency pair it was
//! fetched for so the editing session can discard stale responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spot exchange-rate quote for a currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Exchange rate (1 `from_currency` = rate `to_currency`).
    pub rate: Decimal,
    /// The transaction currency the quote was fetched for.
    pub from_currency: String,
    /// The base currency the quote converts into.
    pub to_currency: String,
}

impl RateQuote {
    /// Returns true if this quote was fetched for the given pair.
    ///
    /// A quote that no longer matches the document's selected currency is
    /// stale and must be ignored, not applied.
    #[must_use]
    pub fn is_for(&self, from_currency: &str, to_currency: &str) -> bool {
        self.from_currency == from_currency && self.to_currency == to_currency
    }
}

/// Supplier of spot exchange rates into the tenant's base currency.
///
/// `None` means the rate could not be resolved; the engine then falls back
/// to rate 1 or the last manual override and never blocks the document.
pub trait RateProvider {
    /// Looks up the spot rate from the given currency into the base currency.
    fn get_rate(&self, from_currency: &str) -> Option<RateQuote>;
}
