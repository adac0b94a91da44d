//! Base-currency conversion logic.
//!
//! CRITICAL: Rounding is applied per derived field, not once at the end:
//! - Every monetary figure carries 3 decimal places
//! - Banker's rounding (round half to even) minimizes cumulative errors
//! - Same-currency documents always carry an implicit rate of 1 so
//!   downstream reporting never special-cases them

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Decimal places carried on every derived monetary field.
pub const SCALE: u32 = 3;

/// Rounds a figure to the engine's working precision.
#[must_use]
pub fn round3(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Converts a transaction-currency figure to its base-currency mirror.
#[must_use]
pub fn to_base(amount: Decimal, multiplier: Decimal) -> Decimal {
    round3(amount * multiplier)
}

/// The exchange-rate state of a document at a given moment.
///
/// Captures both whether the document's transaction currency differs from
/// the tenant's base currency and the rate in force. The effective rate is
/// 1 whenever the currencies match, regardless of any fetched rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxContext {
    /// True when the transaction currency differs from the base currency.
    pub cross_currency: bool,
    /// The captured exchange rate (1 transaction unit = rate base units).
    pub rate: Decimal,
}

impl FxContext {
    /// The same-currency context (rate 1).
    #[must_use]
    pub const fn same_currency() -> Self {
        Self {
            cross_currency: false,
            rate: Decimal::ONE,
        }
    }

    /// Builds a context, falling back to rate 1 when the supplied rate is
    /// unusable (zero, negative, or never resolved).
    #[must_use]
    pub fn new(cross_currency: bool, rate: Decimal) -> Self {
        let rate = if rate > Decimal::ZERO {
            rate
        } else {
            Decimal::ONE
        };
        Self {
            cross_currency,
            rate,
        }
    }

    /// A cross-currency context with the given rate.
    #[must_use]
    pub fn cross(rate: Decimal) -> Self {
        Self::new(true, rate)
    }

    /// The rate actually used for a calculation pass: 1 when the
    /// currencies match, otherwise the captured rate.
    #[must_use]
    pub fn effective(&self) -> Decimal {
        if self.cross_currency {
            self.rate
        } else {
            Decimal::ONE
        }
    }
}
