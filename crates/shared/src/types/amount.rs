//! Coercion types for raw numeric entry.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! These types wrap `rust_decimal::Decimal` and encode the entry policy:
//! non-numeric or negative input coerces to zero instead of erroring, so
//! the user is never blocked mid-typing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary or quantity figure parsed from raw entry.
///
/// Absent, non-numeric, and negative input all coerce to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parses raw text entry, coercing anything unusable to zero.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<Decimal>()
            .map_or(Self::ZERO, Self::from_decimal)
    }

    /// Wraps a decimal, clamping negatives to zero.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        if value.is_sign_negative() {
            Self::ZERO
        } else {
            Self(value)
        }
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A percentage figure parsed from raw entry, clamped to 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    /// The zero percentage.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parses raw text entry, coercing anything unusable to zero and
    /// clamping the result to the 0–100 range.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<Decimal>()
            .map_or(Self::ZERO, Self::from_decimal)
    }

    /// Wraps a decimal, clamping to 0–100.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        let hundred = Decimal::ONE_HUNDRED;
        if value.is_sign_negative() {
            Self::ZERO
        } else if value > hundred {
            Self(hundred)
        } else {
            Self(value)
        }
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl From<Percent> for Decimal {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("100.5", dec!(100.5))]
    #[case("  42 ", dec!(42))]
    #[case("0.000", dec!(0.000))]
    #[case("", dec!(0))]
    #[case("abc", dec!(0))]
    #[case("12.3.4", dec!(0))]
    #[case("-5", dec!(0))]
    fn test_amount_parse_coercion(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(Amount::parse(raw).value(), expected);
    }

    #[rstest]
    #[case("10", dec!(10))]
    #[case("100", dec!(100))]
    #[case("150", dec!(100))]
    #[case("-10", dec!(0))]
    #[case("garbage", dec!(0))]
    fn test_percent_parse_clamp(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(Percent::parse(raw).value(), expected);
    }

    #[test]
    fn test_amount_from_decimal_clamps_negative() {
        assert_eq!(Amount::from_decimal(dec!(-0.001)), Amount::ZERO);
        assert_eq!(Amount::from_decimal(dec!(7)).value(), dec!(7));
    }

    #[test]
    fn test_amount_is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::from_decimal(dec!(1)).is_zero());
    }
}
