//! Property-based tests for conversion primitives.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::convert::{FxContext, round3, to_base};

/// Strategy to generate positive amounts (0.001 to 1,000,000.000).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

/// Strategy to generate positive exchange rates (0.001 to 100,000.000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion results never carry more than 3 decimal places.
    #[test]
    fn prop_to_base_scale(amount in positive_amount(), rate in positive_rate()) {
        let result = to_base(amount, rate);
        let scaled = result * Decimal::from(1000);
        prop_assert_eq!(scaled.round(), scaled, "result {} exceeds 3 decimals", result);
    }

    /// Rounding is deterministic.
    #[test]
    fn prop_round3_deterministic(amount in positive_amount()) {
        prop_assert_eq!(round3(amount), round3(amount));
    }

    /// Rounding an already-rounded figure is a no-op.
    #[test]
    fn prop_round3_idempotent(amount in positive_amount()) {
        let once = round3(amount);
        prop_assert_eq!(round3(once), once);
    }

    /// The effective rate of a same-currency context is always 1.
    #[test]
    fn prop_same_currency_effective_one(rate in positive_rate()) {
        let fx = FxContext::new(false, rate);
        prop_assert_eq!(fx.effective(), Decimal::ONE);
    }

    /// A cross-currency context preserves any positive rate.
    #[test]
    fn prop_cross_currency_preserves_rate(rate in positive_rate()) {
        let fx = FxContext::cross(rate);
        prop_assert_eq!(fx.effective(), rate);
    }
}
