//! Property-based tests for invoice line calculations.

use ledgerline_shared::types::id::ItemId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::currency::FxContext;

use super::calc::recompute;
use super::line::Line;
use super::resync::resync;

fn quantity() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

fn fx_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Net is always the sum of taxable and tax.
    #[test]
    fn prop_net_is_taxable_plus_tax(
        qty in quantity(),
        rate in rate(),
        discount in percent(),
        tax in percent(),
    ) {
        let mut line = Line::blank();
        line.quantity = qty;
        line.rate = rate;
        line.discount_percent = discount;
        line.tax_percent = Some(tax);

        recompute(&mut line, FxContext::same_currency(), true);

        prop_assert_eq!(line.net_amount, line.taxable_amount + line.tax_amount);
    }

    /// Same-currency documents mirror every figure exactly.
    #[test]
    fn prop_same_currency_mirrors_equal(
        qty in quantity(),
        rate in rate(),
        discount in percent(),
    ) {
        let mut line = Line::blank();
        line.quantity = qty;
        line.rate = rate;
        line.discount_percent = discount;

        recompute(&mut line, FxContext::same_currency(), false);

        prop_assert_eq!(line.taxable_amount_base, line.taxable_amount);
        prop_assert_eq!(line.net_amount_base, line.net_amount);
        prop_assert_eq!(line.rate_base, Some(line.rate));
    }

    /// Toggling to a foreign currency and back restores the original rate.
    #[test]
    fn prop_currency_round_trip_restores_rate(
        rate in rate(),
        fx in fx_rate(),
    ) {
        let mut line = Line::blank();
        line.item = Some(ItemId::new());
        line.quantity = Decimal::ONE;
        line.rate = rate;
        let home = FxContext::same_currency();
        let away = FxContext::cross(fx);
        recompute(&mut line, home, false);

        let mut lines = vec![line];
        resync(&mut lines, home, away, false);
        resync(&mut lines, away, home, false);

        prop_assert_eq!(lines[0].rate, rate);
        prop_assert_eq!(lines[0].rate_base, Some(rate));
    }

    /// Discount never exceeds the gross amount at 100% or less.
    #[test]
    fn prop_discount_bounded_by_gross(
        qty in quantity(),
        rate in rate(),
        discount in percent(),
    ) {
        let mut line = Line::blank();
        line.quantity = qty;
        line.rate = rate;
        line.discount_percent = discount;

        recompute(&mut line, FxContext::same_currency(), false);

        prop_assert!(line.taxable_amount >= Decimal::ZERO);
    }
}
