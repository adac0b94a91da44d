//! Property-based tests for voucher balancing.

use ledgerline_shared::types::id::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::currency::FxContext;

use super::balance::{balance, validate_for_submit};
use super::line::Line;

fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

fn fx_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

fn debit_line(amount: Decimal) -> Line {
    let mut line = Line::blank();
    line.account = Some(AccountId::new());
    line.debit = Some(amount);
    line
}

fn credit_line(amount: Decimal) -> Line {
    let mut line = Line::blank();
    line.account = Some(AccountId::new());
    line.credit = Some(amount);
    line
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Mirrored debit/credit pairs always validate.
    #[test]
    fn prop_mirrored_pair_is_balanced(amount in amount()) {
        let lines = vec![debit_line(amount), credit_line(amount)];
        let report = validate_for_submit(&lines).expect("balanced voucher must validate");
        prop_assert_eq!(report.difference, Decimal::ZERO);
    }

    /// The difference is always debit minus credit.
    #[test]
    fn prop_difference_is_signed(debit in amount(), credit in amount()) {
        let lines = vec![debit_line(debit), credit_line(credit)];
        let report = balance(&lines);
        prop_assert_eq!(report.difference, debit - credit);
        prop_assert_eq!(report.balanced, debit == credit);
    }

    /// Mirroring preserves which side carries the amount.
    #[test]
    fn prop_mirror_preserves_side(amount in amount(), rate in fx_rate()) {
        let mut line = debit_line(amount);
        line.mirror(FxContext::cross(rate));
        prop_assert!(line.debit_base.is_some());
        prop_assert!(line.credit_base.is_none());
    }
}
