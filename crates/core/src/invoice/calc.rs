//! Per-line derived-field recomputation.
//!
//! CRITICAL: The calculation order is fixed and discount always applies
//! before tax:
//! 1. base     = round3(quantity * rate)
//! 2. discount = round3(base * discount% / 100)
//! 3. taxable  = round3(base - discount)
//! 4. tax      = round3(taxable * tax% / 100), zero without tax config
//! 5. net      = round3(taxable + tax)
//!
//! Each step rounds independently, so intermediate figures are exactly the
//! figures shown to the user. Base-currency mirrors are then produced from
//! the transaction figures with the effective rate.

use rust_decimal::Decimal;

use crate::currency::{FxContext, round3, to_base};

use super::line::Line;

/// Recomputes every derived field of a line from its input fields.
///
/// Overwrites all derived amounts wholesale, including `rate_base`. Callers
/// that need to preserve the resync anchor must save it before calling and
/// restore it after.
pub fn recompute(line: &mut Line, fx: FxContext, has_tax_config: bool) {
    let base = round3(line.quantity * line.rate);
    line.discount_amount = round3(base * line.discount_percent / Decimal::ONE_HUNDRED);
    line.taxable_amount = round3(base - line.discount_amount);

    let tax_percent = if has_tax_config {
        line.tax_percent.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    line.tax_amount = round3(line.taxable_amount * tax_percent / Decimal::ONE_HUNDRED);
    line.net_amount = round3(line.taxable_amount + line.tax_amount);

    let multiplier = fx.effective();
    line.rate_base = Some(round3(line.rate * multiplier));
    line.discount_amount_base = to_base(line.discount_amount, multiplier);
    line.taxable_amount_base = to_base(line.taxable_amount, multiplier);
    line.tax_amount_base = to_base(line.tax_amount, multiplier);
    line.net_amount_base = to_base(line.net_amount, multiplier);
}
