//! Document-level totals.
//!
//! Totals are always rebuilt wholesale from the current lines; there is no
//! incremental bookkeeping to drift out of sync. Aggregation is idempotent
//! because every per-line figure is already rounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{FxContext, to_base};
use crate::invoice::Line;

/// Invoice header totals in both currency views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of taxable amounts across lines.
    pub gross_total: Decimal,
    pub total_discount: Decimal,
    pub total_tax: Decimal,
    /// Manual rounding adjustment applied after tax.
    pub adjustment_amount: Decimal,
    /// gross + tax + adjustment.
    pub net_total: Decimal,

    pub gross_total_base: Decimal,
    pub total_discount_base: Decimal,
    pub total_tax_base: Decimal,
    pub adjustment_amount_base: Decimal,
    pub net_total_base: Decimal,
}

/// Rebuilds header totals from the document's lines.
#[must_use]
pub fn aggregate(
    lines: &[Line],
    adjustment: Decimal,
    fx: FxContext,
    has_tax_config: bool,
) -> Totals {
    let gross_total: Decimal = lines.iter().map(|l| l.taxable_amount).sum();
    let total_discount: Decimal = lines.iter().map(|l| l.discount_amount).sum();
    let total_tax: Decimal = if has_tax_config {
        lines.iter().map(|l| l.tax_amount).sum()
    } else {
        Decimal::ZERO
    };
    let net_total = gross_total + total_tax + adjustment;

    let multiplier = fx.effective();
    Totals {
        gross_total,
        total_discount,
        total_tax,
        adjustment_amount: adjustment,
        net_total,
        gross_total_base: to_base(gross_total, multiplier),
        total_discount_base: to_base(total_discount, multiplier),
        total_tax_base: to_base(total_tax, multiplier),
        adjustment_amount_base: to_base(adjustment, multiplier),
        net_total_base: to_base(net_total, multiplier),
    }
}
