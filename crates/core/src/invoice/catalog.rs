//! Catalog lookup and line seeding on item selection.
//!
//! Catalog prices are stored in the tenant's base currency. When the user
//! picks an item the unit price is converted into the transaction currency,
//! but the base-currency figures are computed straight from the catalog
//! price so they carry no conversion round-trip error.

use ledgerline_shared::types::id::{AccountId, ItemId, TaxCategoryId, UnitId};
use rust_decimal::Decimal;

use crate::currency::{FxContext, round3};

use super::line::Line;

/// Purchase-side catalog data for an item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseData {
    /// Unit cost price in the tenant's base currency.
    pub cost_price: Decimal,
    pub tax_percent: Option<Decimal>,
    pub tax_category: Option<TaxCategoryId>,
    pub unit: Option<UnitId>,
    pub account: Option<AccountId>,
    pub description: Option<String>,
}

/// Read-only access to the item catalog.
pub trait CatalogLookup {
    /// Returns the purchase data for an item, or `None` if unknown.
    fn purchase_data(&self, item: ItemId) -> Option<PurchaseData>;
}

/// Seeds a line from a catalog item and recomputes it.
///
/// The transaction-currency side is derived from the converted rate while
/// the base-currency side is derived independently from the catalog cost
/// price. `rate_base` keeps the unrounded catalog price as the anchor for
/// later resynchronization.
pub fn apply_selection(
    line: &mut Line,
    item: ItemId,
    data: &PurchaseData,
    fx: FxContext,
    has_tax_config: bool,
) {
    let cost = if data.cost_price > Decimal::ZERO {
        data.cost_price
    } else {
        Decimal::ZERO
    };

    line.item = Some(item);
    if data.description.is_some() {
        line.description.clone_from(&data.description);
    }
    if data.account.is_some() {
        line.account = data.account;
    }
    if data.unit.is_some() {
        line.unit = data.unit;
    }
    line.tax_category = data.tax_category;
    line.tax_percent = if has_tax_config {
        data.tax_percent
    } else {
        None
    };

    if line.quantity == Decimal::ZERO {
        line.quantity = Decimal::ONE;
    }
    line.rate = if fx.cross_currency {
        round3(cost / fx.effective())
    } else {
        cost
    };

    super::calc::recompute(line, fx, has_tax_config);

    // The base side is recomputed from the catalog price directly so a
    // lossy rate conversion never leaks into base-currency reporting.
    let base = round3(line.quantity * cost);
    line.discount_amount_base = round3(base * line.discount_percent / Decimal::ONE_HUNDRED);
    line.taxable_amount_base = round3(base - line.discount_amount_base);
    let tax_percent = if has_tax_config {
        line.tax_percent.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    line.tax_amount_base = round3(line.taxable_amount_base * tax_percent / Decimal::ONE_HUNDRED);
    line.net_amount_base = round3(line.taxable_amount_base + line.tax_amount_base);
    line.rate_base = Some(cost);
}
