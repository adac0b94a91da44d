//! Invoice line-item state.

use ledgerline_shared::types::id::{AccountId, ItemId, LineId, TaxCategoryId, UnitId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single purchase-invoice line.
///
/// Input fields (`quantity`, `rate`, `discount_percent`, `tax_percent`) are
/// what the user edits. Every other monetary field is derived and overwritten
/// wholesale on each recomputation. Base-currency mirrors sit next to their
/// transaction-currency counterparts with a `_base` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    /// The catalog item this line bills, if one has been picked.
    pub item: Option<ItemId>,
    pub description: Option<String>,
    pub account: Option<AccountId>,
    pub unit: Option<UnitId>,
    pub tax_category: Option<TaxCategoryId>,

    pub quantity: Decimal,
    /// Unit price in the transaction currency.
    pub rate: Decimal,
    pub discount_percent: Decimal,
    /// Tax percentage. `None` until a taxed item seeds it.
    pub tax_percent: Option<Decimal>,

    pub discount_amount: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub net_amount: Decimal,

    /// Unit price in the base currency. This is the resync anchor: it is
    /// written once from the rate in force and survives later rate changes
    /// so that toggling currencies is lossless.
    pub rate_base: Option<Decimal>,
    pub discount_amount_base: Decimal,
    pub taxable_amount_base: Decimal,
    pub tax_amount_base: Decimal,
    pub net_amount_base: Decimal,
}

impl Line {
    /// A fresh empty row ready for user input.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: LineId::new(),
            item: None,
            description: None,
            account: None,
            unit: None,
            tax_category: None,
            quantity: Decimal::ZERO,
            rate: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            tax_percent: None,
            discount_amount: Decimal::ZERO,
            taxable_amount: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            net_amount: Decimal::ZERO,
            rate_base: None,
            discount_amount_base: Decimal::ZERO,
            taxable_amount_base: Decimal::ZERO,
            tax_amount_base: Decimal::ZERO,
            net_amount_base: Decimal::ZERO,
        }
    }

    /// Whether an item has been picked for this row.
    ///
    /// Rows without a selection are placeholders: they are skipped by
    /// resynchronization and excluded from the submit payload.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.item.is_some()
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_has_no_selection() {
        let line = Line::blank();
        assert!(!line.has_selection());
        assert_eq!(line.quantity, Decimal::ZERO);
        assert_eq!(line.net_amount, Decimal::ZERO);
        assert!(line.rate_base.is_none());
    }

    #[test]
    fn test_selection_follows_item() {
        let mut line = Line::blank();
        line.item = Some(ItemId::new());
        assert!(line.has_selection());
    }
}
