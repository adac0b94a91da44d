//! Persistence payloads produced at submit time.
//!
//! Payloads are a snapshot of the document in both currency views, with
//! rows numbered in display order. Placeholder rows never appear.

use chrono::NaiveDate;
use ledgerline_shared::types::id::{
    AccountId, DocumentId, ItemId, LineId, TaxCategoryId, UnitId,
};
use rust_decimal::Decimal;
use serde::Serialize;

use super::status::DocumentStatus;
use super::totals::Totals;

/// A purchase-invoice line ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLinePayload {
    pub line_id: LineId,
    /// 1-based position of the row in the document.
    pub seq_no: u32,
    pub item_id: ItemId,
    pub description: Option<String>,
    pub account_id: Option<AccountId>,
    pub unit_id: Option<UnitId>,
    pub tax_category_id: Option<TaxCategoryId>,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub discount_percent: Decimal,
    pub tax_percent: Option<Decimal>,
    pub discount_amount: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub net_amount: Decimal,
    pub rate_base: Option<Decimal>,
    pub discount_amount_base: Decimal,
    pub taxable_amount_base: Decimal,
    pub tax_amount_base: Decimal,
    pub net_amount_base: Decimal,
}

/// The full purchase-invoice snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoicePayload {
    pub document_id: DocumentId,
    pub status: DocumentStatus,
    pub currency: String,
    pub base_currency: String,
    pub exchange_rate: Decimal,
    pub exchange_rate_date: NaiveDate,
    pub totals: Totals,
    /// Amount still owed. Carried over on edit, otherwise the net total.
    pub pending_amount: Decimal,
    pub pending_amount_base: Decimal,
    pub lines: Vec<InvoiceLinePayload>,
}

/// A journal-voucher entry ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoucherLinePayload {
    pub line_id: LineId,
    pub seq_no: u32,
    pub account_id: AccountId,
    pub description: Option<String>,
    pub debit: Option<Decimal>,
    pub credit: Option<Decimal>,
    pub debit_base: Option<Decimal>,
    pub credit_base: Option<Decimal>,
}

/// The full journal-voucher snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoucherPayload {
    pub document_id: DocumentId,
    pub status: DocumentStatus,
    pub currency: String,
    pub base_currency: String,
    pub exchange_rate: Decimal,
    pub exchange_rate_date: NaiveDate,
    pub narration: Option<String>,
    pub debit_total: Decimal,
    pub credit_total: Decimal,
    pub debit_total_base: Decimal,
    pub credit_total_base: Decimal,
    pub lines: Vec<VoucherLinePayload>,
}
