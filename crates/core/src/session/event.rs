//! User-facing editing events.
//!
//! Numeric edits carry the raw text the user typed; coercion happens when
//! the event is applied. Rate quotes arrive as events too because the
//! provider resolves asynchronously and may land after the user has moved
//! on.

use ledgerline_shared::types::id::{AccountId, ItemId, LineId};

use crate::currency::RateQuote;
use crate::document::VoucherTemplate;
use crate::invoice::PurchaseData;

/// An edit applied to a purchase-invoice session.
#[derive(Debug, Clone)]
pub enum InvoiceEvent {
    LineAdded,
    LineRemoved(LineId),
    QuantityEdited { line: LineId, raw: String },
    RateEdited { line: LineId, raw: String },
    DiscountEdited { line: LineId, raw: String },
    DescriptionEdited { line: LineId, text: String },
    /// The user picked a catalog item for a row.
    ItemSelected {
        line: LineId,
        item: ItemId,
        data: PurchaseData,
    },
    AdjustmentEdited { raw: String },
    /// The user switched the document's transaction currency.
    CurrencyChanged { currency: String },
    /// An asynchronous rate fetch resolved.
    RateResolved(RateQuote),
    /// The user typed an exchange rate by hand.
    RateOverridden { raw: String },
}

/// An edit applied to a journal-voucher session.
#[derive(Debug, Clone)]
pub enum VoucherEvent {
    LineAdded,
    LineRemoved(LineId),
    AccountEdited {
        line: LineId,
        account: Option<AccountId>,
    },
    DebitEdited { line: LineId, raw: String },
    CreditEdited { line: LineId, raw: String },
    DescriptionEdited { line: LineId, text: String },
    NarrationEdited { text: String },
    CurrencyChanged { currency: String },
    RateResolved(RateQuote),
    RateOverridden { raw: String },
    /// A saved template is merged into the document.
    TemplateApplied(VoucherTemplate),
}
