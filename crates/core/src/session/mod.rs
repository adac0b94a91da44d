//! Interactive editing sessions.
//!
//! A session owns one document being edited and applies user events to it.
//! All input arrives as raw text and is coerced, never rejected; the only
//! hard errors are structural (unknown line, document not editable, or an
//! invalid status transition at submit time).

pub mod event;
pub mod invoice;
pub mod voucher;

pub use event::{InvoiceEvent, VoucherEvent};
pub use invoice::{InvoiceSession, SavedInvoice};
pub use voucher::{SavedVoucher, VoucherSession};
