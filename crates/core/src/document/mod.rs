//! Document lifecycle, totals, templates, and persistence payloads.

pub mod error;
pub mod payload;
pub mod status;
pub mod template;
pub mod totals;

pub use error::DocumentError;
pub use payload::{InvoiceLinePayload, InvoicePayload, VoucherLinePayload, VoucherPayload};
pub use status::{DocumentStatus, is_valid_transition, transition};
pub use template::VoucherTemplate;
pub use totals::{Totals, aggregate};
