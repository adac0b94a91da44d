//! Voucher validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::document::DocumentError;

use super::balance::LineError;

/// Errors raised by voucher validation and submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoucherError {
    /// The voucher has no entries with any content.
    #[error("voucher has no entries")]
    NoLines,

    /// Debits and credits do not match.
    #[error("voucher is out of balance: debit {debit_total}, credit {credit_total}, difference {difference}")]
    Unbalanced {
        debit_total: Decimal,
        credit_total: Decimal,
        difference: Decimal,
    },

    /// One or more rows failed per-row validation.
    #[error("{} voucher row(s) are invalid", .0.len())]
    LineErrors(Vec<LineError>),

    /// The document state machine rejected the operation.
    #[error(transparent)]
    Document(#[from] DocumentError),
}
