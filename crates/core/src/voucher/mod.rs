//! Journal-voucher entries and balance validation.

pub mod balance;
pub mod error;
pub mod line;

#[cfg(test)]
mod props;

pub use balance::{BalanceReport, LineError, LineErrorKind, balance, check_lines, validate_for_submit};
pub use error::VoucherError;
pub use line::Line;
