//! Journal-voucher line state.

use ledgerline_shared::types::id::{AccountId, LineId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{FxContext, round3};

/// A single journal-voucher entry.
///
/// Exactly one of `debit` and `credit` should carry a value; validation
/// rejects rows that set both or neither. The `_base` mirrors are derived
/// and follow the side that carries the amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub account: Option<AccountId>,
    pub description: Option<String>,
    pub debit: Option<Decimal>,
    pub credit: Option<Decimal>,
    pub debit_base: Option<Decimal>,
    pub credit_base: Option<Decimal>,
}

impl Line {
    /// A fresh empty entry ready for user input.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: LineId::new(),
            account: None,
            description: None,
            debit: None,
            credit: None,
            debit_base: None,
            credit_base: None,
        }
    }

    /// Whether the row has been left entirely untouched.
    ///
    /// Empty rows are placeholders and excluded from validation and the
    /// submit payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.account.is_none() && self.debit_amount().is_zero() && self.credit_amount().is_zero()
    }

    /// The debit amount, treating an absent side as zero.
    #[must_use]
    pub fn debit_amount(&self) -> Decimal {
        self.debit.unwrap_or(Decimal::ZERO)
    }

    /// The credit amount, treating an absent side as zero.
    #[must_use]
    pub fn credit_amount(&self) -> Decimal {
        self.credit.unwrap_or(Decimal::ZERO)
    }

    /// Refreshes the base-currency mirrors from the rate in force.
    pub fn mirror(&mut self, fx: FxContext) {
        let multiplier = fx.effective();
        self.debit_base = self.debit.map(|amount| round3(amount * multiplier));
        self.credit_base = self.credit.map(|amount| round3(amount * multiplier));
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::blank()
    }
}
