//! Debit/credit balance checking.
//!
//! CRITICAL: A voucher may only be submitted when total debits equal total
//! credits exactly. The difference is reported as debit minus credit so
//! callers can show which side is short.

use ledgerline_shared::types::id::LineId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::VoucherError;
use super::line::Line;

/// The debit/credit standing of a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub debit_total: Decimal,
    pub credit_total: Decimal,
    /// Debit total minus credit total. Zero when balanced.
    pub difference: Decimal,
    pub balanced: bool,
}

/// What is wrong with an individual voucher row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineErrorKind {
    /// The row carries an amount but no account.
    MissingAccount,
    /// The row names an account but neither side carries an amount.
    NoAmount,
    /// Both debit and credit carry a value.
    BothSides,
}

/// A validation failure on a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineError {
    pub line: LineId,
    /// Zero-based position of the row in the document.
    pub index: usize,
    pub kind: LineErrorKind,
}

/// Totals the document and reports its standing.
#[must_use]
pub fn balance(lines: &[Line]) -> BalanceReport {
    let debit_total: Decimal = lines.iter().map(Line::debit_amount).sum();
    let credit_total: Decimal = lines.iter().map(Line::credit_amount).sum();
    let difference = debit_total - credit_total;
    BalanceReport {
        debit_total,
        credit_total,
        difference,
        balanced: difference.is_zero(),
    }
}

/// Validates each row individually, skipping untouched placeholders.
#[must_use]
pub fn check_lines(lines: &[Line]) -> Vec<LineError> {
    let mut errors = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let has_debit = !line.debit_amount().is_zero();
        let has_credit = !line.credit_amount().is_zero();
        let kind = if line.account.is_none() {
            Some(LineErrorKind::MissingAccount)
        } else if has_debit && has_credit {
            Some(LineErrorKind::BothSides)
        } else if !has_debit && !has_credit {
            Some(LineErrorKind::NoAmount)
        } else {
            None
        };
        if let Some(kind) = kind {
            errors.push(LineError {
                line: line.id,
                index,
                kind,
            });
        }
    }
    errors
}

/// Full pre-submit validation: per-row checks, then the balance invariant.
pub fn validate_for_submit(lines: &[Line]) -> Result<BalanceReport, VoucherError> {
    let active: Vec<Line> = lines.iter().filter(|l| !l.is_empty()).cloned().collect();
    if active.is_empty() {
        return Err(VoucherError::NoLines);
    }
    let errors = check_lines(lines);
    if !errors.is_empty() {
        return Err(VoucherError::LineErrors(errors));
    }
    let report = balance(&active);
    if !report.balanced {
        return Err(VoucherError::Unbalanced {
            debit_total: report.debit_total,
            credit_total: report.credit_total,
            difference: report.difference,
        });
    }
    Ok(report)
}
