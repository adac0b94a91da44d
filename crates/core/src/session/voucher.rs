//! Journal-voucher editing session.

use chrono::NaiveDate;
use ledgerline_shared::TenantProfile;
use ledgerline_shared::types::amount::Amount;
use ledgerline_shared::types::id::{DocumentId, LineId};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::currency::{FxContext, RateQuote};
use crate::document::{
    DocumentError, DocumentStatus, VoucherLinePayload, VoucherPayload, VoucherTemplate, transition,
};
use crate::voucher::{BalanceReport, Line, VoucherError, balance, validate_for_submit};

use super::event::VoucherEvent;

/// A previously saved voucher being reopened for editing.
#[derive(Debug, Clone)]
pub struct SavedVoucher {
    pub id: DocumentId,
    pub currency: String,
    pub exchange_rate: Decimal,
    pub exchange_rate_date: NaiveDate,
    pub status: DocumentStatus,
    pub narration: Option<String>,
    pub lines: Vec<Line>,
}

/// One journal voucher under edit.
#[derive(Debug, Clone)]
pub struct VoucherSession {
    pub id: DocumentId,
    profile: TenantProfile,
    currency: String,
    fx: FxContext,
    manual_rate_override: bool,
    exchange_rate_date: NaiveDate,
    status: DocumentStatus,
    narration: Option<String>,
    lines: Vec<Line>,
}

impl VoucherSession {
    /// Starts a new draft in the given transaction currency.
    #[must_use]
    pub fn create(profile: TenantProfile, currency: String, today: NaiveDate) -> Self {
        let cross = currency != profile.base_currency;
        Self {
            id: DocumentId::new(),
            profile,
            currency,
            fx: FxContext::new(cross, Decimal::ONE),
            manual_rate_override: false,
            exchange_rate_date: today,
            status: DocumentStatus::Draft,
            narration: None,
            lines: vec![Line::blank(), Line::blank()],
        }
    }

    /// Reopens a saved voucher and refreshes every base mirror.
    #[must_use]
    pub fn load(profile: TenantProfile, saved: SavedVoucher) -> Self {
        let cross = saved.currency != profile.base_currency;
        let fx = FxContext::new(cross, saved.exchange_rate);
        let mut lines = saved.lines;
        for line in &mut lines {
            line.mirror(fx);
        }
        if lines.is_empty() {
            lines.push(Line::blank());
        }
        Self {
            id: saved.id,
            profile,
            currency: saved.currency,
            fx,
            manual_rate_override: false,
            exchange_rate_date: saved.exchange_rate_date,
            status: saved.status,
            narration: saved.narration,
            lines,
        }
    }

    #[must_use]
    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    #[must_use]
    pub fn fx(&self) -> FxContext {
        self.fx
    }

    #[must_use]
    pub fn narration(&self) -> Option<&str> {
        self.narration.as_deref()
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The live debit/credit standing shown while editing.
    #[must_use]
    pub fn balance_report(&self) -> BalanceReport {
        balance(&self.lines)
    }

    /// Applies one editing event.
    ///
    /// The same non-editable rules as invoices apply: late rate quotes are
    /// discarded, everything else is rejected.
    pub fn apply(&mut self, event: VoucherEvent) -> Result<(), DocumentError> {
        if !self.status.is_editable() {
            if matches!(event, VoucherEvent::RateResolved(_)) {
                debug!(status = %self.status, "discarding rate quote for non-editable document");
                return Ok(());
            }
            return Err(DocumentError::NotEditable(self.status));
        }

        let fx = self.fx;
        match event {
            VoucherEvent::LineAdded => self.lines.push(Line::blank()),
            VoucherEvent::LineRemoved(line) => {
                let index = self.position(line)?;
                self.lines.remove(index);
                if self.lines.is_empty() {
                    self.lines.push(Line::blank());
                }
            }
            VoucherEvent::AccountEdited { line, account } => {
                self.line_mut(line)?.account = account;
            }
            VoucherEvent::DebitEdited { line, raw } => {
                let line = self.line_mut(line)?;
                line.debit = parse_side(&raw);
                line.mirror(fx);
            }
            VoucherEvent::CreditEdited { line, raw } => {
                let line = self.line_mut(line)?;
                line.credit = parse_side(&raw);
                line.mirror(fx);
            }
            VoucherEvent::DescriptionEdited { line, text } => {
                let line = self.line_mut(line)?;
                line.description = if text.is_empty() { None } else { Some(text) };
            }
            VoucherEvent::NarrationEdited { text } => {
                self.narration = if text.is_empty() { None } else { Some(text) };
            }
            VoucherEvent::CurrencyChanged { currency } => self.change_currency(currency),
            VoucherEvent::RateResolved(quote) => self.apply_quote(&quote),
            VoucherEvent::RateOverridden { raw } => self.override_rate(&raw),
            VoucherEvent::TemplateApplied(template) => self.apply_template(&template),
        }
        Ok(())
    }

    /// Finalizes the document into the target status and snapshots it.
    ///
    /// Submission is blocked unless every row validates and debits equal
    /// credits exactly.
    pub fn submit(&mut self, target: DocumentStatus) -> Result<VoucherPayload, VoucherError> {
        let status = transition(self.status, target)?;
        let report = validate_for_submit(&self.lines)?;

        let active: Vec<Line> = self
            .lines
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect();
        let debit_total_base: Decimal = active
            .iter()
            .map(|line| line.debit_base.unwrap_or(Decimal::ZERO))
            .sum();
        let credit_total_base: Decimal = active
            .iter()
            .map(|line| line.credit_base.unwrap_or(Decimal::ZERO))
            .sum();

        self.status = status;
        info!(document = %self.id, status = %self.status, "voucher submitted");

        let lines = (1u32..)
            .zip(active)
            .filter_map(|(seq_no, line)| {
                let account_id = line.account?;
                Some(VoucherLinePayload {
                    line_id: line.id,
                    seq_no,
                    account_id,
                    description: line.description,
                    debit: line.debit,
                    credit: line.credit,
                    debit_base: line.debit_base,
                    credit_base: line.credit_base,
                })
            })
            .collect();

        Ok(VoucherPayload {
            document_id: self.id,
            status: self.status,
            currency: self.currency.clone(),
            base_currency: self.profile.base_currency.clone(),
            exchange_rate: self.fx.effective(),
            exchange_rate_date: self.exchange_rate_date,
            narration: self.narration.clone(),
            debit_total: report.debit_total,
            credit_total: report.credit_total,
            debit_total_base,
            credit_total_base,
            lines,
        })
    }

    fn position(&self, line: LineId) -> Result<usize, DocumentError> {
        self.lines
            .iter()
            .position(|l| l.id == line)
            .ok_or(DocumentError::UnknownLine(line))
    }

    fn line_mut(&mut self, line: LineId) -> Result<&mut Line, DocumentError> {
        self.lines
            .iter_mut()
            .find(|l| l.id == line)
            .ok_or(DocumentError::UnknownLine(line))
    }

    fn change_currency(&mut self, currency: String) {
        self.currency = currency;
        let cross = self.currency != self.profile.base_currency;
        self.fx = FxContext::new(cross, self.fx.rate);
        self.manual_rate_override = false;
        self.remirror();
    }

    fn apply_quote(&mut self, quote: &RateQuote) {
        if !self.fx.cross_currency {
            debug!("discarding rate quote, document is in the base currency");
            return;
        }
        if self.manual_rate_override {
            debug!("discarding rate quote, manual override in force");
            return;
        }
        if !quote.is_for(&self.currency, &self.profile.base_currency) {
            debug!(
                quoted = %quote.from_currency,
                selected = %self.currency,
                "discarding stale rate quote"
            );
            return;
        }
        self.fx = FxContext::cross(quote.rate);
        self.remirror();
    }

    fn override_rate(&mut self, raw: &str) {
        self.manual_rate_override = true;
        self.fx = FxContext::new(self.fx.cross_currency, Amount::parse(raw).value());
        self.remirror();
    }

    fn apply_template(&mut self, template: &VoucherTemplate) {
        if let Some(currency) = &template.currency {
            self.currency.clone_from(currency);
        }
        let cross = self.currency != self.profile.base_currency;
        let rate = template.exchange_rate.unwrap_or(self.fx.rate);
        self.fx = FxContext::new(cross, rate);
        if template.narration.is_some() {
            self.narration.clone_from(&template.narration);
        }
        if !template.lines.is_empty() {
            self.lines = template.instantiate_lines(self.fx);
        } else {
            self.remirror();
        }
        debug!(template = %template.id, "applied voucher template");
    }

    fn remirror(&mut self) {
        let fx = self.fx;
        for line in &mut self.lines {
            line.mirror(fx);
        }
    }
}

/// Coerces one side of an entry: empty clears it, anything else parses
/// with the usual fallback to zero.
fn parse_side(raw: &str) -> Option<Decimal> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(Amount::parse(raw).value())
    }
}
