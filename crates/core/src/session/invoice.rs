//! Purchase-invoice editing session.

use chrono::NaiveDate;
use ledgerline_shared::TenantProfile;
use ledgerline_shared::types::amount::{Amount, Percent};
use ledgerline_shared::types::id::{DocumentId, ItemId, LineId};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::currency::{FxContext, RateQuote};
use crate::document::{
    DocumentError, DocumentStatus, InvoiceLinePayload, InvoicePayload, Totals, aggregate,
    transition,
};
use crate::invoice::{
    CatalogLookup, Line, apply_selection, recompute, resync, seed_base_rates, should_resync,
};

use super::event::InvoiceEvent;

/// A previously saved invoice being reopened for editing.
#[derive(Debug, Clone)]
pub struct SavedInvoice {
    pub id: DocumentId,
    pub currency: String,
    pub exchange_rate: Decimal,
    pub exchange_rate_date: NaiveDate,
    pub status: DocumentStatus,
    pub lines: Vec<Line>,
    pub adjustment: Decimal,
    pub pending_amount: Option<Decimal>,
    pub pending_amount_base: Option<Decimal>,
}

/// One purchase invoice under edit.
///
/// Every event application leaves the document fully consistent: all
/// derived line fields and header totals are rebuilt before control
/// returns to the caller.
#[derive(Debug, Clone)]
pub struct InvoiceSession {
    pub id: DocumentId,
    profile: TenantProfile,
    currency: String,
    fx: FxContext,
    /// True once the user typed a rate by hand; fetched quotes are then
    /// ignored until the currency changes again.
    manual_rate_override: bool,
    exchange_rate_date: NaiveDate,
    status: DocumentStatus,
    lines: Vec<Line>,
    adjustment: Decimal,
    totals: Totals,
    pending: Option<(Decimal, Decimal)>,
}

impl InvoiceSession {
    /// Starts a new draft in the given transaction currency.
    #[must_use]
    pub fn create(profile: TenantProfile, currency: String, today: NaiveDate) -> Self {
        let cross = currency != profile.base_currency;
        let fx = FxContext::new(cross, Decimal::ONE);
        let has_tax = profile.has_tax_config();
        let lines = vec![Line::blank()];
        let totals = aggregate(&lines, Decimal::ZERO, fx, has_tax);
        Self {
            id: DocumentId::new(),
            profile,
            currency,
            fx,
            manual_rate_override: false,
            exchange_rate_date: today,
            status: DocumentStatus::Draft,
            lines,
            adjustment: Decimal::ZERO,
            totals,
            pending: None,
        }
    }

    /// Reopens a saved invoice.
    ///
    /// Lines saved before base-rate tracking get their anchors backfilled
    /// from the stored rate, and totals are rebuilt from scratch.
    #[must_use]
    pub fn load(profile: TenantProfile, saved: SavedInvoice) -> Self {
        let cross = saved.currency != profile.base_currency;
        let fx = FxContext::new(cross, saved.exchange_rate);
        let has_tax = profile.has_tax_config();
        let mut lines = saved.lines;
        seed_base_rates(&mut lines, fx);
        if lines.is_empty() {
            lines.push(Line::blank());
        }
        let totals = aggregate(&lines, saved.adjustment, fx, has_tax);
        let pending = match (saved.pending_amount, saved.pending_amount_base) {
            (Some(amount), Some(base)) => Some((amount, base)),
            (Some(amount), None) => Some((amount, amount)),
            _ => None,
        };
        Self {
            id: saved.id,
            profile,
            currency: saved.currency,
            fx,
            manual_rate_override: false,
            exchange_rate_date: saved.exchange_rate_date,
            status: saved.status,
            lines,
            adjustment: saved.adjustment,
            totals,
            pending,
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
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Applies one editing event.
    ///
    /// Rate quotes arriving for a non-editable document are discarded
    /// silently because the fetch was issued while editing was still
    /// possible; every other event on a non-draft document is an error.
    pub fn apply(&mut self, event: InvoiceEvent) -> Result<(), DocumentError> {
        if !self.status.is_editable() {
            if matches!(event, InvoiceEvent::RateResolved(_)) {
                debug!(status = %self.status, "discarding rate quote for non-editable document");
                return Ok(());
            }
            return Err(DocumentError::NotEditable(self.status));
        }

        let fx = self.fx;
        let has_tax = self.profile.has_tax_config();
        match event {
            InvoiceEvent::LineAdded => self.lines.push(Line::blank()),
            InvoiceEvent::LineRemoved(line) => {
                let index = self.position(line)?;
                self.lines.remove(index);
                if self.lines.is_empty() {
                    self.lines.push(Line::blank());
                }
            }
            InvoiceEvent::QuantityEdited { line, raw } => {
                let line = self.line_mut(line)?;
                line.quantity = Amount::parse(&raw).value();
                recompute(line, fx, has_tax);
            }
            InvoiceEvent::RateEdited { line, raw } => {
                let line = self.line_mut(line)?;
                line.rate = Amount::parse(&raw).value();
                recompute(line, fx, has_tax);
            }
            InvoiceEvent::DiscountEdited { line, raw } => {
                let line = self.line_mut(line)?;
                line.discount_percent = Percent::parse(&raw).value();
                recompute(line, fx, has_tax);
            }
            InvoiceEvent::DescriptionEdited { line, text } => {
                let line = self.line_mut(line)?;
                line.description = if text.is_empty() { None } else { Some(text) };
            }
            InvoiceEvent::ItemSelected { line, item, data } => {
                let line = self.line_mut(line)?;
                apply_selection(line, item, &data, fx, has_tax);
            }
            InvoiceEvent::AdjustmentEdited { raw } => {
                self.adjustment = parse_signed(&raw);
            }
            InvoiceEvent::CurrencyChanged { currency } => self.change_currency(currency),
            InvoiceEvent::RateResolved(quote) => self.apply_quote(&quote),
            InvoiceEvent::RateOverridden { raw } => self.override_rate(&raw),
        }

        self.totals = aggregate(&self.lines, self.adjustment, self.fx, has_tax);
        Ok(())
    }

    /// Looks an item up in the catalog and applies it to a row.
    pub fn select_item(
        &mut self,
        line: LineId,
        item: ItemId,
        catalog: &impl CatalogLookup,
    ) -> Result<(), DocumentError> {
        let data = catalog
            .purchase_data(item)
            .ok_or(DocumentError::UnknownItem(item))?;
        self.apply(InvoiceEvent::ItemSelected { line, item, data })
    }

    /// Finalizes the document into the target status and snapshots it.
    ///
    /// Placeholder rows never reach the payload. Completed rows must carry
    /// a nonzero quantity. The pending amount carries over from a reopened
    /// document, otherwise it starts at the net total.
    pub fn submit(&mut self, target: DocumentStatus) -> Result<InvoicePayload, DocumentError> {
        let status = transition(self.status, target)?;

        let selected: Vec<Line> = self
            .lines
            .iter()
            .filter(|line| line.has_selection())
            .cloned()
            .collect();
        if selected.is_empty() {
            return Err(DocumentError::EmptyDocument);
        }
        if let Some(line) = selected.iter().find(|line| line.quantity.is_zero()) {
            return Err(DocumentError::ZeroQuantity(line.id));
        }

        let has_tax = self.profile.has_tax_config();
        self.totals = aggregate(&self.lines, self.adjustment, self.fx, has_tax);
        let (pending_amount, pending_amount_base) = self
            .pending
            .unwrap_or((self.totals.net_total, self.totals.net_total_base));

        self.status = status;
        info!(document = %self.id, status = %self.status, "invoice submitted");

        let lines = (1u32..)
            .zip(selected)
            .filter_map(|(seq_no, line)| {
                let item_id = line.item?;
                Some(InvoiceLinePayload {
                    line_id: line.id,
                    seq_no,
                    item_id,
                    description: line.description,
                    account_id: line.account,
                    unit_id: line.unit,
                    tax_category_id: line.tax_category,
                    quantity: line.quantity,
                    rate: line.rate,
                    discount_percent: line.discount_percent,
                    tax_percent: line.tax_percent,
                    discount_amount: line.discount_amount,
                    taxable_amount: line.taxable_amount,
                    tax_amount: line.tax_amount,
                    net_amount: line.net_amount,
                    rate_base: line.rate_base,
                    discount_amount_base: line.discount_amount_base,
                    taxable_amount_base: line.taxable_amount_base,
                    tax_amount_base: line.tax_amount_base,
                    net_amount_base: line.net_amount_base,
                })
            })
            .collect();

        Ok(InvoicePayload {
            document_id: self.id,
            status: self.status,
            currency: self.currency.clone(),
            base_currency: self.profile.base_currency.clone(),
            exchange_rate: self.fx.effective(),
            exchange_rate_date: self.exchange_rate_date,
            totals: self.totals,
            pending_amount,
            pending_amount_base,
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
        let prev = self.fx;
        self.currency = currency;
        let cross = self.currency != self.profile.base_currency;
        let next = FxContext::new(cross, prev.rate);
        self.manual_rate_override = false;
        if should_resync(prev, next, &self.lines) {
            resync(&mut self.lines, prev, next, self.profile.has_tax_config());
        } else {
            debug!("currency change needed no line resync");
        }
        self.fx = next;
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
        let prev = self.fx;
        let next = FxContext::cross(quote.rate);
        if should_resync(prev, next, &self.lines) {
            resync(&mut self.lines, prev, next, self.profile.has_tax_config());
        }
        self.fx = next;
    }

    fn override_rate(&mut self, raw: &str) {
        self.manual_rate_override = true;
        let prev = self.fx;
        let next = FxContext::new(prev.cross_currency, Amount::parse(raw).value());
        if should_resync(prev, next, &self.lines) {
            resync(&mut self.lines, prev, next, self.profile.has_tax_config());
        }
        self.fx = next;
    }
}

/// Coerces raw text to a signed amount, falling back to zero.
///
/// Unlike line inputs the header adjustment may legitimately be negative.
fn parse_signed(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::PurchaseData;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn base_session() -> InvoiceSession {
        InvoiceSession::create(TenantProfile::without_tax("USD"), "USD".to_string(), today())
    }

    fn cross_session() -> InvoiceSession {
        InvoiceSession::create(TenantProfile::without_tax("INR"), "USD".to_string(), today())
    }

    fn priced(session: &mut InvoiceSession, rate: &str, qty: &str) -> LineId {
        let line = session.lines()[0].id;
        session
            .apply(InvoiceEvent::ItemSelected {
                line,
                item: ItemId::new(),
                data: PurchaseData::default(),
            })
            .unwrap();
        session
            .apply(InvoiceEvent::RateEdited {
                line,
                raw: rate.to_string(),
            })
            .unwrap();
        session
            .apply(InvoiceEvent::QuantityEdited {
                line,
                raw: qty.to_string(),
            })
            .unwrap();
        line
    }

    struct FixedCatalog(HashMap<ItemId, PurchaseData>);

    impl CatalogLookup for FixedCatalog {
        fn purchase_data(&self, item: ItemId) -> Option<PurchaseData> {
            self.0.get(&item).cloned()
        }
    }

    #[test]
    fn test_create_seeds_one_blank_draft_line() {
        let session = base_session();
        assert_eq!(session.status(), DocumentStatus::Draft);
        assert_eq!(session.lines().len(), 1);
        assert!(!session.lines()[0].has_selection());
    }

    #[test]
    fn test_garbage_input_coerces_to_zero() {
        let mut session = base_session();
        let line = priced(&mut session, "100", "2");
        session
            .apply(InvoiceEvent::QuantityEdited {
                line,
                raw: "abc".to_string(),
            })
            .unwrap();
        assert_eq!(session.lines()[0].quantity, Decimal::ZERO);
        assert_eq!(session.totals().net_total, Decimal::ZERO);
    }

    #[test]
    fn test_totals_follow_line_edits() {
        let mut session = base_session();
        priced(&mut session, "250", "4");
        assert_eq!(session.totals().net_total, dec!(1000));
        assert_eq!(session.totals().net_total_base, dec!(1000));
    }

    #[test]
    fn test_non_draft_rejects_edits_but_swallows_quotes() {
        let mut session = base_session();
        priced(&mut session, "100", "1");
        session.submit(DocumentStatus::Approved).unwrap();

        let err = session.apply(InvoiceEvent::LineAdded).unwrap_err();
        assert_eq!(err, DocumentError::NotEditable(DocumentStatus::Approved));

        let quote = RateQuote {
            rate: dec!(80),
            from_currency: "USD".to_string(),
            to_currency: "INR".to_string(),
        };
        assert!(session.apply(InvoiceEvent::RateResolved(quote)).is_ok());
    }

    #[test]
    fn test_stale_quote_discarded() {
        let mut session = cross_session();
        priced(&mut session, "100", "1");
        // Quote fetched for EUR while the document now holds USD.
        let quote = RateQuote {
            rate: dec!(90),
            from_currency: "EUR".to_string(),
            to_currency: "INR".to_string(),
        };
        session.apply(InvoiceEvent::RateResolved(quote)).unwrap();
        assert_eq!(session.fx().rate, Decimal::ONE);
    }

    #[test]
    fn test_matching_quote_applies_and_resyncs() {
        let mut session = cross_session();
        priced(&mut session, "100", "2");
        let quote = RateQuote {
            rate: dec!(80),
            from_currency: "USD".to_string(),
            to_currency: "INR".to_string(),
        };
        session.apply(InvoiceEvent::RateResolved(quote)).unwrap();

        assert_eq!(session.fx().rate, dec!(80));
        // anchor was 100 (rate * old fx 1), new rate = 100 / 80
        assert_eq!(session.lines()[0].rate, dec!(1.25));
        assert_eq!(session.totals().net_total_base, dec!(200));
    }

    #[test]
    fn test_manual_override_blocks_later_quotes() {
        let mut session = cross_session();
        priced(&mut session, "100", "1");
        session
            .apply(InvoiceEvent::RateOverridden {
                raw: "75".to_string(),
            })
            .unwrap();
        assert_eq!(session.fx().rate, dec!(75));

        let quote = RateQuote {
            rate: dec!(80),
            from_currency: "USD".to_string(),
            to_currency: "INR".to_string(),
        };
        session.apply(InvoiceEvent::RateResolved(quote)).unwrap();
        assert_eq!(session.fx().rate, dec!(75));
    }

    #[test]
    fn test_currency_toggle_round_trip_preserves_rate() {
        let mut session = cross_session();
        // Base currency INR, document in INR first.
        session
            .apply(InvoiceEvent::CurrencyChanged {
                currency: "INR".to_string(),
            })
            .unwrap();
        let line = priced(&mut session, "100", "2");

        session
            .apply(InvoiceEvent::CurrencyChanged {
                currency: "USD".to_string(),
            })
            .unwrap();
        session
            .apply(InvoiceEvent::RateOverridden {
                raw: "80".to_string(),
            })
            .unwrap();
        assert_eq!(session.lines()[0].rate, dec!(1.25));

        session
            .apply(InvoiceEvent::CurrencyChanged {
                currency: "INR".to_string(),
            })
            .unwrap();
        let restored = session.lines().iter().find(|l| l.id == line).unwrap();
        assert_eq!(restored.rate, dec!(100));
    }

    #[test]
    fn test_select_item_from_catalog() {
        let mut session = base_session();
        let item = ItemId::new();
        let catalog = FixedCatalog(HashMap::from([(
            item,
            PurchaseData {
                cost_price: dec!(40),
                ..PurchaseData::default()
            },
        )]));
        let line = session.lines()[0].id;

        session.select_item(line, item, &catalog).unwrap();
        assert_eq!(session.lines()[0].rate, dec!(40));
        assert_eq!(session.totals().net_total, dec!(40));

        let missing = ItemId::new();
        assert_eq!(
            session.select_item(line, missing, &catalog).unwrap_err(),
            DocumentError::UnknownItem(missing)
        );
    }

    #[test]
    fn test_submit_snapshot_excludes_placeholders() {
        let mut session = base_session();
        priced(&mut session, "100", "2");
        session.apply(InvoiceEvent::LineAdded).unwrap();

        let payload = session.submit(DocumentStatus::PendingApproval).unwrap();
        assert_eq!(payload.lines.len(), 1);
        assert_eq!(payload.lines[0].seq_no, 1);
        assert_eq!(payload.status, DocumentStatus::PendingApproval);
        assert_eq!(payload.pending_amount, dec!(200));
        assert_eq!(payload.exchange_rate_date, today());
    }

    #[test]
    fn test_submit_requires_a_completed_line() {
        let mut session = base_session();
        assert_eq!(
            session.submit(DocumentStatus::Approved).unwrap_err(),
            DocumentError::EmptyDocument
        );
    }

    #[test]
    fn test_submit_rejects_zero_quantity() {
        let mut session = base_session();
        let line = priced(&mut session, "100", "0");
        assert_eq!(
            session.submit(DocumentStatus::Approved).unwrap_err(),
            DocumentError::ZeroQuantity(line)
        );
    }

    #[test]
    fn test_submit_rejects_invalid_transition() {
        let mut session = base_session();
        priced(&mut session, "100", "1");
        session.submit(DocumentStatus::Approved).unwrap();

        let err = session.submit(DocumentStatus::PendingApproval).unwrap_err();
        assert_eq!(
            err,
            DocumentError::InvalidTransition {
                from: DocumentStatus::Approved,
                to: DocumentStatus::PendingApproval,
            }
        );
    }

    #[test]
    fn test_reopened_invoice_preserves_pending_amount() {
        let mut session = base_session();
        priced(&mut session, "100", "3");
        let first = session.submit(DocumentStatus::Approved).unwrap();
        assert_eq!(first.pending_amount, dec!(300));

        let saved = SavedInvoice {
            id: session.id,
            currency: "USD".to_string(),
            exchange_rate: Decimal::ONE,
            exchange_rate_date: today(),
            status: DocumentStatus::Draft,
            lines: session.lines().to_vec(),
            adjustment: Decimal::ZERO,
            pending_amount: Some(dec!(120)),
            pending_amount_base: Some(dec!(120)),
        };
        let mut reopened = InvoiceSession::load(TenantProfile::without_tax("USD"), saved);
        let payload = reopened.submit(DocumentStatus::Approved).unwrap();
        assert_eq!(payload.pending_amount, dec!(120));
    }

    #[test]
    fn test_load_backfills_base_rate_anchors() {
        let mut line = Line::blank();
        line.item = Some(ItemId::new());
        line.quantity = dec!(1);
        line.rate = dec!(5);
        line.rate_base = None;
        let saved = SavedInvoice {
            id: DocumentId::new(),
            currency: "USD".to_string(),
            exchange_rate: dec!(20),
            exchange_rate_date: today(),
            status: DocumentStatus::Draft,
            lines: vec![line],
            adjustment: Decimal::ZERO,
            pending_amount: None,
            pending_amount_base: None,
        };
        let session = InvoiceSession::load(TenantProfile::without_tax("INR"), saved);
        assert_eq!(session.lines()[0].rate_base, Some(dec!(100)));
    }
}
