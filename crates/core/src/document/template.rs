//! Voucher templates.
//!
//! A template is a one-shot seed: applying it copies its populated header
//! fields and replaces the document's entries, after which the document is
//! edited normally with no live link back to the template. The recurrence
//! payload is carried opaquely for schedulers and never interpreted here.

use ledgerline_shared::types::id::TemplateId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::FxContext;
use crate::voucher;

/// A saved journal-voucher template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherTemplate {
    pub id: TemplateId,
    pub name: String,
    /// Transaction currency to switch the document to, if set.
    pub currency: Option<String>,
    /// Exchange rate captured with the template, if set.
    pub exchange_rate: Option<Decimal>,
    pub narration: Option<String>,
    pub lines: Vec<voucher::Line>,
    /// Opaque recurrence schedule, passed through untouched.
    pub recurrence: Option<serde_json::Value>,
}

impl VoucherTemplate {
    /// Materializes the template's entries as fresh document rows.
    ///
    /// Every row gets a new identity and its base mirrors are refreshed
    /// under the rate in force, so two documents seeded from the same
    /// template never share line ids.
    #[must_use]
    pub fn instantiate_lines(&self, fx: FxContext) -> Vec<voucher::Line> {
        self.lines
            .iter()
            .map(|entry| {
                let mut line = entry.clone();
                line.id = ledgerline_shared::types::id::LineId::new();
                line.mirror(fx);
                line
            })
            .collect()
    }
}
