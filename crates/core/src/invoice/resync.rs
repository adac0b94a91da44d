//! Currency resynchronization.
//!
//! When the document's currency or exchange rate changes, every priced line
//! is re-expressed in the new transaction currency. The base-currency unit
//! price (`rate_base`) is the anchor: the new rate is always derived from
//! it, never from the previous transaction rate, so any sequence of
//! currency toggles is lossless.

use tracing::debug;

use rust_decimal::Decimal;

use crate::currency::{FxContext, round3};

use super::line::Line;

/// Whether a currency or rate change warrants a resynchronization pass.
///
/// Fires only when the context actually changed and at least one priced
/// line would be affected. Skipping the pass on an all-blank document keeps
/// a currency flip from disturbing untouched rows.
#[must_use]
pub fn should_resync(prev: FxContext, next: FxContext, lines: &[Line]) -> bool {
    if prev == next {
        return false;
    }
    lines
        .iter()
        .any(|line| line.has_selection() && line.rate > Decimal::ZERO)
}

/// Re-expresses every priced line under the new exchange-rate context.
///
/// For each line with a selection, the base-currency anchor is read (or
/// reconstructed from the previous context when missing), the transaction
/// rate is derived from it, all figures are recomputed, and the anchor is
/// written back so the next resync starts from the same base price.
pub fn resync(lines: &mut [Line], prev: FxContext, next: FxContext, has_tax_config: bool) {
    let mut touched = 0usize;
    for line in lines.iter_mut() {
        if !line.has_selection() {
            continue;
        }
        let anchor = line
            .rate_base
            .unwrap_or_else(|| line.rate * prev.effective());
        line.rate = if next.cross_currency {
            round3(anchor / next.effective())
        } else {
            round3(anchor)
        };
        super::calc::recompute(line, next, has_tax_config);
        line.rate_base = Some(anchor);
        touched += 1;
    }
    debug!(
        lines = touched,
        rate = %next.effective(),
        cross_currency = next.cross_currency,
        "resynchronized lines to new exchange-rate context"
    );
}

/// Backfills missing base-rate anchors from the context in force.
///
/// Documents loaded for editing may predate anchor tracking; their anchors
/// are reconstructed once so a later currency change behaves as if the
/// anchor had always been there.
pub fn seed_base_rates(lines: &mut [Line], fx: FxContext) {
    for line in lines.iter_mut() {
        if line.has_selection() && line.rate_base.is_none() {
            line.rate_base = Some(line.rate * fx.effective());
        }
    }
}
