//! Purchase-invoice line items.
//!
//! This module implements the per-line calculation engine:
//! - Line types with transaction- and base-currency views
//! - Derived-field recomputation (discount before tax, fixed order)
//! - Catalog seeding when an item is picked
//! - Currency resynchronization anchored on the base-currency rate

pub mod calc;
pub mod catalog;
pub mod line;
pub mod resync;

#[cfg(test)]
mod props;

pub use calc::recompute;
pub use catalog::{CatalogLookup, PurchaseData, apply_selection};
pub use line::Line;
pub use resync::{resync, seed_base_rates, should_resync};
