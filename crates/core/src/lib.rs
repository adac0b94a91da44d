//! Core calculation engine for Ledgerline.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, derived-field calculations, and validation rules live here.
//!
//! # Modules
//!
//! - `currency` - Effective exchange rates and base-currency conversion
//! - `invoice` - Purchase-invoice lines: calculation, catalog seeding, resync
//! - `voucher` - Journal-voucher lines and the debit/credit balance invariant
//! - `document` - Document status machine, totals, templates, submit payloads
//! - `session` - Event-driven editing sessions driving the engine

pub mod currency;
pub mod document;
pub mod invoice;
pub mod session;
pub mod voucher;
