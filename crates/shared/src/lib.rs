//! Shared types and configuration for Ledgerline.
//!
//! This crate provides common types used across all other crates:
//! - The `Amount` and `Percent` coercion types for raw numeric entry
//! - Typed IDs for type-safe entity references
//! - Tenant profile configuration (base currency, tax setup)

pub mod config;
pub mod types;

pub use config::TenantProfile;
pub use types::{Amount, Percent};
