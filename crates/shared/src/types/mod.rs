//! Common types used across the application.

pub mod amount;
pub mod id;

pub use amount::{Amount, Percent};
pub use id::*;
