//! Effective exchange rates and base-currency conversion.

pub mod convert;
pub mod provider;

#[cfg(test)]
mod props;

pub use convert::{FxContext, round3, to_base};
pub use provider::{RateProvider, RateQuote};
