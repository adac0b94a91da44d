//! Document-level errors.

use ledgerline_shared::types::id::{ItemId, LineId};
use thiserror::Error;

use super::status::DocumentStatus;

/// Errors raised by document editing and submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The document is past Draft and no longer accepts edits.
    #[error("document is {0} and cannot be edited")]
    NotEditable(DocumentStatus),

    /// The requested status change is not permitted.
    #[error("cannot move document from {from} to {to}")]
    InvalidTransition {
        from: DocumentStatus,
        to: DocumentStatus,
    },

    /// The referenced line does not exist on this document.
    #[error("line {0} not found")]
    UnknownLine(LineId),

    /// The referenced item does not exist in the catalog.
    #[error("item {0} not found in catalog")]
    UnknownItem(ItemId),

    /// Submission requires at least one completed line.
    #[error("document has no completed lines")]
    EmptyDocument,

    /// A completed line cannot be submitted with zero quantity.
    #[error("line {0} has zero quantity")]
    ZeroQuantity(LineId),
}
