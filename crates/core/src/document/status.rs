//! Document approval state machine.
//!
//! CRITICAL: Transition rules:
//! - Draft -> PendingApproval or Approved (direct approval is allowed)
//! - PendingApproval -> Approved or Rejected
//! - Rejected -> Draft (manual reopen, never automatic)
//! - Approved is terminal
//!
//! Only Draft documents are editable. A Draft -> Draft "transition" is
//! permitted so saving a draft reuses the same path as submission.

use serde::{Deserialize, Serialize};

use super::error::DocumentError;

/// Lifecycle state of a financial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    PendingApproval,
    Approved,
    Rejected,
}

impl DocumentStatus {
    /// Stable string form used in payloads and audit records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses the stable string form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "pending_approval" => Some(Self::PendingApproval),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether documents in this state accept edits.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the state machine permits the given move.
#[must_use]
pub fn is_valid_transition(from: DocumentStatus, to: DocumentStatus) -> bool {
    use DocumentStatus::{Approved, Draft, PendingApproval, Rejected};
    matches!(
        (from, to),
        (Draft, Draft)
            | (Draft, PendingApproval)
            | (Draft, Approved)
            | (PendingApproval, Approved)
            | (PendingApproval, Rejected)
            | (Rejected, Draft)
    )
}

/// Performs a transition, rejecting moves the state machine forbids.
pub fn transition(
    from: DocumentStatus,
    to: DocumentStatus,
) -> Result<DocumentStatus, DocumentError> {
    if is_valid_transition(from, to) {
        Ok(to)
    } else {
        Err(DocumentError::InvalidTransition { from, to })
    }
}
