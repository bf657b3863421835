//! QuotationStatus enum for the drafting lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    #[default]
    Draft,
    Sent,
    Approved,
    Rejected,
}

impl QuotationStatus {
    /// Returns true if the quotation can still be freely edited.
    pub fn is_mutable(&self) -> bool {
        matches!(self, QuotationStatus::Draft)
    }

    /// Returns true if the quotation reached a terminal outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuotationStatus::Approved | QuotationStatus::Rejected)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Draft -> Sent
    /// - Sent -> Approved
    /// - Sent -> Rejected
    /// - Sent | Approved | Rejected -> Draft (re-opened as a new version)
    pub fn can_transition_to(&self, target: &QuotationStatus) -> bool {
        use QuotationStatus::*;
        matches!(
            (self, target),
            (Draft, Sent)
                | (Sent, Approved)
                | (Sent, Rejected)
                | (Sent, Draft)
                | (Approved, Draft)
                | (Rejected, Draft)
        )
    }
}

impl fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuotationStatus::Draft => "draft",
            QuotationStatus::Sent => "sent",
            QuotationStatus::Approved => "approved",
            QuotationStatus::Rejected => "rejected",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_draft() {
        assert_eq!(QuotationStatus::default(), QuotationStatus::Draft);
    }

    #[test]
    fn only_draft_is_mutable() {
        assert!(QuotationStatus::Draft.is_mutable());
        assert!(!QuotationStatus::Sent.is_mutable());
        assert!(!QuotationStatus::Approved.is_mutable());
        assert!(!QuotationStatus::Rejected.is_mutable());
    }

    #[test]
    fn approved_and_rejected_are_terminal() {
        assert!(QuotationStatus::Approved.is_terminal());
        assert!(QuotationStatus::Rejected.is_terminal());
        assert!(!QuotationStatus::Draft.is_terminal());
        assert!(!QuotationStatus::Sent.is_terminal());
    }

    #[test]
    fn draft_can_only_move_to_sent() {
        assert!(QuotationStatus::Draft.can_transition_to(&QuotationStatus::Sent));
        assert!(!QuotationStatus::Draft.can_transition_to(&QuotationStatus::Approved));
        assert!(!QuotationStatus::Draft.can_transition_to(&QuotationStatus::Rejected));
    }

    #[test]
    fn sent_can_resolve_or_reopen() {
        assert!(QuotationStatus::Sent.can_transition_to(&QuotationStatus::Approved));
        assert!(QuotationStatus::Sent.can_transition_to(&QuotationStatus::Rejected));
        assert!(QuotationStatus::Sent.can_transition_to(&QuotationStatus::Draft));
    }

    #[test]
    fn terminal_states_can_reopen_as_draft() {
        assert!(QuotationStatus::Approved.can_transition_to(&QuotationStatus::Draft));
        assert!(QuotationStatus::Rejected.can_transition_to(&QuotationStatus::Draft));
        assert!(!QuotationStatus::Approved.can_transition_to(&QuotationStatus::Sent));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&QuotationStatus::Sent).unwrap();
        assert_eq!(json, "\"sent\"");
    }
}
