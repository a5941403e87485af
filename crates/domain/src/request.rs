// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Approval request status tracking and transition logic.
//!
//! Every listing opens exactly one approval request at creation time. The
//! request starts `pending` and transitions exactly once, by administrator
//! action, to `approved` or `rejected`. Both outcomes are terminal; a second
//! resolution attempt is a conflict, never a silent no-op.

use crate::error::DomainError;
use crate::types::{ListingId, RequestId, UserId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The lifecycle status of a listing's approval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting an administrator decision.
    #[default]
    Pending,
    /// Approved; the listing is open for bookings.
    Approved,
    /// Rejected with a reason; the listing stays closed.
    Rejected,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true if this status is terminal (cannot transition again).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Validates that a transition from this status to another is permitted.
    ///
    /// The only permitted transitions are `pending → approved` and
    /// `pending → rejected`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not allowed. Terminal-state violations are reported by the caller as
    /// [`DomainError::RequestAlreadyResolved`] so the conflict carries the
    /// request identity; this method only rules on the status pair.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        let valid: bool = matches!(
            (self, new_status),
            (Self::Pending, Self::Approved | Self::Rejected)
        );

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
            })
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An approval request for a listing.
///
/// A listing has at most one open request at a time; in the current design
/// it has exactly one request over its whole life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    /// The request's identifier.
    pub request_id: RequestId,
    /// The listing this request belongs to.
    pub listing_id: ListingId,
    /// The user who submitted the listing.
    pub requested_by: UserId,
    /// The current lifecycle status.
    pub status: RequestStatus,
    /// The rejection reason; set only when `status` is `rejected`.
    pub rejection_reason: Option<String>,
}

impl ApprovalRequest {
    /// Guards against resolving a request that is already terminal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RequestAlreadyResolved` if the request has
    /// already been approved or rejected.
    pub fn ensure_open(&self) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::RequestAlreadyResolved {
                request_id: self.request_id,
                status: self.status.as_str().to_string(),
            });
        }
        Ok(())
    }
}

/// An approval request before it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApprovalRequest {
    /// The listing this request belongs to.
    pub listing_id: ListingId,
    /// The user who submitted the listing.
    pub requested_by: UserId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn make_request(status: RequestStatus) -> ApprovalRequest {
        ApprovalRequest {
            request_id: RequestId::new(1),
            listing_id: ListingId::new(10),
            requested_by: UserId::new(100),
            status,
            rejection_reason: None,
        }
    }

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
        ];

        for status in statuses {
            let s = status.as_str();
            match RequestStatus::from_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = RequestStatus::from_str("withdrawn");
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_valid_transitions_from_pending() {
        let current = RequestStatus::Pending;

        assert!(current.validate_transition(RequestStatus::Approved).is_ok());
        assert!(current.validate_transition(RequestStatus::Rejected).is_ok());
    }

    #[test]
    fn test_no_transition_back_to_pending() {
        assert!(
            RequestStatus::Pending
                .validate_transition(RequestStatus::Pending)
                .is_err()
        );
        assert!(
            RequestStatus::Approved
                .validate_transition(RequestStatus::Pending)
                .is_err()
        );
        assert!(
            RequestStatus::Rejected
                .validate_transition(RequestStatus::Pending)
                .is_err()
        );
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        let terminal_states = vec![RequestStatus::Approved, RequestStatus::Rejected];

        for terminal in terminal_states {
            assert!(
                terminal
                    .validate_transition(RequestStatus::Approved)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(RequestStatus::Rejected)
                    .is_err()
            );
        }
    }

    #[test]
    fn test_ensure_open_on_pending_request() {
        let request = make_request(RequestStatus::Pending);
        assert!(request.ensure_open().is_ok());
    }

    #[test]
    fn test_ensure_open_on_resolved_request() {
        for status in [RequestStatus::Approved, RequestStatus::Rejected] {
            let request = make_request(status);
            let err = request.ensure_open().unwrap_err();
            assert!(matches!(err, DomainError::RequestAlreadyResolved { .. }));
        }
    }
}
