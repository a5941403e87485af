// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The listing approval workflow.
//!
//! A request resolves exactly once: `pending → approved` opens the listing
//! for bookings, `pending → rejected` records the reason and leaves it
//! closed. Resolving an already-terminal request is a conflict; the caller
//! must apply the outcome's request update, listing flag, and notification
//! atomically.

use campstay_domain::{
    ApprovalRequest, Listing, NewNotification, RequestStatus, validate_rejection_reason,
};

use crate::error::CoreError;
use crate::notify::{request_approved_notice, request_rejected_notice};

/// The result of resolving an approval request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalOutcome {
    /// The request with its terminal status applied.
    pub request: ApprovalRequest,
    /// The value to write to the listing's `is_approved` flag.
    pub listing_approved: bool,
    /// The owner-facing notification to persist.
    pub owner_notice: NewNotification,
}

/// Approves a pending request, opening its listing for bookings.
///
/// # Arguments
///
/// * `request` - The request to approve
/// * `listing` - The listing the request belongs to
///
/// # Errors
///
/// Returns an error if the request has already been resolved.
pub fn approve_request(
    request: &ApprovalRequest,
    listing: &Listing,
) -> Result<ApprovalOutcome, CoreError> {
    request.ensure_open()?;
    request
        .status
        .validate_transition(RequestStatus::Approved)?;

    let mut approved: ApprovalRequest = request.clone();
    approved.status = RequestStatus::Approved;

    let owner_notice: NewNotification = request_approved_notice(request, &listing.title);

    Ok(ApprovalOutcome {
        request: approved,
        listing_approved: true,
        owner_notice,
    })
}

/// Rejects a pending request with a reason, leaving its listing closed.
///
/// The reason is stored on the request and included verbatim in the
/// owner-facing notice.
///
/// # Arguments
///
/// * `request` - The request to reject
/// * `listing` - The listing the request belongs to
/// * `reason` - The administrator's reason; must be non-empty
///
/// # Errors
///
/// Returns an error if:
/// - The reason is empty or whitespace-only
/// - The request has already been resolved
pub fn reject_request(
    request: &ApprovalRequest,
    listing: &Listing,
    reason: &str,
) -> Result<ApprovalOutcome, CoreError> {
    validate_rejection_reason(reason)?;
    request.ensure_open()?;
    request
        .status
        .validate_transition(RequestStatus::Rejected)?;

    let mut rejected: ApprovalRequest = request.clone();
    rejected.status = RequestStatus::Rejected;
    rejected.rejection_reason = Some(reason.to_string());

    let owner_notice: NewNotification = request_rejected_notice(request, &listing.title, reason);

    Ok(ApprovalOutcome {
        request: rejected,
        listing_approved: false,
        owner_notice,
    })
}
