// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification content production.
//!
//! The emitter only builds [`NewNotification`] values; storing and
//! delivering them is the caller's concern. Content strings are the
//! user-visible contract: the rejection notice must carry the
//! administrator's reason verbatim.

use campstay_domain::{
    ApprovalRequest, Listing, NewNotification, display_amount,
};
use rust_decimal::Decimal;
use time::Date;

use crate::booking::BookingRequest;

/// Builds the owner-facing notice for a freshly created booking.
///
/// The notice summarizes the guest, the listing, the party size, the date
/// range, and the computed amount (rounded for presentation).
#[must_use]
pub fn booking_created_notice(
    listing: &Listing,
    request: &BookingRequest,
    nights: i64,
    amount: Decimal,
) -> NewNotification {
    let check_in: Date = request.check_in;
    let check_out: Date = request.check_out;
    let content: String = format!(
        "New booking: {guest} booked {title} for {count} guest(s), {check_in} to {check_out} ({nights} night(s), {amount} total)",
        guest = request.guest_name,
        title = listing.title,
        count = request.guest_count,
        amount = display_amount(amount),
    );

    NewNotification {
        recipient_id: listing.owner_id,
        content,
    }
}

/// Builds the owner-facing notice for an approved listing request.
#[must_use]
pub fn request_approved_notice(request: &ApprovalRequest, listing_title: &str) -> NewNotification {
    NewNotification {
        recipient_id: request.requested_by,
        content: format!(
            "Your campground '{listing_title}' has been approved and is now open for bookings"
        ),
    }
}

/// Builds the owner-facing notice for a rejected listing request.
///
/// The administrator's reason is included verbatim.
#[must_use]
pub fn request_rejected_notice(
    request: &ApprovalRequest,
    listing_title: &str,
    reason: &str,
) -> NewNotification {
    NewNotification {
        recipient_id: request.requested_by,
        content: format!("Your campground '{listing_title}' was rejected: {reason}"),
    }
}
