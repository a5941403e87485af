// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking creation and cancellation.
//!
//! Operations here are pure: they take a snapshot of the listing and its
//! existing bookings and produce the records to persist. The caller must
//! hold the snapshot and the subsequent writes inside one transaction so a
//! concurrent overlapping booking cannot slip between check and insert.

use campstay_domain::{
    Booking, DomainError, Listing, ListingId, NewBooking, NewNotification, UserId,
    booking_amount, stay_nights, validate_booking_window, validate_guest_count,
};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};

use crate::error::CoreError;
use crate::notify::booking_created_notice;

/// A guest's request to book a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The guest making the booking.
    pub guest_id: UserId,
    /// The guest's display name, supplied by the identity collaborator.
    /// Used only for the owner-facing notice.
    pub guest_name: String,
    /// The listing to book.
    pub listing_id: ListingId,
    /// Check-in date (inclusive).
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Number of guests.
    pub guest_count: u32,
}

/// The result of a successful booking validation.
///
/// Creation is atomic from the caller's perspective: either both records
/// are persisted or neither is.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCreated {
    /// The booking record to persist.
    pub booking: NewBooking,
    /// The owner-facing notification to persist. Exactly one per booking.
    pub owner_notice: NewNotification,
}

/// Returns true if two half-open date ranges `[a_in, a_out)` and
/// `[b_in, b_out)` overlap.
#[must_use]
pub fn dates_overlap(a_in: Date, a_out: Date, b_in: Date, b_out: Date) -> bool {
    a_in < b_out && b_in < a_out
}

/// Validates a booking request against a listing and its existing bookings.
///
/// Validation order: listing open for bookings, owner exclusion, guest
/// count, date range, then date-range exclusion against every existing
/// non-cancelled booking. The computed amount is
/// `nights x nightly rate x 1.18`.
///
/// # Arguments
///
/// * `listing` - The listing being booked
/// * `existing` - All bookings on the listing, cancelled ones included
/// * `request` - The guest's booking request
/// * `created_at` - The creation timestamp to stamp on the booking
///
/// # Errors
///
/// Returns an error if:
/// - The listing is not approved for bookings
/// - The guest is the listing's owner
/// - The guest count is zero or exceeds the listing's capacity
/// - The check-out date is not strictly after the check-in date
/// - The requested range overlaps an existing non-cancelled booking
pub fn create_booking(
    listing: &Listing,
    existing: &[Booking],
    request: &BookingRequest,
    created_at: OffsetDateTime,
) -> Result<BookingCreated, CoreError> {
    // Rule: only approved listings accept bookings
    if !listing.is_approved {
        return Err(CoreError::DomainViolation(DomainError::ListingNotOpen {
            listing_id: listing.listing_id,
        }));
    }

    // Rule: owners never book their own listing
    if request.guest_id == listing.owner_id {
        return Err(CoreError::DomainViolation(DomainError::OwnerCannotBook {
            listing_id: listing.listing_id,
        }));
    }

    validate_guest_count(request.guest_count, listing.capacity)?;
    validate_booking_window(request.check_in, request.check_out)?;

    // Rule: no two live bookings may overlap on the same listing
    let conflict: bool = existing.iter().any(|booking| {
        !booking.is_cancelled()
            && dates_overlap(
                request.check_in,
                request.check_out,
                booking.check_in,
                booking.check_out,
            )
    });
    if conflict {
        return Err(CoreError::DomainViolation(DomainError::DatesUnavailable {
            listing_id: listing.listing_id,
            check_in: request.check_in,
            check_out: request.check_out,
        }));
    }

    let nights: i64 = stay_nights(request.check_in, request.check_out)?;
    let amount: Decimal = booking_amount(nights, listing.price);

    let booking: NewBooking = NewBooking {
        guest_id: request.guest_id,
        listing_id: listing.listing_id,
        check_in: request.check_in,
        check_out: request.check_out,
        guest_count: request.guest_count,
        amount,
        created_at,
    };

    let owner_notice: NewNotification = booking_created_notice(listing, request, nights, amount);

    Ok(BookingCreated {
        booking,
        owner_notice,
    })
}

/// Cancels a booking on behalf of its guest.
///
/// Cancellation marks the booking rather than deleting it, so the listing's
/// history stays intact for analytics. No refund is modeled.
///
/// # Arguments
///
/// * `booking` - The booking to cancel
/// * `caller` - The user requesting the cancellation
/// * `cancelled_at` - The cancellation timestamp
///
/// # Returns
///
/// The updated booking record to persist.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not the booking's guest
/// - The booking has already been cancelled
pub fn cancel_booking(
    booking: &Booking,
    caller: UserId,
    cancelled_at: OffsetDateTime,
) -> Result<Booking, CoreError> {
    if booking.guest_id != caller {
        return Err(CoreError::DomainViolation(DomainError::NotBookingGuest {
            booking_id: booking.booking_id,
        }));
    }

    if booking.is_cancelled() {
        return Err(CoreError::DomainViolation(
            DomainError::BookingAlreadyCancelled {
                booking_id: booking.booking_id,
            },
        ));
    }

    let mut cancelled: Booking = booking.clone();
    cancelled.cancelled_at = Some(cancelled_at);
    Ok(cancelled)
}
