// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The review gate.
//!
//! A review is allowed only when the reviewer has a non-cancelled booking
//! on the listing whose checkout date is strictly in the past. Nothing else
//! is restricted: the current design permits repeat reviews by the same
//! guest.

use campstay_domain::{
    Booking, DomainError, ListingId, NewReview, UserId, validate_rating,
};
use time::{Date, OffsetDateTime};

use crate::error::CoreError;

/// Checks whether a reviewer has a completed stay on a listing.
///
/// # Arguments
///
/// * `reviewer` - The user attempting to review
/// * `listing_id` - The listing being reviewed
/// * `bookings` - All bookings on the listing
/// * `today` - The current calendar date
///
/// # Errors
///
/// Returns `DomainError::ReviewNotEligible` unless a non-cancelled booking
/// by the reviewer exists with `check_out` strictly before `today`.
pub fn review_eligibility(
    reviewer: UserId,
    listing_id: ListingId,
    bookings: &[Booking],
    today: Date,
) -> Result<(), CoreError> {
    let eligible: bool = bookings.iter().any(|booking| {
        booking.guest_id == reviewer
            && booking.listing_id == listing_id
            && !booking.is_cancelled()
            && booking.check_out < today
    });

    if eligible {
        Ok(())
    } else {
        Err(CoreError::DomainViolation(DomainError::ReviewNotEligible {
            listing_id,
        }))
    }
}

/// Validates and builds a review.
///
/// # Arguments
///
/// * `reviewer` - The user attempting to review
/// * `listing_id` - The listing being reviewed
/// * `bookings` - All bookings on the listing
/// * `rating` - Star rating, 1 through 5
/// * `content` - Free-text review body
/// * `today` - The current calendar date
/// * `created_at` - The creation timestamp to stamp on the review
///
/// # Returns
///
/// The review record to persist.
///
/// # Errors
///
/// Returns an error if:
/// - The reviewer has no completed, non-cancelled stay on the listing
/// - The rating is outside 1 through 5
pub fn add_review(
    reviewer: UserId,
    listing_id: ListingId,
    bookings: &[Booking],
    rating: u8,
    content: &str,
    today: Date,
    created_at: OffsetDateTime,
) -> Result<NewReview, CoreError> {
    review_eligibility(reviewer, listing_id, bookings, today)?;
    validate_rating(rating)?;

    Ok(NewReview {
        reviewer_id: reviewer,
        listing_id,
        rating,
        content: content.to_string(),
        created_at,
    })
}
