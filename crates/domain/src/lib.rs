// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking_status;
mod error;
mod pricing;
mod request;
mod types;
mod validation;

// Re-export public types and functions
pub use booking_status::{BookingStatus, booking_status, derive_status};
pub use error::DomainError;
pub use pricing::{booking_amount, display_amount, stay_nights, tax_multiplier};
pub use request::{ApprovalRequest, NewApprovalRequest, RequestStatus};
pub use types::{
    Booking, BookingId, CampgroundKind, Listing, ListingId, Location, LocationId, NewBooking,
    NewListing, NewLocation, NewNotification, NewReview, Notification, NotificationId, Review,
    ReviewId, RequestId, UserId,
};
pub use validation::{
    validate_booking_window, validate_guest_count, validate_listing_fields,
    validate_location_fields, validate_rating, validate_rejection_reason,
};
