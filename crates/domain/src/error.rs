// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BookingId, ListingId, RequestId};
use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Listing title is empty or invalid.
    InvalidTitle(String),
    /// Listing capacity must be a positive guest count.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: u32,
    },
    /// Listing nightly price must be positive.
    InvalidPrice(String),
    /// Location coordinates are out of range.
    InvalidCoordinates {
        /// The invalid latitude.
        latitude: f64,
        /// The invalid longitude.
        longitude: f64,
    },
    /// Campground kind string is not a recognized category.
    InvalidCampgroundKind(String),
    /// Check-out must be strictly after check-in.
    InvalidDateRange {
        /// The requested check-in date.
        check_in: Date,
        /// The requested check-out date.
        check_out: Date,
    },
    /// A booking must bring at least one guest.
    InvalidGuestCount {
        /// The invalid guest count.
        requested: u32,
    },
    /// Guest count exceeds the listing's capacity.
    GuestCountExceedsCapacity {
        /// The requested guest count.
        requested: u32,
        /// The listing's capacity.
        capacity: u32,
    },
    /// Owners may not book their own listing.
    OwnerCannotBook {
        /// The listing the owner attempted to book.
        listing_id: ListingId,
    },
    /// The listing has not been approved for bookings.
    ListingNotOpen {
        /// The unapproved listing.
        listing_id: ListingId,
    },
    /// The requested date range overlaps an existing booking.
    DatesUnavailable {
        /// The listing with the conflicting booking.
        listing_id: ListingId,
        /// The requested check-in date.
        check_in: Date,
        /// The requested check-out date.
        check_out: Date,
    },
    /// Review rating is outside the 1-5 range.
    InvalidRating {
        /// The invalid rating value.
        rating: u8,
    },
    /// A rejection must carry a non-empty reason.
    EmptyRejectionReason,
    /// Request status string is not a recognized status.
    InvalidRequestStatus(String),
    /// Booking status string is not a recognized status.
    InvalidBookingStatus(String),
    /// The approval request has already reached a terminal state.
    RequestAlreadyResolved {
        /// The resolved request.
        request_id: RequestId,
        /// The terminal status it holds.
        status: String,
    },
    /// The requested status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// Only the booking guest may cancel the booking.
    NotBookingGuest {
        /// The booking the caller attempted to cancel.
        booking_id: BookingId,
    },
    /// The booking has already been cancelled.
    BookingAlreadyCancelled {
        /// The cancelled booking.
        booking_id: BookingId,
    },
    /// Reviews require a completed, non-cancelled stay on the listing.
    ReviewNotEligible {
        /// The listing the caller attempted to review.
        listing_id: ListingId,
    },
    /// Only the listing owner may view its analytics.
    NotListingOwner {
        /// The listing whose analytics were requested.
        listing_id: ListingId,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be greater than 0")
            }
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {msg}"),
            Self::InvalidCoordinates {
                latitude,
                longitude,
            } => {
                write!(f, "Invalid coordinates: ({latitude}, {longitude})")
            }
            Self::InvalidCampgroundKind(value) => {
                write!(f, "Invalid campground kind: '{value}'")
            }
            Self::InvalidDateRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be strictly after check-in date {check_in}"
                )
            }
            Self::InvalidGuestCount { requested } => {
                write!(
                    f,
                    "Invalid guest count: {requested}. Must be at least 1 guest"
                )
            }
            Self::GuestCountExceedsCapacity {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Guest count {requested} exceeds listing capacity {capacity}"
                )
            }
            Self::OwnerCannotBook { listing_id } => {
                write!(f, "Owners cannot book their own listing ({listing_id})")
            }
            Self::ListingNotOpen { listing_id } => {
                write!(f, "Listing {listing_id} is not open for bookings")
            }
            Self::DatesUnavailable {
                listing_id,
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Listing {listing_id} is already booked between {check_in} and {check_out}"
                )
            }
            Self::InvalidRating { rating } => {
                write!(f, "Invalid rating: {rating}. Must be between 1 and 5")
            }
            Self::EmptyRejectionReason => {
                write!(f, "A rejection reason must not be empty")
            }
            Self::InvalidRequestStatus(value) => {
                write!(f, "Invalid request status: '{value}'")
            }
            Self::InvalidBookingStatus(value) => {
                write!(f, "Invalid booking status: '{value}'")
            }
            Self::RequestAlreadyResolved { request_id, status } => {
                write!(
                    f,
                    "Approval request {request_id} is already resolved as '{status}'"
                )
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot transition request status from '{from}' to '{to}'")
            }
            Self::NotBookingGuest { booking_id } => {
                write!(f, "Only the booking guest may cancel booking {booking_id}")
            }
            Self::BookingAlreadyCancelled { booking_id } => {
                write!(f, "Booking {booking_id} has already been cancelled")
            }
            Self::ReviewNotEligible { listing_id } => {
                write!(
                    f,
                    "Reviewing listing {listing_id} requires a completed stay"
                )
            }
            Self::NotListingOwner { listing_id } => {
                write!(
                    f,
                    "Only the owner of listing {listing_id} may view its analytics"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
