// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Domain and core errors are translated explicitly so internal error
//! shapes never leak through the API contract. Storage failures are
//! logged with their detail and surfaced as an opaque storage error.

use campstay::CoreError;
use campstay_domain::DomainError;
use campstay_store::StoreError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The caller is not permitted to perform the action.
    #[error("Forbidden ({action}): {message}")]
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The request conflicts with the current state of a resource.
    #[error("Conflict ({rule}): {message}")]
    Conflict {
        /// The rule that produced the conflict.
        rule: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A storage error occurred.
    #[error("Storage error: {message}")]
    Storage {
        /// A generic description. Detail is logged, not surfaced.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTitle(msg) => ApiError::InvalidInput {
            field: String::from("title"),
            message: msg,
        },
        DomainError::InvalidCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: format!("Invalid capacity: {capacity}. Must be greater than 0"),
        },
        DomainError::InvalidPrice(msg) => ApiError::InvalidInput {
            field: String::from("price"),
            message: msg,
        },
        DomainError::InvalidCoordinates {
            latitude,
            longitude,
        } => ApiError::InvalidInput {
            field: String::from("location"),
            message: format!("Invalid coordinates: ({latitude}, {longitude})"),
        },
        DomainError::InvalidCampgroundKind(value) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("Invalid campground kind: '{value}'"),
        },
        DomainError::InvalidDateRange {
            check_in,
            check_out,
        } => ApiError::InvalidInput {
            field: String::from("check_out"),
            message: format!(
                "Check-out date {check_out} must be strictly after check-in date {check_in}"
            ),
        },
        DomainError::InvalidGuestCount { requested } => ApiError::InvalidInput {
            field: String::from("guest_count"),
            message: format!("Invalid guest count: {requested}. Must be at least 1 guest"),
        },
        DomainError::GuestCountExceedsCapacity {
            requested,
            capacity,
        } => ApiError::InvalidInput {
            field: String::from("guest_count"),
            message: format!("Guest count {requested} exceeds listing capacity {capacity}"),
        },
        DomainError::OwnerCannotBook { listing_id } => ApiError::Forbidden {
            action: String::from("create_booking"),
            message: format!("Owners cannot book their own listing ({listing_id})"),
        },
        DomainError::ListingNotOpen { listing_id } => ApiError::Forbidden {
            action: String::from("create_booking"),
            message: format!("Listing {listing_id} is not open for bookings"),
        },
        DomainError::DatesUnavailable {
            listing_id,
            check_in,
            check_out,
        } => ApiError::Conflict {
            rule: String::from("no_overlapping_bookings"),
            message: format!(
                "Listing {listing_id} is already booked between {check_in} and {check_out}"
            ),
        },
        DomainError::InvalidRating { rating } => ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("Invalid rating: {rating}. Must be between 1 and 5"),
        },
        DomainError::EmptyRejectionReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("A rejection reason must not be empty"),
        },
        DomainError::InvalidRequestStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid request status: '{value}'"),
        },
        DomainError::InvalidBookingStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid booking status: '{value}'"),
        },
        DomainError::RequestAlreadyResolved { request_id, status } => ApiError::Conflict {
            rule: String::from("request_resolves_once"),
            message: format!("Approval request {request_id} is already resolved as '{status}'"),
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::Conflict {
            rule: String::from("request_status_transitions"),
            message: format!("Cannot transition request status from '{from}' to '{to}'"),
        },
        DomainError::NotBookingGuest { booking_id } => ApiError::Forbidden {
            action: String::from("cancel_booking"),
            message: format!("Only the booking guest may cancel booking {booking_id}"),
        },
        DomainError::BookingAlreadyCancelled { booking_id } => ApiError::Conflict {
            rule: String::from("booking_cancels_once"),
            message: format!("Booking {booking_id} has already been cancelled"),
        },
        DomainError::ReviewNotEligible { listing_id } => ApiError::Forbidden {
            action: String::from("add_review"),
            message: format!("Reviewing listing {listing_id} requires a completed stay"),
        },
        DomainError::NotListingOwner { listing_id } => ApiError::Forbidden {
            action: String::from("get_listing_analytics"),
            message: format!("Only the owner of listing {listing_id} may view its analytics"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ListingNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Listing"),
                message: format!("Listing {id} does not exist"),
            },
            StoreError::LocationNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Location"),
                message: format!("Location {id} does not exist"),
            },
            StoreError::RequestNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Approval request"),
                message: format!("Approval request {id} does not exist"),
            },
            StoreError::BookingNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Booking"),
                message: format!("Booking {id} does not exist"),
            },
            StoreError::NotificationNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Notification"),
                message: format!("Notification {id} does not exist"),
            },
            StoreError::OpenRequestExists { listing_id } => Self::Conflict {
                rule: String::from("one_open_request_per_listing"),
                message: format!(
                    "An open approval request already exists for listing {listing_id}"
                ),
            },
            StoreError::Backend(detail) => {
                tracing::error!(detail = %detail, "storage backend error");
                Self::Storage {
                    message: String::from("A storage error occurred"),
                }
            }
        }
    }
}
