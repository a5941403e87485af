// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campstay_domain::{BookingId, ListingId, LocationId, NotificationId, RequestId};

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested listing was not found.
    ListingNotFound(ListingId),
    /// The requested location was not found.
    LocationNotFound(LocationId),
    /// The requested approval request was not found.
    RequestNotFound(RequestId),
    /// The requested booking was not found.
    BookingNotFound(BookingId),
    /// The requested notification was not found.
    NotificationNotFound(NotificationId),
    /// An open approval request already exists for the listing.
    OpenRequestExists {
        /// The listing with the existing pending request.
        listing_id: ListingId,
    },
    /// A backend error occurred.
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListingNotFound(id) => write!(f, "Listing not found: {id}"),
            Self::LocationNotFound(id) => write!(f, "Location not found: {id}"),
            Self::RequestNotFound(id) => write!(f, "Approval request not found: {id}"),
            Self::BookingNotFound(id) => write!(f, "Booking not found: {id}"),
            Self::NotificationNotFound(id) => write!(f, "Notification not found: {id}"),
            Self::OpenRequestExists { listing_id } => {
                write!(f, "An open approval request already exists for listing {listing_id}")
            }
            Self::Backend(msg) => write!(f, "Backend error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
