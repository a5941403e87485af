// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier from its numeric value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the numeric value of this identifier.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifies a user (guest, owner, or administrator).
    ///
    /// User records live with the external identity collaborator; the core
    /// only ever handles their identifiers.
    UserId
);
define_id!(
    /// Identifies a campground listing.
    ListingId
);
define_id!(
    /// Identifies a listing's location record.
    LocationId
);
define_id!(
    /// Identifies an approval request.
    RequestId
);
define_id!(
    /// Identifies a booking.
    BookingId
);
define_id!(
    /// Identifies a review.
    ReviewId
);
define_id!(
    /// Identifies a notification.
    NotificationId
);

/// The enumerated category of a campground listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampgroundKind {
    /// Tent pitches.
    Tent,
    /// RV and trailer sites.
    Rv,
    /// Fixed cabins.
    Cabin,
    /// Furnished glamping sites.
    Glamping,
}

impl CampgroundKind {
    /// Returns the string representation of the kind.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tent => "tent",
            Self::Rv => "rv",
            Self::Cabin => "cabin",
            Self::Glamping => "glamping",
        }
    }
}

impl FromStr for CampgroundKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tent" => Ok(Self::Tent),
            "rv" => Ok(Self::Rv),
            "cabin" => Ok(Self::Cabin),
            "glamping" => Ok(Self::Glamping),
            _ => Err(DomainError::InvalidCampgroundKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for CampgroundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The geographic location backing a listing.
///
/// Owned 1:1 by its listing and created before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// The location's identifier.
    pub location_id: LocationId,
    /// Free-text place description.
    pub place: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A location record before it has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    /// Free-text place description.
    pub place: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A campground listing.
///
/// A listing is bookable by guests only while `is_approved` is true, which
/// is derived from the terminal state of its approval request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// The listing's identifier.
    pub listing_id: ListingId,
    /// The owning user. An owner is never a guest of their own listing.
    pub owner_id: UserId,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Maximum guests per booking.
    pub capacity: u32,
    /// The listing's category.
    pub kind: CampgroundKind,
    /// Nightly rate, before tax.
    pub price: Decimal,
    /// The backing location record.
    pub location_id: LocationId,
    /// Whether an administrator has approved the listing for bookings.
    pub is_approved: bool,
}

/// A listing before it has been persisted.
///
/// New listings always start unapproved, with a pending approval request
/// opened alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    /// The owning user.
    pub owner_id: UserId,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Maximum guests per booking.
    pub capacity: u32,
    /// The listing's category.
    pub kind: CampgroundKind,
    /// Nightly rate, before tax.
    pub price: Decimal,
    /// The backing location record, persisted first.
    pub location_id: LocationId,
}

/// A guest's booking of a listing.
///
/// Display status is never stored; it is derived from the date range and
/// `cancelled_at` on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// The booking's identifier.
    pub booking_id: BookingId,
    /// The guest who booked.
    pub guest_id: UserId,
    /// The booked listing.
    pub listing_id: ListingId,
    /// Check-in date (inclusive).
    pub check_in: Date,
    /// Check-out date (exclusive). Strictly after `check_in`.
    pub check_out: Date,
    /// Number of guests. Between 1 and the listing's capacity.
    pub guest_count: u32,
    /// Total amount: nights x nightly rate x the fixed tax multiplier.
    pub amount: Decimal,
    /// When the booking was created.
    pub created_at: OffsetDateTime,
    /// When the booking was cancelled, if it was.
    pub cancelled_at: Option<OffsetDateTime>,
}

impl Booking {
    /// Returns true if this booking has been cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled_at.is_some()
    }
}

/// A booking before it has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    /// The guest who booked.
    pub guest_id: UserId,
    /// The booked listing.
    pub listing_id: ListingId,
    /// Check-in date (inclusive).
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Number of guests.
    pub guest_count: u32,
    /// Total amount including tax.
    pub amount: Decimal,
    /// When the booking was created.
    pub created_at: OffsetDateTime,
}

/// A guest's review of a listing after a completed stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// The review's identifier.
    pub review_id: ReviewId,
    /// The reviewing guest.
    pub reviewer_id: UserId,
    /// The reviewed listing.
    pub listing_id: ListingId,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Free-text review body.
    pub content: String,
    /// When the review was created.
    pub created_at: OffsetDateTime,
}

/// A review before it has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    /// The reviewing guest.
    pub reviewer_id: UserId,
    /// The reviewed listing.
    pub listing_id: ListingId,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Free-text review body.
    pub content: String,
    /// When the review was created.
    pub created_at: OffsetDateTime,
}

/// A notification addressed to a single recipient.
///
/// Notifications are append-only: they are created as a side effect of
/// booking creation and request resolution, mutated only by the recipient
/// marking them viewed, and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The notification's identifier.
    pub notification_id: NotificationId,
    /// The recipient.
    pub recipient_id: UserId,
    /// The notification body.
    pub content: String,
    /// Whether the recipient has marked it viewed.
    pub viewed: bool,
}

/// A notification before it has been persisted.
///
/// This is what the notification emitter produces; delivery and storage
/// belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient.
    pub recipient_id: UserId,
    /// The notification body.
    pub content: String,
}
