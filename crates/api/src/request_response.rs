// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Booking statuses appear here only as derived strings; they
//! are never stored.

use campstay::ListingAnalytics;
use campstay_domain::{BookingId, ListingId, LocationId, NotificationId, RequestId, ReviewId, UserId};
use rust_decimal::Decimal;
use time::Date;

/// API request to submit a new campground listing for approval.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitListingRequest {
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Maximum guests per booking.
    pub capacity: u32,
    /// The campground category (tent, rv, cabin, glamping).
    pub kind: String,
    /// Nightly rate, before tax.
    pub price: Decimal,
    /// Free-text place description.
    pub place: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// API response for a successful listing submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitListingResponse {
    /// The created listing.
    pub listing_id: ListingId,
    /// The created location record.
    pub location_id: LocationId,
    /// The pending approval request opened for the listing.
    pub request_id: RequestId,
    /// A success message.
    pub message: String,
}

/// API response for a resolved approval request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolveRequestResponse {
    /// The resolved request.
    pub request_id: RequestId,
    /// The listing the request belongs to.
    pub listing_id: ListingId,
    /// The terminal status, as a string.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to reject an approval request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectRequestRequest {
    /// The request to reject.
    pub request_id: RequestId,
    /// The administrator's reason. Must be non-empty.
    pub reason: String,
}

/// A pending approval request awaiting administrator action.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PendingRequestInfo {
    /// The pending request.
    pub request_id: RequestId,
    /// The listing awaiting approval.
    pub listing_id: ListingId,
    /// The listing's title.
    pub listing_title: String,
    /// The owner who submitted the listing.
    pub requested_by: UserId,
}

/// API request to book a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// The listing to book.
    pub listing_id: ListingId,
    /// Check-in date (inclusive).
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Number of guests.
    pub guest_count: u32,
}

/// API response for a successful booking.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingResponse {
    /// The created booking.
    pub booking_id: BookingId,
    /// The booked listing.
    pub listing_id: ListingId,
    /// Check-in date (inclusive).
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Number of guests.
    pub guest_count: u32,
    /// Total amount including tax, rounded for presentation.
    pub amount: Decimal,
    /// The derived booking status.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelBookingResponse {
    /// The cancelled booking.
    pub booking_id: BookingId,
    /// The derived booking status. Always "cancelled".
    pub status: String,
    /// A success message.
    pub message: String,
}

/// One of the caller's bookings, with its status derived at read time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The booking.
    pub booking_id: BookingId,
    /// The booked listing.
    pub listing_id: ListingId,
    /// The booked listing's title.
    pub listing_title: String,
    /// Check-in date (inclusive).
    pub check_in: Date,
    /// Check-out date (exclusive).
    pub check_out: Date,
    /// Number of guests.
    pub guest_count: u32,
    /// Total amount including tax, rounded for presentation.
    pub amount: Decimal,
    /// The derived booking status.
    pub status: String,
}

/// API request to review a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReviewRequest {
    /// The listing to review.
    pub listing_id: ListingId,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Free-text review body.
    pub content: String,
}

/// API response for a successful review.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddReviewResponse {
    /// The created review.
    pub review_id: ReviewId,
    /// The reviewed listing.
    pub listing_id: ListingId,
    /// The recorded rating.
    pub rating: u8,
    /// A success message.
    pub message: String,
}

/// API response carrying a listing's derived statistics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GetListingAnalyticsResponse {
    /// The listing the statistics describe.
    pub listing_id: ListingId,
    /// The aggregate statistics.
    pub analytics: ListingAnalytics,
}

/// A notification addressed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationInfo {
    /// The notification.
    pub notification_id: NotificationId,
    /// The notification body.
    pub content: String,
    /// Whether the caller has marked it viewed.
    pub viewed: bool,
}
