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

//! Storage interface for the campground marketplace.
//!
//! The [`Store`] trait is the boundary between the workflow layer and any
//! concrete backend. Every method takes `&mut self`: a caller holding the
//! store exclusively for the duration of an operation gets transactional
//! behavior for free, since no other writer can interleave between a read
//! and the writes that depend on it.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use campstay_domain::{
    ApprovalRequest, Booking, BookingId, Listing, ListingId, Location, LocationId,
    NewApprovalRequest, NewBooking, NewListing, NewLocation, NewNotification, NewReview,
    Notification, NotificationId, RequestId, Review, UserId,
};

/// Backend-agnostic storage for listings, bookings, reviews, and
/// notifications.
///
/// Identifier assignment belongs to the backend: each `insert_*` method
/// takes an unsaved record and returns the stored row with its identifier
/// filled in.
pub trait Store {
    /// Stores a new location and returns it with its identifier assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_location(&mut self, location: NewLocation) -> Result<Location, StoreError>;

    /// Stores a new listing and returns it with its identifier assigned.
    /// Listings are stored unapproved.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_listing(&mut self, listing: NewListing) -> Result<Listing, StoreError>;

    /// Stores a new approval request and returns it with its identifier
    /// assigned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OpenRequestExists` if the listing already has
    /// a pending request, or another error if the write fails.
    fn insert_request(&mut self, request: NewApprovalRequest)
    -> Result<ApprovalRequest, StoreError>;

    /// Stores a new booking and returns it with its identifier assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_booking(&mut self, booking: NewBooking) -> Result<Booking, StoreError>;

    /// Stores a new review and returns it with its identifier assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_review(&mut self, review: NewReview) -> Result<Review, StoreError>;

    /// Stores a new notification and returns it with its identifier
    /// assigned. Notifications start unviewed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert_notification(
        &mut self,
        notification: NewNotification,
    ) -> Result<Notification, StoreError>;

    /// Fetches a location by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LocationNotFound` if no such location exists.
    fn location(&mut self, location_id: LocationId) -> Result<Location, StoreError>;

    /// Fetches a listing by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ListingNotFound` if no such listing exists.
    fn listing(&mut self, listing_id: ListingId) -> Result<Listing, StoreError>;

    /// Fetches an approval request by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RequestNotFound` if no such request exists.
    fn request(&mut self, request_id: RequestId) -> Result<ApprovalRequest, StoreError>;

    /// Fetches a booking by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BookingNotFound` if no such booking exists.
    fn booking(&mut self, booking_id: BookingId) -> Result<Booking, StoreError>;

    /// Fetches a notification by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotificationNotFound` if no such notification
    /// exists.
    fn notification(&mut self, notification_id: NotificationId)
    -> Result<Notification, StoreError>;

    /// Returns the listing's pending approval request, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn open_request_for_listing(
        &mut self,
        listing_id: ListingId,
    ) -> Result<Option<ApprovalRequest>, StoreError>;

    /// Returns all pending approval requests, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_pending_requests(&mut self) -> Result<Vec<ApprovalRequest>, StoreError>;

    /// Overwrites a stored approval request.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RequestNotFound` if no such request exists.
    fn update_request(&mut self, request: &ApprovalRequest) -> Result<(), StoreError>;

    /// Sets a listing's approval flag.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ListingNotFound` if no such listing exists.
    fn set_listing_approved(
        &mut self,
        listing_id: ListingId,
        approved: bool,
    ) -> Result<(), StoreError>;

    /// Overwrites a stored booking.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BookingNotFound` if no such booking exists.
    fn update_booking(&mut self, booking: &Booking) -> Result<(), StoreError>;

    /// Returns every booking on a listing, cancelled ones included.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn bookings_for_listing(&mut self, listing_id: ListingId)
    -> Result<Vec<Booking>, StoreError>;

    /// Returns every booking made by a user, cancelled ones included.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn bookings_for_user(&mut self, user_id: UserId) -> Result<Vec<Booking>, StoreError>;

    /// Returns every review on a listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn reviews_for_listing(&mut self, listing_id: ListingId) -> Result<Vec<Review>, StoreError>;

    /// Returns every notification addressed to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn notifications_for_user(
        &mut self,
        user_id: UserId,
    ) -> Result<Vec<Notification>, StoreError>;

    /// Marks a notification as viewed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotificationNotFound` if no such notification
    /// exists.
    fn mark_notification_viewed(
        &mut self,
        notification_id: NotificationId,
    ) -> Result<(), StoreError>;
}
