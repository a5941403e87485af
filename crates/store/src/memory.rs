// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory storage backend.
//!
//! Backs tests and single-process deployments. Rows live in plain vectors
//! and identifiers are assigned from per-entity counters starting at 1.

use campstay_domain::{
    ApprovalRequest, Booking, BookingId, Listing, ListingId, Location, LocationId,
    NewApprovalRequest, NewBooking, NewListing, NewLocation, NewNotification, NewReview,
    Notification, NotificationId, RequestId, RequestStatus, Review, ReviewId, UserId,
};

use crate::error::StoreError;
use crate::Store;

/// A [`Store`] backend holding everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    locations: Vec<Location>,
    listings: Vec<Listing>,
    requests: Vec<ApprovalRequest>,
    bookings: Vec<Booking>,
    reviews: Vec<Review>,
    notifications: Vec<Notification>,
    next_location_id: i64,
    next_listing_id: i64,
    next_request_id: i64,
    next_booking_id: i64,
    next_review_id: i64,
    next_notification_id: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

impl Store for MemoryStore {
    fn insert_location(&mut self, location: NewLocation) -> Result<Location, StoreError> {
        let location_id: LocationId = LocationId::new(Self::next_id(&mut self.next_location_id));
        let stored: Location = Location {
            location_id,
            place: location.place,
            latitude: location.latitude,
            longitude: location.longitude,
        };
        tracing::debug!(location_id = %location_id, "inserted location");
        self.locations.push(stored.clone());
        Ok(stored)
    }

    fn insert_listing(&mut self, listing: NewListing) -> Result<Listing, StoreError> {
        let listing_id: ListingId = ListingId::new(Self::next_id(&mut self.next_listing_id));
        let stored: Listing = Listing {
            listing_id,
            owner_id: listing.owner_id,
            title: listing.title,
            description: listing.description,
            capacity: listing.capacity,
            kind: listing.kind,
            price: listing.price,
            location_id: listing.location_id,
            is_approved: false,
        };
        tracing::debug!(listing_id = %listing_id, "inserted listing");
        self.listings.push(stored.clone());
        Ok(stored)
    }

    fn insert_request(
        &mut self,
        request: NewApprovalRequest,
    ) -> Result<ApprovalRequest, StoreError> {
        // Backstop for the one-open-request rule
        let open_exists: bool = self
            .requests
            .iter()
            .any(|r| r.listing_id == request.listing_id && r.status == RequestStatus::Pending);
        if open_exists {
            return Err(StoreError::OpenRequestExists {
                listing_id: request.listing_id,
            });
        }

        let request_id: RequestId = RequestId::new(Self::next_id(&mut self.next_request_id));
        let stored: ApprovalRequest = ApprovalRequest {
            request_id,
            listing_id: request.listing_id,
            requested_by: request.requested_by,
            status: RequestStatus::Pending,
            rejection_reason: None,
        };
        tracing::debug!(request_id = %request_id, listing_id = %request.listing_id, "inserted approval request");
        self.requests.push(stored.clone());
        Ok(stored)
    }

    fn insert_booking(&mut self, booking: NewBooking) -> Result<Booking, StoreError> {
        let booking_id: BookingId = BookingId::new(Self::next_id(&mut self.next_booking_id));
        let stored: Booking = Booking {
            booking_id,
            guest_id: booking.guest_id,
            listing_id: booking.listing_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            guest_count: booking.guest_count,
            amount: booking.amount,
            created_at: booking.created_at,
            cancelled_at: None,
        };
        tracing::debug!(booking_id = %booking_id, listing_id = %booking.listing_id, "inserted booking");
        self.bookings.push(stored.clone());
        Ok(stored)
    }

    fn insert_review(&mut self, review: NewReview) -> Result<Review, StoreError> {
        let review_id: ReviewId = ReviewId::new(Self::next_id(&mut self.next_review_id));
        let stored: Review = Review {
            review_id,
            reviewer_id: review.reviewer_id,
            listing_id: review.listing_id,
            rating: review.rating,
            content: review.content,
            created_at: review.created_at,
        };
        tracing::debug!(review_id = %review_id, listing_id = %review.listing_id, "inserted review");
        self.reviews.push(stored.clone());
        Ok(stored)
    }

    fn insert_notification(
        &mut self,
        notification: NewNotification,
    ) -> Result<Notification, StoreError> {
        let notification_id: NotificationId =
            NotificationId::new(Self::next_id(&mut self.next_notification_id));
        let stored: Notification = Notification {
            notification_id,
            recipient_id: notification.recipient_id,
            content: notification.content,
            viewed: false,
        };
        tracing::debug!(notification_id = %notification_id, "inserted notification");
        self.notifications.push(stored.clone());
        Ok(stored)
    }

    fn location(&mut self, location_id: LocationId) -> Result<Location, StoreError> {
        self.locations
            .iter()
            .find(|l| l.location_id == location_id)
            .cloned()
            .ok_or(StoreError::LocationNotFound(location_id))
    }

    fn listing(&mut self, listing_id: ListingId) -> Result<Listing, StoreError> {
        self.listings
            .iter()
            .find(|l| l.listing_id == listing_id)
            .cloned()
            .ok_or(StoreError::ListingNotFound(listing_id))
    }

    fn request(&mut self, request_id: RequestId) -> Result<ApprovalRequest, StoreError> {
        self.requests
            .iter()
            .find(|r| r.request_id == request_id)
            .cloned()
            .ok_or(StoreError::RequestNotFound(request_id))
    }

    fn booking(&mut self, booking_id: BookingId) -> Result<Booking, StoreError> {
        self.bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .cloned()
            .ok_or(StoreError::BookingNotFound(booking_id))
    }

    fn notification(
        &mut self,
        notification_id: NotificationId,
    ) -> Result<Notification, StoreError> {
        self.notifications
            .iter()
            .find(|n| n.notification_id == notification_id)
            .cloned()
            .ok_or(StoreError::NotificationNotFound(notification_id))
    }

    fn open_request_for_listing(
        &mut self,
        listing_id: ListingId,
    ) -> Result<Option<ApprovalRequest>, StoreError> {
        Ok(self
            .requests
            .iter()
            .find(|r| r.listing_id == listing_id && r.status == RequestStatus::Pending)
            .cloned())
    }

    fn list_pending_requests(&mut self) -> Result<Vec<ApprovalRequest>, StoreError> {
        Ok(self
            .requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .cloned()
            .collect())
    }

    fn update_request(&mut self, request: &ApprovalRequest) -> Result<(), StoreError> {
        let stored: &mut ApprovalRequest = self
            .requests
            .iter_mut()
            .find(|r| r.request_id == request.request_id)
            .ok_or(StoreError::RequestNotFound(request.request_id))?;
        tracing::debug!(request_id = %request.request_id, status = %request.status, "updated approval request");
        *stored = request.clone();
        Ok(())
    }

    fn set_listing_approved(
        &mut self,
        listing_id: ListingId,
        approved: bool,
    ) -> Result<(), StoreError> {
        let stored: &mut Listing = self
            .listings
            .iter_mut()
            .find(|l| l.listing_id == listing_id)
            .ok_or(StoreError::ListingNotFound(listing_id))?;
        tracing::debug!(listing_id = %listing_id, approved, "set listing approval");
        stored.is_approved = approved;
        Ok(())
    }

    fn update_booking(&mut self, booking: &Booking) -> Result<(), StoreError> {
        let stored: &mut Booking = self
            .bookings
            .iter_mut()
            .find(|b| b.booking_id == booking.booking_id)
            .ok_or(StoreError::BookingNotFound(booking.booking_id))?;
        tracing::debug!(booking_id = %booking.booking_id, "updated booking");
        *stored = booking.clone();
        Ok(())
    }

    fn bookings_for_listing(
        &mut self,
        listing_id: ListingId,
    ) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.listing_id == listing_id)
            .cloned()
            .collect())
    }

    fn bookings_for_user(&mut self, user_id: UserId) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.guest_id == user_id)
            .cloned()
            .collect())
    }

    fn reviews_for_listing(&mut self, listing_id: ListingId) -> Result<Vec<Review>, StoreError> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.listing_id == listing_id)
            .cloned()
            .collect())
    }

    fn notifications_for_user(
        &mut self,
        user_id: UserId,
    ) -> Result<Vec<Notification>, StoreError> {
        Ok(self
            .notifications
            .iter()
            .filter(|n| n.recipient_id == user_id)
            .cloned()
            .collect())
    }

    fn mark_notification_viewed(
        &mut self,
        notification_id: NotificationId,
    ) -> Result<(), StoreError> {
        let stored: &mut Notification = self
            .notifications
            .iter_mut()
            .find(|n| n.notification_id == notification_id)
            .ok_or(StoreError::NotificationNotFound(notification_id))?;
        tracing::debug!(notification_id = %notification_id, "marked notification viewed");
        stored.viewed = true;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use campstay_domain::CampgroundKind;
    use rust_decimal::Decimal;
    use time::macros::{date, datetime};

    fn new_listing(owner: i64) -> NewListing {
        NewListing {
            owner_id: UserId::new(owner),
            title: String::from("Cedar Hollow"),
            description: String::from("Wooded walk-in sites"),
            capacity: 4,
            kind: CampgroundKind::Tent,
            price: Decimal::from(80),
            location_id: LocationId::new(1),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_identifiers() {
        let mut store: MemoryStore = MemoryStore::new();

        let first: Listing = store.insert_listing(new_listing(1)).unwrap();
        let second: Listing = store.insert_listing(new_listing(2)).unwrap();

        assert_eq!(first.listing_id, ListingId::new(1));
        assert_eq!(second.listing_id, ListingId::new(2));
    }

    #[test]
    fn test_lookup_of_missing_listing_fails() {
        let mut store: MemoryStore = MemoryStore::new();

        let result: Result<Listing, StoreError> = store.listing(ListingId::new(42));

        assert_eq!(
            result.unwrap_err(),
            StoreError::ListingNotFound(ListingId::new(42))
        );
    }

    #[test]
    fn test_second_open_request_for_listing_is_rejected() {
        let mut store: MemoryStore = MemoryStore::new();
        let listing: Listing = store.insert_listing(new_listing(1)).unwrap();
        let request: NewApprovalRequest = NewApprovalRequest {
            listing_id: listing.listing_id,
            requested_by: listing.owner_id,
        };

        store.insert_request(request.clone()).unwrap();
        let result: Result<ApprovalRequest, StoreError> = store.insert_request(request);

        assert_eq!(
            result.unwrap_err(),
            StoreError::OpenRequestExists {
                listing_id: listing.listing_id
            }
        );
    }

    #[test]
    fn test_resolved_request_allows_a_new_one() {
        let mut store: MemoryStore = MemoryStore::new();
        let listing: Listing = store.insert_listing(new_listing(1)).unwrap();
        let request: NewApprovalRequest = NewApprovalRequest {
            listing_id: listing.listing_id,
            requested_by: listing.owner_id,
        };

        let mut stored: ApprovalRequest = store.insert_request(request.clone()).unwrap();
        stored.status = RequestStatus::Rejected;
        store.update_request(&stored).unwrap();

        assert!(store.insert_request(request).is_ok());
    }

    #[test]
    fn test_mark_notification_viewed_persists() {
        let mut store: MemoryStore = MemoryStore::new();
        let notice: Notification = store
            .insert_notification(NewNotification {
                recipient_id: UserId::new(1),
                content: String::from("hello"),
            })
            .unwrap();
        assert!(!notice.viewed);

        store.mark_notification_viewed(notice.notification_id).unwrap();

        let reloaded: Notification = store.notification(notice.notification_id).unwrap();
        assert!(reloaded.viewed);
    }

    #[test]
    fn test_bookings_are_scoped_by_listing_and_user() {
        let mut store: MemoryStore = MemoryStore::new();
        let booking: NewBooking = NewBooking {
            guest_id: UserId::new(7),
            listing_id: ListingId::new(1),
            check_in: date!(2025 - 06 - 01),
            check_out: date!(2025 - 06 - 04),
            guest_count: 2,
            amount: Decimal::new(23600, 2),
            created_at: datetime!(2025-05-01 12:00 UTC),
        };
        store.insert_booking(booking.clone()).unwrap();
        let mut other: NewBooking = booking;
        other.guest_id = UserId::new(8);
        other.listing_id = ListingId::new(2);
        store.insert_booking(other).unwrap();

        assert_eq!(store.bookings_for_listing(ListingId::new(1)).unwrap().len(), 1);
        assert_eq!(store.bookings_for_user(UserId::new(8)).unwrap().len(), 1);
        assert!(store.bookings_for_user(UserId::new(9)).unwrap().is_empty());
    }
}
