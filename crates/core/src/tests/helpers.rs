// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campstay_domain::{
    ApprovalRequest, Booking, BookingId, CampgroundKind, Listing, ListingId, LocationId,
    RequestId, RequestStatus, Review, ReviewId, UserId,
};
use rust_decimal::Decimal;
use time::macros::datetime;
use time::{Date, OffsetDateTime};

use crate::BookingRequest;

pub const OWNER: UserId = UserId::new(1);
pub const GUEST: UserId = UserId::new(2);
pub const OTHER_GUEST: UserId = UserId::new(3);
pub const LISTING: ListingId = ListingId::new(10);

pub fn test_now() -> OffsetDateTime {
    datetime!(2025-05-01 12:00 UTC)
}

pub fn make_listing(approved: bool, capacity: u32, price: Decimal) -> Listing {
    Listing {
        listing_id: LISTING,
        owner_id: OWNER,
        title: String::from("Riverbend Pines"),
        description: String::from("Shaded sites along the river"),
        capacity,
        kind: CampgroundKind::Tent,
        price,
        location_id: LocationId::new(20),
        is_approved: approved,
    }
}

pub fn make_booking(id: i64, guest: UserId, check_in: Date, check_out: Date) -> Booking {
    Booking {
        booking_id: BookingId::new(id),
        guest_id: guest,
        listing_id: LISTING,
        check_in,
        check_out,
        guest_count: 2,
        amount: Decimal::new(23600, 2),
        created_at: test_now(),
        cancelled_at: None,
    }
}

pub fn make_booking_request(check_in: Date, check_out: Date, guest_count: u32) -> BookingRequest {
    BookingRequest {
        guest_id: GUEST,
        guest_name: String::from("Dana"),
        listing_id: LISTING,
        check_in,
        check_out,
        guest_count,
    }
}

pub fn make_request(status: RequestStatus) -> ApprovalRequest {
    ApprovalRequest {
        request_id: RequestId::new(30),
        listing_id: LISTING,
        requested_by: OWNER,
        status,
        rejection_reason: None,
    }
}

pub fn make_review(id: i64, rating: u8) -> Review {
    Review {
        review_id: ReviewId::new(id),
        reviewer_id: GUEST,
        listing_id: LISTING,
        rating,
        content: String::from("Great riverside spot"),
        created_at: test_now(),
    }
}
