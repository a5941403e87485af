// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campstay_domain::{ListingId, UserId};
use campstay_store::MemoryStore;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::auth::{Caller, Role};
use crate::handlers::{approve_request, submit_listing};
use crate::request_response::{SubmitListingRequest, SubmitListingResponse};

pub fn admin() -> Caller {
    Caller::new(UserId::new(100), String::from("Avery"), Role::Admin)
}

pub fn owner() -> Caller {
    Caller::new(UserId::new(1), String::from("Morgan"), Role::User)
}

pub fn guest() -> Caller {
    Caller::new(UserId::new(2), String::from("Dana"), Role::User)
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2025-05-01 12:00 UTC)
}

pub fn listing_request() -> SubmitListingRequest {
    SubmitListingRequest {
        title: String::from("Riverbend Pines"),
        description: String::from("Shaded sites along the river"),
        capacity: 4,
        kind: String::from("tent"),
        price: Decimal::from(100),
        place: String::from("Eel River, CA"),
        latitude: 40.05,
        longitude: -123.79,
    }
}

/// Submits a listing as `owner()` and approves it as `admin()`.
pub fn approved_listing(store: &mut MemoryStore) -> ListingId {
    let submitted: SubmitListingResponse =
        submit_listing(store, &owner(), listing_request()).unwrap();
    approve_request(store, &admin(), submitted.request_id).unwrap();
    submitted.listing_id
}
