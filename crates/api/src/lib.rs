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
    clippy::all
)]

//! API layer for the campground marketplace.
//!
//! This crate exposes the operations a transport layer would mount:
//! listing submission and approval, booking and cancellation, reviews,
//! owner analytics, and notifications. Callers arrive pre-authenticated
//! as a [`Caller`]; handlers enforce role and ownership rules and
//! translate every internal error into the [`ApiError`] contract.

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{Caller, Role, require_admin};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    add_review, approve_request, cancel_booking, create_booking, get_listing_analytics,
    get_user_bookings, list_notifications, list_pending_requests, mark_notification_viewed,
    reject_request, submit_listing,
};
pub use request_response::{
    AddReviewRequest, AddReviewResponse, BookingInfo, CancelBookingResponse,
    CreateBookingRequest, CreateBookingResponse, GetListingAnalyticsResponse, NotificationInfo,
    PendingRequestInfo, RejectRequestRequest, ResolveRequestResponse, SubmitListingRequest,
    SubmitListingResponse,
};
