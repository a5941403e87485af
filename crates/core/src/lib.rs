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

//! Pure workflow logic for the campground marketplace.
//!
//! Every operation here takes a snapshot of the relevant records and
//! returns the records to persist. Nothing in this crate touches storage;
//! the caller is responsible for loading the snapshot and applying the
//! outputs inside one transaction.

mod analytics;
mod approval;
mod booking;
mod error;
mod notify;
mod review;

#[cfg(test)]
mod tests;

pub use analytics::{
    ListingAnalytics, MonthlyRevenue, RECENT_BOOKINGS_LIMIT, REVENUE_TREND_MONTHS,
    calculate_listing_analytics,
};
pub use approval::{ApprovalOutcome, approve_request, reject_request};
pub use booking::{BookingCreated, BookingRequest, cancel_booking, create_booking, dates_overlap};
pub use error::CoreError;
pub use notify::{booking_created_notice, request_approved_notice, request_rejected_notice};
pub use review::{add_review, review_eligibility};
