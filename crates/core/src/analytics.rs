// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Owner-facing listing analytics.
//!
//! This module provides read-only aggregation over a listing's booking and
//! review history. Cancelled bookings are excluded from every aggregate and
//! reported only through `cancelled_count`, so cancelling a booking removes
//! it from revenue, utilization, and trend figures.

use campstay_domain::{Booking, BookingStatus, Review, UserId, derive_status};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use time::Date;

/// How many trailing year-month buckets the revenue trend reports.
pub const REVENUE_TREND_MONTHS: usize = 6;

/// How many bookings the recent-bookings list reports.
pub const RECENT_BOOKINGS_LIMIT: usize = 5;

/// Revenue booked within a single calendar month.
///
/// Keyed by the month the booking was created in, not the month of the
/// stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u8,
    /// Sum of booking amounts created in this month.
    pub revenue: Decimal,
}

/// Derived statistics for a single listing.
///
/// Produced by [`calculate_listing_analytics`]; read-only and tolerant of
/// empty histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingAnalytics {
    /// Bookings whose stay covers today.
    pub ongoing_count: u32,
    /// Bookings whose stay has not started.
    pub upcoming_count: u32,
    /// Bookings whose stay is over.
    pub completed_count: u32,
    /// Cancelled bookings. Not included in any other figure.
    pub cancelled_count: u32,
    /// Sum of amounts over all non-cancelled bookings.
    pub revenue_total: Decimal,
    /// Sum of amounts over upcoming bookings only.
    pub revenue_upcoming: Decimal,
    /// Mean stay length in nights, rounded to one decimal. Zero when there
    /// are no bookings.
    pub average_stay_length: f64,
    /// Monthly revenue sums, ascending, most recent six months present.
    pub revenue_trend: Vec<MonthlyRevenue>,
    /// Booked nights over the observed span times capacity, as a
    /// percentage rounded to one decimal. `None` when there are no
    /// bookings to observe.
    pub utilization_rate: Option<f64>,
    /// Mean review rating rounded to one decimal. `None` when there are no
    /// reviews.
    pub average_rating: Option<f64>,
    /// Total number of reviews.
    pub total_review_count: u32,
    /// Bookings whose guest had booked this listing before.
    pub repeat_guests: u32,
    /// The most recently created bookings, newest first.
    pub recent_bookings: Vec<Booking>,
}

/// Rounds a ratio to one decimal place.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes a listing's derived statistics from its full history.
///
/// # Arguments
///
/// * `bookings` - All bookings on the listing, cancelled ones included
/// * `reviews` - All reviews on the listing
/// * `capacity` - The listing's guest capacity
/// * `today` - The current calendar date
///
/// # Returns
///
/// The aggregate statistics. Zero bookings and zero reviews produce zeroed
/// counts, `None` rates, and empty lists; this function never fails.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::too_many_lines)]
pub fn calculate_listing_analytics(
    bookings: &[Booking],
    reviews: &[Review],
    capacity: u32,
    today: Date,
) -> ListingAnalytics {
    let active: Vec<&Booking> = bookings.iter().filter(|b| !b.is_cancelled()).collect();
    let cancelled_count: u32 = u32::try_from(bookings.len() - active.len()).unwrap_or(u32::MAX);

    // Partition by derived display status
    let mut ongoing_count: u32 = 0;
    let mut upcoming_count: u32 = 0;
    let mut completed_count: u32 = 0;
    let mut revenue_total: Decimal = Decimal::ZERO;
    let mut revenue_upcoming: Decimal = Decimal::ZERO;

    for booking in &active {
        revenue_total += booking.amount;
        match derive_status(booking.check_in, booking.check_out, today) {
            BookingStatus::Confirmed => ongoing_count += 1,
            BookingStatus::Pending => {
                upcoming_count += 1;
                revenue_upcoming += booking.amount;
            }
            BookingStatus::Completed | BookingStatus::Cancelled => completed_count += 1,
        }
    }

    // Mean stay length over positive-duration bookings
    let stay_nights: Vec<i64> = active
        .iter()
        .map(|b| (b.check_out - b.check_in).whole_days())
        .filter(|nights| *nights > 0)
        .collect();
    let average_stay_length: f64 = if stay_nights.is_empty() {
        0.0
    } else {
        let total: i64 = stay_nights.iter().sum();
        round_to_tenth(total as f64 / stay_nights.len() as f64)
    };

    // Monthly revenue buckets keyed by creation year-month, ascending;
    // only the trailing window is reported
    let mut buckets: BTreeMap<(i32, u8), Decimal> = BTreeMap::new();
    for booking in &active {
        let key: (i32, u8) = (booking.created_at.year(), u8::from(booking.created_at.month()));
        *buckets.entry(key).or_insert(Decimal::ZERO) += booking.amount;
    }
    let skip: usize = buckets.len().saturating_sub(REVENUE_TREND_MONTHS);
    let revenue_trend: Vec<MonthlyRevenue> = buckets
        .into_iter()
        .skip(skip)
        .map(|((year, month), revenue)| MonthlyRevenue {
            year,
            month,
            revenue,
        })
        .collect();

    // Utilization: booked nights over the observed span times capacity
    let utilization_rate: Option<f64> = {
        let earliest_in: Option<Date> = active.iter().map(|b| b.check_in).min();
        let latest_out: Option<Date> = active.iter().map(|b| b.check_out).max();
        match (earliest_in, latest_out) {
            (Some(start), Some(end)) => {
                let span_days: i64 = (end - start).whole_days();
                let denominator: i64 = span_days * i64::from(capacity);
                if denominator > 0 {
                    let booked_nights: i64 = stay_nights.iter().sum();
                    Some(round_to_tenth(
                        booked_nights as f64 / denominator as f64 * 100.0,
                    ))
                } else {
                    None
                }
            }
            _ => None,
        }
    };

    // Review aggregates
    let total_review_count: u32 = u32::try_from(reviews.len()).unwrap_or(u32::MAX);
    let average_rating: Option<f64> = if reviews.is_empty() {
        None
    } else {
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(round_to_tenth(
            f64::from(total) / reviews.len() as f64,
        ))
    };

    // Repeat guests: bookings whose guest appears earlier in creation order
    let mut by_creation: Vec<&Booking> = active.clone();
    by_creation.sort_by_key(|b| (b.created_at, b.booking_id));
    let mut seen: HashSet<UserId> = HashSet::new();
    let mut repeat_guests: u32 = 0;
    for booking in &by_creation {
        if !seen.insert(booking.guest_id) {
            repeat_guests += 1;
        }
    }

    // Recent bookings, newest first
    let mut by_recency: Vec<&Booking> = active;
    by_recency.sort_by_key(|b| std::cmp::Reverse((b.created_at, b.booking_id)));
    let recent_bookings: Vec<Booking> = by_recency
        .into_iter()
        .take(RECENT_BOOKINGS_LIMIT)
        .cloned()
        .collect();

    ListingAnalytics {
        ongoing_count,
        upcoming_count,
        completed_count,
        cancelled_count,
        revenue_total,
        revenue_upcoming,
        average_stay_length,
        revenue_trend,
        utilization_rate,
        average_rating,
        total_review_count,
        repeat_guests,
        recent_bookings,
    }
}
