// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the listing analytics aggregation.

use campstay_domain::{Booking, Review, UserId};
use rust_decimal::Decimal;
use time::macros::{date, datetime};

use crate::{ListingAnalytics, MonthlyRevenue, calculate_listing_analytics};

use super::helpers::{GUEST, OTHER_GUEST, make_booking, make_review, test_now};

#[test]
fn test_empty_history_produces_zeroed_analytics() {
    let analytics: ListingAnalytics =
        calculate_listing_analytics(&[], &[], 4, date!(2025 - 06 - 15));

    assert_eq!(analytics.ongoing_count, 0);
    assert_eq!(analytics.upcoming_count, 0);
    assert_eq!(analytics.completed_count, 0);
    assert_eq!(analytics.cancelled_count, 0);
    assert_eq!(analytics.revenue_total, Decimal::ZERO);
    assert_eq!(analytics.revenue_upcoming, Decimal::ZERO);
    assert!((analytics.average_stay_length - 0.0).abs() < f64::EPSILON);
    assert!(analytics.revenue_trend.is_empty());
    assert_eq!(analytics.utilization_rate, None);
    assert_eq!(analytics.average_rating, None);
    assert_eq!(analytics.total_review_count, 0);
    assert_eq!(analytics.repeat_guests, 0);
    assert!(analytics.recent_bookings.is_empty());
}

#[test]
fn test_bookings_partition_by_stay_status() {
    let completed: Booking = make_booking(1, GUEST, date!(2025 - 06 - 05), date!(2025 - 06 - 10));
    let ongoing: Booking = make_booking(2, GUEST, date!(2025 - 06 - 14), date!(2025 - 06 - 17));
    let mut upcoming: Booking =
        make_booking(3, OTHER_GUEST, date!(2025 - 06 - 20), date!(2025 - 06 - 23));
    upcoming.amount = Decimal::new(47200, 2);
    let bookings: Vec<Booking> = vec![completed, ongoing, upcoming];

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&bookings, &[], 4, date!(2025 - 06 - 15));

    assert_eq!(analytics.completed_count, 1);
    assert_eq!(analytics.ongoing_count, 1);
    assert_eq!(analytics.upcoming_count, 1);
    // 236.00 + 236.00 + 472.00
    assert_eq!(analytics.revenue_total, Decimal::new(94400, 2));
    assert_eq!(analytics.revenue_upcoming, Decimal::new(47200, 2));
}

#[test]
fn test_checkout_today_counts_as_completed() {
    let bookings: Vec<Booking> =
        vec![make_booking(1, GUEST, date!(2025 - 06 - 10), date!(2025 - 06 - 15))];

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&bookings, &[], 4, date!(2025 - 06 - 15));

    assert_eq!(analytics.completed_count, 1);
    assert_eq!(analytics.ongoing_count, 0);
}

#[test]
fn test_cancelled_bookings_are_excluded_from_aggregates() {
    let active: Booking = make_booking(1, GUEST, date!(2025 - 06 - 01), date!(2025 - 06 - 04));
    let mut cancelled: Booking =
        make_booking(2, OTHER_GUEST, date!(2025 - 06 - 20), date!(2025 - 06 - 23));
    cancelled.cancelled_at = Some(test_now());
    let bookings: Vec<Booking> = vec![active, cancelled];

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&bookings, &[], 4, date!(2025 - 06 - 15));

    assert_eq!(analytics.cancelled_count, 1);
    assert_eq!(analytics.upcoming_count, 0);
    assert_eq!(analytics.revenue_total, Decimal::new(23600, 2));
    assert_eq!(analytics.revenue_upcoming, Decimal::ZERO);
    assert_eq!(analytics.recent_bookings.len(), 1);
}

#[test]
fn test_average_stay_length_is_rounded_to_one_decimal() {
    let bookings: Vec<Booking> = vec![
        make_booking(1, GUEST, date!(2025 - 06 - 01), date!(2025 - 06 - 04)),
        make_booking(2, OTHER_GUEST, date!(2025 - 06 - 10), date!(2025 - 06 - 14)),
    ];

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&bookings, &[], 4, date!(2025 - 06 - 15));

    // (3 + 4) / 2
    assert!((analytics.average_stay_length - 3.5).abs() < f64::EPSILON);
}

#[test]
fn test_utilization_rate_over_observed_span() {
    // 10 booked nights over a 20 day span at capacity 2: 10 / 40 = 25.0
    let bookings: Vec<Booking> = vec![
        make_booking(1, GUEST, date!(2025 - 06 - 01), date!(2025 - 06 - 06)),
        make_booking(2, OTHER_GUEST, date!(2025 - 06 - 16), date!(2025 - 06 - 21)),
    ];

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&bookings, &[], 2, date!(2025 - 06 - 15));

    assert_eq!(analytics.utilization_rate, Some(25.0));
}

#[test]
fn test_utilization_rate_none_without_bookings() {
    let mut cancelled: Booking =
        make_booking(1, GUEST, date!(2025 - 06 - 01), date!(2025 - 06 - 04));
    cancelled.cancelled_at = Some(test_now());

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&[cancelled], &[], 4, date!(2025 - 06 - 15));

    assert_eq!(analytics.utilization_rate, None);
}

#[test]
fn test_revenue_trend_keeps_six_most_recent_months_ascending() {
    let mut bookings: Vec<Booking> = Vec::new();
    for month in 1..=8_u8 {
        let mut booking: Booking =
            make_booking(i64::from(month), GUEST, date!(2025 - 09 - 01), date!(2025 - 09 - 04));
        booking.created_at = datetime!(2025-01-10 12:00 UTC)
            .replace_month(time::Month::try_from(month).unwrap())
            .unwrap();
        bookings.push(booking);
    }

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&bookings, &[], 4, date!(2025 - 06 - 15));

    assert_eq!(analytics.revenue_trend.len(), 6);
    let months: Vec<u8> = analytics.revenue_trend.iter().map(|m| m.month).collect();
    assert_eq!(months, vec![3, 4, 5, 6, 7, 8]);
    assert!(analytics.revenue_trend.iter().all(|m| m.year == 2025));
}

#[test]
fn test_revenue_trend_sums_within_a_month() {
    let mut first: Booking = make_booking(1, GUEST, date!(2025 - 07 - 01), date!(2025 - 07 - 04));
    first.created_at = datetime!(2025-05-02 12:00 UTC);
    let mut second: Booking =
        make_booking(2, OTHER_GUEST, date!(2025 - 07 - 10), date!(2025 - 07 - 13));
    second.created_at = datetime!(2025-05-20 12:00 UTC);
    second.amount = Decimal::new(11800, 2);

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&[first, second], &[], 4, date!(2025 - 06 - 15));

    assert_eq!(
        analytics.revenue_trend,
        vec![MonthlyRevenue {
            year: 2025,
            month: 5,
            revenue: Decimal::new(35400, 2),
        }]
    );
}

#[test]
fn test_average_rating_is_rounded_to_one_decimal() {
    let reviews: Vec<Review> = vec![make_review(1, 5), make_review(2, 4), make_review(3, 4)];

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&[], &reviews, 4, date!(2025 - 06 - 15));

    // 13 / 3 = 4.333...
    assert_eq!(analytics.average_rating, Some(4.3));
    assert_eq!(analytics.total_review_count, 3);
}

#[test]
fn test_repeat_guests_counts_return_visits() {
    let mut bookings: Vec<Booking> = vec![
        make_booking(1, GUEST, date!(2025 - 06 - 01), date!(2025 - 06 - 04)),
        make_booking(2, GUEST, date!(2025 - 07 - 01), date!(2025 - 07 - 04)),
        make_booking(3, GUEST, date!(2025 - 08 - 01), date!(2025 - 08 - 04)),
        make_booking(4, OTHER_GUEST, date!(2025 - 09 - 01), date!(2025 - 09 - 04)),
    ];
    for (index, booking) in bookings.iter_mut().enumerate() {
        booking.created_at = test_now() + time::Duration::days(i64::try_from(index).unwrap());
    }

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&bookings, &[], 4, date!(2025 - 06 - 15));

    assert_eq!(analytics.repeat_guests, 2);
}

#[test]
fn test_recent_bookings_capped_at_five_newest_first() {
    let mut bookings: Vec<Booking> = Vec::new();
    for id in 1..=7_i64 {
        let mut booking: Booking =
            make_booking(id, UserId::new(100 + id), date!(2025 - 07 - 01), date!(2025 - 07 - 04));
        booking.created_at = test_now() + time::Duration::days(id);
        bookings.push(booking);
    }

    let analytics: ListingAnalytics =
        calculate_listing_analytics(&bookings, &[], 4, date!(2025 - 06 - 15));

    assert_eq!(analytics.recent_bookings.len(), 5);
    let ids: Vec<i64> = analytics
        .recent_bookings
        .iter()
        .map(|b| b.booking_id.value())
        .collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3]);
}
