// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::NewLocation;
use rust_decimal::Decimal;
use time::Date;

/// Validates a listing's submitted field values.
///
/// This function checks field-local rules only; approval state and
/// ownership are enforced elsewhere.
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty
/// - The capacity is zero
/// - The nightly price is not positive
pub fn validate_listing_fields(
    title: &str,
    capacity: u32,
    price: Decimal,
) -> Result<(), DomainError> {
    // Rule: title must not be empty
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }

    // Rule: capacity must allow at least one guest
    if capacity == 0 {
        return Err(DomainError::InvalidCapacity { capacity });
    }

    // Rule: nightly price must be positive
    if price <= Decimal::ZERO {
        return Err(DomainError::InvalidPrice(format!(
            "Nightly price must be positive, got {price}"
        )));
    }

    Ok(())
}

/// Validates a new location's coordinates.
///
/// # Errors
///
/// Returns `DomainError::InvalidCoordinates` if the latitude is outside
/// [-90, 90] or the longitude is outside [-180, 180].
pub fn validate_location_fields(location: &NewLocation) -> Result<(), DomainError> {
    let latitude_ok: bool = (-90.0..=90.0).contains(&location.latitude);
    let longitude_ok: bool = (-180.0..=180.0).contains(&location.longitude);
    if !latitude_ok || !longitude_ok {
        return Err(DomainError::InvalidCoordinates {
            latitude: location.latitude,
            longitude: location.longitude,
        });
    }
    Ok(())
}

/// Validates a booking's requested date range.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` unless `check_out` is strictly
/// after `check_in`.
pub fn validate_booking_window(check_in: Date, check_out: Date) -> Result<(), DomainError> {
    if check_out <= check_in {
        return Err(DomainError::InvalidDateRange {
            check_in,
            check_out,
        });
    }
    Ok(())
}

/// Validates a booking's guest count against a listing's capacity.
///
/// # Errors
///
/// Returns an error if:
/// - The guest count is zero
/// - The guest count exceeds the capacity
pub fn validate_guest_count(requested: u32, capacity: u32) -> Result<(), DomainError> {
    if requested == 0 {
        return Err(DomainError::InvalidGuestCount { requested });
    }
    if requested > capacity {
        return Err(DomainError::GuestCountExceedsCapacity {
            requested,
            capacity,
        });
    }
    Ok(())
}

/// Validates a review rating.
///
/// # Errors
///
/// Returns `DomainError::InvalidRating` unless the rating is between
/// 1 and 5 inclusive.
pub fn validate_rating(rating: u8) -> Result<(), DomainError> {
    if !(1..=5).contains(&rating) {
        return Err(DomainError::InvalidRating { rating });
    }
    Ok(())
}

/// Validates a rejection reason.
///
/// # Errors
///
/// Returns `DomainError::EmptyRejectionReason` if the reason is empty or
/// whitespace-only.
pub fn validate_rejection_reason(reason: &str) -> Result<(), DomainError> {
    if reason.trim().is_empty() {
        return Err(DomainError::EmptyRejectionReason);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_valid_listing_fields() {
        assert!(validate_listing_fields("Riverside Pines", 4, Decimal::new(100, 0)).is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = validate_listing_fields("   ", 4, Decimal::new(100, 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTitle(_)));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = validate_listing_fields("Riverside Pines", 0, Decimal::new(100, 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCapacity { capacity: 0 }));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        assert!(validate_listing_fields("Riverside Pines", 4, Decimal::ZERO).is_err());
        assert!(validate_listing_fields("Riverside Pines", 4, Decimal::new(-100, 0)).is_err());
    }

    #[test]
    fn test_coordinates_in_range() {
        let location = NewLocation {
            place: String::from("Eel River, CA"),
            latitude: 40.05,
            longitude: -123.79,
        };
        assert!(validate_location_fields(&location).is_ok());
    }

    #[test]
    fn test_coordinates_out_of_range() {
        let location = NewLocation {
            place: String::from("Nowhere"),
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(validate_location_fields(&location).is_err());
    }

    #[test]
    fn test_booking_window_must_be_forward() {
        assert!(validate_booking_window(date!(2025 - 06 - 01), date!(2025 - 06 - 04)).is_ok());
        assert!(validate_booking_window(date!(2025 - 06 - 01), date!(2025 - 06 - 01)).is_err());
        assert!(validate_booking_window(date!(2025 - 06 - 04), date!(2025 - 06 - 01)).is_err());
    }

    #[test]
    fn test_guest_count_bounds() {
        assert!(validate_guest_count(1, 4).is_ok());
        assert!(validate_guest_count(4, 4).is_ok());
        assert!(matches!(
            validate_guest_count(0, 4),
            Err(DomainError::InvalidGuestCount { requested: 0 })
        ));
        assert!(matches!(
            validate_guest_count(5, 4),
            Err(DomainError::GuestCountExceedsCapacity {
                requested: 5,
                capacity: 4
            })
        ));
    }

    #[test]
    fn test_rating_bounds() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_rejection_reason_must_be_present() {
        assert!(validate_rejection_reason("missing fire safety cert").is_ok());
        assert!(validate_rejection_reason("").is_err());
        assert!(validate_rejection_reason("   ").is_err());
    }
}
