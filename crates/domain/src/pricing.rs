// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking amount arithmetic.
//!
//! Amounts are computed once at booking-creation time and stored on the
//! booking: whole nights times the listing's nightly rate, plus the fixed
//! 18% tax. The multiplier is a constant of the design, not configuration.

use crate::error::DomainError;
use rust_decimal::Decimal;
use time::Date;

/// Returns the fixed tax multiplier applied to every booking amount (1.18).
#[must_use]
pub fn tax_multiplier() -> Decimal {
    Decimal::new(118, 2)
}

/// Computes the number of whole nights between check-in and check-out.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` unless `check_out` is strictly
/// after `check_in`.
pub fn stay_nights(check_in: Date, check_out: Date) -> Result<i64, DomainError> {
    let nights: i64 = (check_out - check_in).whole_days();
    if nights <= 0 {
        return Err(DomainError::InvalidDateRange {
            check_in,
            check_out,
        });
    }
    Ok(nights)
}

/// Computes a booking's total amount: `nights x nightly_rate x 1.18`.
#[must_use]
pub fn booking_amount(nights: i64, nightly_rate: Decimal) -> Decimal {
    Decimal::from(nights) * nightly_rate * tax_multiplier()
}

/// Rounds a money amount to two decimal places for presentation.
///
/// Stored amounts keep full precision; rounding happens only at the
/// response boundary.
#[must_use]
pub fn display_amount(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}
