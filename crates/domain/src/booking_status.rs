// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking display status derivation.
//!
//! Booking status is never stored. It is recomputed from the booking's date
//! range (and cancellation mark) on every read, so stored state can never
//! drift from the calendar.

use crate::error::DomainError;
use crate::types::Booking;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The derived display status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// The stay has not started yet.
    Pending,
    /// The stay is in progress.
    Confirmed,
    /// The stay is over.
    Completed,
    /// The guest cancelled the booking.
    Cancelled,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives the display status of a date range as of `on`.
///
/// This is a pure function of `(check_in, check_out, on)`: for any `on`,
/// exactly one of `{pending, confirmed, completed}` holds. Cancellation is
/// layered on top by [`booking_status`].
///
/// Dates are calendar dates; the checkout day itself already counts as
/// completed.
#[must_use]
pub const fn derive_status(check_in: Date, check_out: Date, on: Date) -> BookingStatus {
    // Order matters: completed wins over pending for degenerate ranges.
    if on.to_julian_day() >= check_out.to_julian_day() {
        BookingStatus::Completed
    } else if on.to_julian_day() < check_in.to_julian_day() {
        BookingStatus::Pending
    } else {
        BookingStatus::Confirmed
    }
}

/// Derives the display status of a booking as of `on`.
///
/// A cancelled booking is `cancelled` regardless of its dates; otherwise
/// the status follows [`derive_status`].
#[must_use]
pub fn booking_status(booking: &Booking, on: Date) -> BookingStatus {
    if booking.is_cancelled() {
        BookingStatus::Cancelled
    } else {
        derive_status(booking.check_in, booking.check_out, on)
    }
}
