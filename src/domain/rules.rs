//! Canonical validation rules shared by every vehicle variant.
//!
//! Years run from the first patented automobile (1886) up to ten years past
//! the current calendar year. Cars carry between one and six doors.

use chrono::{Datelike, Local};

pub const EARLIEST_VALID_VEHICLE_YEAR: i32 = 1886;
pub const FUTURE_YEAR_ALLOWANCE: i32 = 10;
pub const MIN_CAR_DOORS: i32 = 1;
pub const MAX_CAR_DOORS: i32 = 6;

/// Calendar year on the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn latest_valid_year() -> i32 {
    current_year() + FUTURE_YEAR_ALLOWANCE
}
