//! Operator input validation for dates and numeric coordinates.
//!
//! # Responsibility
//! - Check raw field values coming from the interaction shell before any
//!   SQL mutation happens.
//! - Produce typed errors carrying a human-readable reason for the boundary.
//!
//! # Invariants
//! - Accepted dates are returned unchanged (already normalized ISO text).
//! - An empty string is "no value" for optional dates, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The record set covers nothing later than this year.
pub const MAX_YEAR: u16 = 2025;

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("date shape pattern is valid"));

const COMMON_YEAR_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Typed rejection of a raw operator value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input does not split into three dash-separated digit groups of 4/2/2.
    DateShape { value: String },
    YearTooLate { year: u16 },
    MonthOutOfRange { month: u8 },
    DayOutOfRange {
        year: u16,
        month: u8,
        day: u8,
        max_day: u8,
    },
    NotNumeric {
        field: &'static str,
        value: String,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateShape { value } => {
                write!(f, "date `{value}` must be YYYY-MM-DD (for example, 2023-05-15)")
            }
            Self::YearTooLate { .. } => write!(f, "year cannot exceed {MAX_YEAR}"),
            Self::MonthOutOfRange { month } => write!(f, "month must be 1-12, got {month}"),
            Self::DayOutOfRange {
                year,
                month,
                max_day,
                ..
            } => write!(f, "day must be 1-{max_day} for month {month} of year {year}"),
            Self::NotNumeric { field, value } => {
                write!(f, "{field} must be a number (for example, 55.7558), got `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day count for a month of a given year. `month` must be in `1..=12`.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    if month == 2 && is_leap_year(year) {
        29
    } else {
        COMMON_YEAR_DAYS[usize::from(month - 1)]
    }
}

/// Validates a required ISO date and returns it unchanged.
pub fn validate_date(input: &str) -> Result<String, ValidationError> {
    let shape_error = || ValidationError::DateShape {
        value: input.to_string(),
    };
    let captures = DATE_SHAPE.captures(input).ok_or_else(shape_error)?;
    let year: u16 = captures[1].parse().map_err(|_| shape_error())?;
    let month: u8 = captures[2].parse().map_err(|_| shape_error())?;
    let day: u8 = captures[3].parse().map_err(|_| shape_error())?;

    if year > MAX_YEAR {
        return Err(ValidationError::YearTooLate { year });
    }
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange { month });
    }
    let max_day = days_in_month(year, month);
    if day < 1 || day > max_day {
        return Err(ValidationError::DayOutOfRange {
            year,
            month,
            day,
            max_day,
        });
    }

    Ok(input.to_string())
}

/// Validates an optional date field; empty input means "no value".
pub fn validate_optional_date(input: &str) -> Result<Option<String>, ValidationError> {
    if input.is_empty() {
        return Ok(None);
    }
    validate_date(input).map(Some)
}

/// Parses a raw numeric field, naming the field in the rejection.
pub fn validate_float(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotNumeric {
            field,
            value: input.to_string(),
        })
}
