//! Calendar-month window computation for the release matcher.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Compute the half-open date window `[start, end)` covering one calendar
/// month.
///
/// `start` is the first day of the given month; `end` is the first day of the
/// following month, rolling December over into January of the next year. A
/// release dated exactly on `end` therefore falls outside the window, while
/// one dated on the last calendar day of the month falls inside it.
pub fn month_window(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!(
            "Month must be between 1 and 12 (got {month})"
        )));
    }

    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::Validation(format!("Invalid year/month: {year}-{month}")))?;

    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| CoreError::Validation(format!("Invalid year/month: {year}-{month}")))?;

    Ok((start, end))
}
