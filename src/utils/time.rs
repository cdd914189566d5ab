use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde_json::json;

use crate::error::{AppError, AppResult};

pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|err| {
        AppError::validation_with_details(
            "invalid date, expected YYYY-MM-DD",
            json!({"value": value, "error": err.to_string()}),
        )
    })
}

/// Parses `YYYY-MM` into a `(year, month)` pair.
pub fn parse_month(value: &str) -> AppResult<(i32, u32)> {
    let invalid = || {
        AppError::validation_with_details(
            "invalid month, expected YYYY-MM",
            json!({ "value": value }),
        )
    };

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    Tz::from_str(name.trim()).map_err(|err| {
        AppError::validation_with_details(
            "unknown time zone",
            json!({ "value": name, "error": err.to_string() }),
        )
    })
}

/// Calendar date of `instant` as seen from `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// First and last day of the given month.
pub fn month_range(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        AppError::validation_with_details(
            "month out of range",
            json!({ "year": year, "month": month }),
        )
    })?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| AppError::validation("month out of range"))?;
    Ok((first, last))
}

/// Number of days in `[start, end]`; fails when the range is reversed.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> AppResult<u32> {
    let span = end.signed_duration_since(start).num_days();
    if span < 0 {
        return Err(AppError::validation_with_details(
            "end date must not be before start date",
            json!({ "startDate": start.to_string(), "endDate": end.to_string() }),
        ));
    }
    u32::try_from(span + 1).map_err(|_| AppError::validation("date range too large"))
}

pub fn dates_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start
        .iter_days()
        .take_while(move |date| *date <= end)
}
