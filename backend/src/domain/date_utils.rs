//! Calendar arithmetic and label formatting.
//!
//! Everything here is a pure function of its inputs. Weeks are Sunday-first
//! throughout, matching the weekday header the views render.

use chrono::{Datelike, Days, Duration, Months, NaiveDate};
use shared::{MonthGrid, MonthWeek, WeekGrid};

use crate::error::{CalendarError, CalendarResult};

/// Sunday-first weekday header labels
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Get the number of days in a given month and year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Weekday of the 1st of the month (0 = Sunday, 1 = Monday, etc.)
pub fn first_day_of_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .unwrap_or(date)
        .weekday()
        .num_days_from_sunday()
}

/// Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Whether every date the week view and navigation touch around `date` is
/// representable. Within a week of `NaiveDate::MIN`/`MAX` the containing
/// week itself falls outside chrono's range.
pub fn is_supported_date(date: NaiveDate) -> bool {
    date.checked_sub_days(Days::new(7)).is_some()
        && date.checked_add_days(Days::new(7)).is_some()
}

/// Reject reference dates too close to the edge of the calendar range
pub fn ensure_supported_date(date: NaiveDate) -> CalendarResult<NaiveDate> {
    if is_supported_date(date) {
        Ok(date)
    } else {
        Err(CalendarError::DateOutOfRange(date))
    }
}

/// The seven consecutive dates of the Sunday-first week containing `reference`.
///
/// `reference` must satisfy [`is_supported_date`]; the week around a date
/// within seven days of `NaiveDate::MIN`/`MAX` cannot be represented.
pub fn compute_week_dates(reference: NaiveDate) -> WeekGrid {
    let sunday = week_start(reference);
    let mut dates = [sunday; 7];
    for (offset, slot) in dates.iter_mut().enumerate() {
        *slot = sunday + Duration::days(offset as i64);
    }
    WeekGrid { dates }
}

/// Week rows covering the month containing `reference`.
///
/// A row is closed when it reaches Saturday or the last day of the month, so
/// the first row is left-padded by the weekday of the 1st and the last row is
/// right-padded up to Saturday.
pub fn compute_month_weeks(reference: NaiveDate) -> MonthGrid {
    let year = reference.year();
    let month = reference.month();
    let last_day = days_in_month(year, month);
    let first_weekday = first_day_of_month(reference);

    let mut weeks = Vec::with_capacity(6);
    let mut week: MonthWeek = [None; 7];

    for day in 1..=last_day {
        let index = ((first_weekday + day - 1) % 7) as usize;
        week[index] = Some(day);
        if index == 6 || day == last_day {
            weeks.push(week);
            week = [None; 7];
        }
    }

    log::debug!(
        "Computed {} week rows for {}/{} (first weekday {})",
        weeks.len(),
        month,
        year,
        first_weekday
    );

    MonthGrid { year, month, weeks }
}

/// Date of `day` within the month of `reference_month`, if that day exists.
pub fn date_from_month_and_day(reference_month: NaiveDate, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(reference_month.year(), reference_month.month(), day)
}

/// `YYYY-MM-DD` key for `day` in the month of `reference_month`.
///
/// Holiday sources are keyed with this exact format, so the padding must not
/// change. The day is not range-checked; callers pass grid day numbers.
pub fn format_date_key(reference_month: NaiveDate, day: u32) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        reference_month.year(),
        reference_month.month(),
        day
    )
}

/// Parse a `YYYY-MM-DD` holiday key back into a date.
///
/// Unpadded forms such as `2024-1-5` are rejected since they would never
/// equal a key produced by [`format_date_key`].
pub fn parse_date_key(key: &str) -> CalendarResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDateKey(key.to_string()))?;
    if format_date_key(date, date.day()) != key {
        return Err(CalendarError::InvalidDateKey(key.to_string()));
    }
    Ok(date)
}

/// Heading for a month view, e.g. `2024년 1월`
pub fn format_month_label(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Heading for a week view, e.g. `2024년 1월 3주`.
///
/// A week belongs to the month of its Thursday; weeks are numbered from the
/// first Thursday of that month. Same range requirement as
/// [`compute_week_dates`].
pub fn format_week_label(date: NaiveDate) -> String {
    let to_thursday = 4 - i64::from(date.weekday().num_days_from_sunday());
    let thursday = date + Duration::days(to_thursday);

    let first_of_month = thursday.with_day(1).unwrap_or(thursday);
    let first_weekday = first_of_month.weekday().num_days_from_sunday();
    let first_thursday = first_of_month + Duration::days(i64::from((4 + 7 - first_weekday) % 7));

    let week_number = (thursday - first_thursday).num_days() / 7 + 1;

    format!("{}년 {}월 {}주", thursday.year(), thursday.month(), week_number)
}

/// Step one week back or forward, staying put at the edge of the range
pub fn shift_week(date: NaiveDate, forward: bool) -> NaiveDate {
    let shifted = if forward {
        date.checked_add_days(Days::new(7))
    } else {
        date.checked_sub_days(Days::new(7))
    };
    shifted.unwrap_or(date)
}

/// Step one calendar month back or forward, clamping the day to the target
/// month's length (Jan 31 -> Feb 29 in a leap year).
pub fn shift_month(date: NaiveDate, forward: bool) -> NaiveDate {
    let shifted = if forward {
        date.checked_add_months(Months::new(1))
    } else {
        date.checked_sub_months(Months::new(1))
    };
    shifted.unwrap_or(date)
}
