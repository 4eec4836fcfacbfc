use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use time_tz::{ToTimezone, timezones};

use crate::{DeliveryDay, ScheduleError};

/// `YYYY-MM-DD`, the only date format accepted from users.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input.trim(), DATE_FORMAT)
}

/// Current calendar date in the given IANA time zone, UTC when the zone is unknown.
pub fn today(tz: &str) -> Date {
    let mut now = OffsetDateTime::now_utc();

    match timezones::get_by_name(tz) {
        Some(tz) => now = now.to_timezone(tz),
        None => tracing::warn!(tz, "unknown timezone, using UTC for today"),
    }

    now.date()
}

pub fn is_delivery_day(date: Date) -> bool {
    DeliveryDay::from_weekday(date.weekday()).is_some()
}

/// Earliest delivery day strictly after `today`.
pub fn next_valid_start_date(today: Date) -> Result<Date, ScheduleError> {
    let mut date = today;

    loop {
        date = date.next_day().ok_or(ScheduleError::DateOutOfRange)?;

        if is_delivery_day(date) {
            return Ok(date);
        }
    }
}

/// Checks the rules shared by start dates and custom slot dates.
///
/// The same-day rule is reported before the weekday rule.
pub fn check_start_date(date: Date, today: Date) -> Result<(), ScheduleError> {
    if date == today {
        return Err(ScheduleError::SameDayNotAllowed { date });
    }

    if !is_delivery_day(date) {
        return Err(ScheduleError::InvalidWeekday {
            date,
            weekday: date.weekday(),
        });
    }

    Ok(())
}

pub fn is_valid_start_date(date: Date, today: Date) -> bool {
    check_start_date(date, today).is_ok()
}
