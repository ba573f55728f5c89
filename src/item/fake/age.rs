use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::error::BatchError;

/// `YYYY-MM-DD`, zero padded.
pub const BIRTHDAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const HOURS_PER_YEAR: f64 = 24.0 * 365.0;

/// Computes an age in whole years from a `YYYY-MM-DD` birthday, relative to now.
///
/// See [`calculate_age_at`].
pub fn calculate_age(birthday: &str) -> Result<i64, BatchError> {
    calculate_age_at(birthday, OffsetDateTime::now_utc())
}

/// Computes an age in whole years from a `YYYY-MM-DD` birthday, relative to `now`.
///
/// The birthday is taken as midnight UTC. The elapsed time is counted in hours,
/// divided into 365-day years and rounded up, so a person born exactly thirty
/// years ago is 31. A birthday after `now` gives zero or a negative age.
///
/// # Errors
///
/// Returns [`BatchError::Parse`] if `birthday` does not match `YYYY-MM-DD`.
pub fn calculate_age_at(birthday: &str, now: OffsetDateTime) -> Result<i64, BatchError> {
    let birth_date = Date::parse(birthday, BIRTHDAY_FORMAT)?;
    let elapsed = now - birth_date.midnight().assume_utc();
    let years = elapsed.as_seconds_f64() / 3600.0 / HOURS_PER_YEAR;
    Ok(years.ceil() as i64)
}
