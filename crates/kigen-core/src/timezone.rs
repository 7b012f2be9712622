use crate::error::CoreError;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Parse an IANA timezone name such as `Asia/Tokyo`.
pub fn parse_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone.trim())
        .map_err(|_| CoreError::InvalidTimezone(timezone.to_string()))
}

/// The UTC instant of `at` local time on `date`.
///
/// Ambiguous local times (fall back) resolve to the earlier instant. Times
/// skipped by a spring-forward gap move one hour later.
pub fn local_instant(date: NaiveDate, at: NaiveTime, tz: Tz) -> Option<DateTime<Utc>> {
    let resolve = |time: NaiveTime| {
        tz.from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    };
    resolve(at).or_else(|| {
        let shifted = at.overflowing_add_signed(chrono::Duration::hours(1)).0;
        resolve(shifted)
    })
}

/// Next time the local clock in `tz` reads `at`, strictly after `now`.
pub fn next_fire_time(now: DateTime<Utc>, tz: Tz, at: NaiveTime) -> Result<DateTime<Utc>, CoreError> {
    let mut date = now.with_timezone(&tz).date_naive();
    // A DST gap can swallow a slot; look a couple of days ahead.
    for _ in 0..3 {
        if let Some(instant) = local_instant(date, at, tz) {
            if instant > now {
                return Ok(instant);
            }
        }
        date = date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CoreError::InvalidInput("date out of range".to_string()))?;
    }
    Err(CoreError::InvalidInput(format!(
        "No valid local time {} in {}",
        at, tz
    )))
}
