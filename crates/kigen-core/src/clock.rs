//! Time sources.
//!
//! Command handlers receive a [`Clock`] instead of reading the system time, so
//! "today" is always an explicit calendar date in the group's time zone.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn timezone(&self) -> Tz;

    fn local_now(&self) -> DateTime<Tz> {
        self.now().with_timezone(&self.timezone())
    }

    fn today(&self) -> NaiveDate {
        self.local_now().date_naive()
    }

    /// Calendar date of `instant` in this clock's time zone.
    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.timezone().from_utc_datetime(&instant.naive_utc()).date_naive()
    }

    fn is_past_hour(&self, hour: u32) -> bool {
        self.local_now().hour() >= hour
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    tz: Tz,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self { instant, tz }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}
