use crate::config::Config;
use chrono::{NaiveDate, NaiveTime};
use kigen_core::clock::{Clock, SystemClock};
use kigen_core::due::DueDateParser;
use kigen_core::error::CoreError;
use kigen_core::reminder::ReminderPolicy;

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod list;
pub mod parse;
pub mod postpone;
pub mod remind;
pub mod report;
pub mod search;
pub mod stats;
pub mod this_week;

/// Who is acting, and the settings every command shares.
pub struct Session<C: Clock> {
    pub user_id: String,
    pub user_name: String,
    pub clock: C,
    pub parser: DueDateParser,
    pub policy: ReminderPolicy,
    pub reminder_at: NaiveTime,
    pub evening_cutoff_hour: u32,
}

impl Session<SystemClock> {
    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        Ok(Self {
            user_id: config.user.id.clone(),
            user_name: config.user.name.clone(),
            clock: SystemClock::new(config.timezone()?),
            parser: DueDateParser::new(config.parser.weekday_matching),
            policy: config.reminder.policy(),
            reminder_at: config.reminder.time()?,
            evening_cutoff_hour: config.reminder.evening_cutoff_hour,
        })
    }
}

impl<C: Clock> Session<C> {
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
