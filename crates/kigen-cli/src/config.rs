use crate::cli::Cli;
use crate::timezone::detect_system_timezone;
use chrono::NaiveTime;
use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use kigen_core::due::WeekdayMatching;
use kigen_core::error::CoreError;
use kigen_core::reminder::ReminderPolicy;
use kigen_core::timezone::parse_timezone;
use serde::Deserialize;

const CONFIG_FILE: &str = "kigen.toml";
const ENV_PREFIX: &str = "KIGEN_";

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// IANA name; "today" is computed in this zone
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct UserConfig {
    pub id: String,
    pub name: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        let login = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "me".to_string());
        Self {
            id: login.clone(),
            name: login,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReminderConfig {
    /// Local time of the daily digest, `HH:MM`
    pub at: String,
    pub horizon_days: u64,
    pub per_owner_limit: usize,
    /// From this hour on Fridays, "this week" means next Friday
    pub evening_cutoff_hour: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        let policy = ReminderPolicy::default();
        Self {
            at: "09:00".to_string(),
            horizon_days: policy.horizon_days,
            per_owner_limit: policy.per_owner_limit,
            evening_cutoff_hour: 17,
        }
    }
}

impl ReminderConfig {
    pub fn time(&self) -> Result<NaiveTime, CoreError> {
        NaiveTime::parse_from_str(self.at.trim(), "%H:%M").map_err(|_| {
            CoreError::InvalidInput(format!(
                "reminder.at must look like 09:00, got '{}'",
                self.at
            ))
        })
    }

    pub fn policy(&self) -> ReminderPolicy {
        ReminderPolicy {
            horizon_days: self.horizon_days,
            per_owner_limit: self.per_owner_limit,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParserConfig {
    pub weekday_matching: WeekdayMatching,
}

fn default_database_path() -> String {
    "kigen.db".to_string()
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    /// Command-line options win over the file and environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(database) = &cli.database {
            self.database_path = database.clone();
        }
        if let Some(id) = &cli.user_id {
            self.user.id = id.clone();
        }
        if let Some(name) = &cli.user_name {
            self.user.name = name.clone();
        }
        self
    }

    pub fn timezone(&self) -> Result<Tz, CoreError> {
        parse_timezone(&self.timezone)
    }
}
