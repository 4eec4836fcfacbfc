use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// IANA zone used to decide what "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Meal slots of a monthly plan when none is given on the command line
    #[serde(default = "default_monthly_meal_slots")]
    pub monthly_meal_slots: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            monthly_meal_slots: default_monthly_meal_slots(),
        }
    }
}

fn default_timezone() -> String {
    "Asia/Muscat".to_string()
}

fn default_monthly_meal_slots() -> u32 {
    16
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALBOX__SCHEDULE__TIMEZONE, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("schedule.timezone", default_timezone())?
            .set_default(
                "schedule.monthly_meal_slots",
                i64::from(default_monthly_meal_slots()),
            )?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALBOX")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if time_tz::timezones::get_by_name(&self.schedule.timezone).is_none() {
            return Err(format!("Unknown timezone: {}", self.schedule.timezone));
        }
        if self.schedule.monthly_meal_slots < 1 {
            return Err("Monthly plans need at least 1 meal slot".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Log format must be pretty or json, got {}",
                self.logging.format
            ));
        }
        Ok(())
    }

    /// Today in the configured time zone
    pub fn today(&self) -> time::Date {
        mealbox_schedule::today(&self.schedule.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_unknown_timezone() {
        let mut config = Config::default();
        config.schedule.timezone = "Mars/Olympus".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_monthly_slots() {
        let mut config = Config::default();
        config.schedule.monthly_meal_slots = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = Config::default();

        assert!(config.validate().is_ok());
    }
}
