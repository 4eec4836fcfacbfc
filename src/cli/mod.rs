pub mod checkout;
pub mod schedule;

use mealbox_schedule::ScheduleError;
use time::Date;

use crate::Config;

/// Parses `YYYY-MM-DD` command line arguments
pub fn parse_date_arg(value: &str) -> Result<Date, String> {
    mealbox_schedule::parse_date(value).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// `--today` if given, the configured time zone's date otherwise
pub fn resolve_today(config: &Config, today: Option<Date>) -> Date {
    today.unwrap_or_else(|| config.today())
}

pub(crate) fn rule_error(err: ScheduleError) -> anyhow::Error {
    anyhow::anyhow!("{}: {err}", err.code())
}
