use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use mealbox_schedule::{Cadence, Schedule, SubscriptionPlan};
use time::Date;

use super::{parse_date_arg, resolve_today, rule_error};
use crate::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CadenceArg {
    Weekly,
    Monthly,
}

impl From<CadenceArg> for Cadence {
    fn from(value: CadenceArg) -> Self {
        match value {
            CadenceArg::Weekly => Cadence::Weekly,
            CadenceArg::Monthly => Cadence::Monthly,
        }
    }
}

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Subscription cadence
    #[arg(long, value_enum, default_value = "weekly")]
    pub cadence: CadenceArg,

    /// Required meal slots (4 for weekly, config default for monthly)
    #[arg(long)]
    pub slots: Option<u32>,

    /// First delivery date, defaults to the next valid start date
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<Date>,

    /// Override the current date
    #[arg(long, value_parser = parse_date_arg)]
    pub today: Option<Date>,

    /// Print the schedule as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn start_date(config: &Config, today: Option<Date>, out: &mut impl Write) -> Result<()> {
    let today = resolve_today(config, today);
    let start = mealbox_schedule::next_valid_start_date(today).map_err(rule_error)?;

    tracing::debug!(today = %today, start = %start, "next valid start date");
    writeln!(out, "{start}")?;

    Ok(())
}

pub fn check_date(
    config: &Config,
    date: Date,
    today: Option<Date>,
    out: &mut impl Write,
) -> Result<()> {
    let today = resolve_today(config, today);
    mealbox_schedule::check_start_date(date, today).map_err(rule_error)?;

    writeln!(out, "ok")?;

    Ok(())
}

pub fn schedule(config: &Config, args: ScheduleArgs, out: &mut impl Write) -> Result<()> {
    let today = resolve_today(config, args.today);
    let cadence = Cadence::from(args.cadence);
    let slots = args.slots.unwrap_or(match cadence {
        Cadence::Weekly => SubscriptionPlan::weekly().required_meal_slots,
        Cadence::Monthly => config.schedule.monthly_meal_slots,
    });
    let start = match args.start {
        Some(start) => start,
        None => mealbox_schedule::next_valid_start_date(today).map_err(rule_error)?,
    };

    let schedule = Schedule::generate(start, SubscriptionPlan::new(cadence, slots), today)
        .map_err(rule_error)?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&schedule)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<4}  {:<4}  {:<9}  {:<10}  key",
        "slot", "week", "day", "date"
    )?;
    for slot in schedule.slots() {
        writeln!(
            out,
            "{:<4}  {:<4}  {:<9}  {:<10}  {}",
            slot.slot_index,
            slot.week_number,
            slot.base_weekday.as_ref(),
            slot.computed_date.to_string(),
            slot.key
        )?;
    }

    Ok(())
}
