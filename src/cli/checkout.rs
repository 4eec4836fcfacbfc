use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use mealbox_schedule::CheckoutRequest;
use time::Date;

use super::{parse_date_arg, resolve_today, rule_error};
use crate::Config;

#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// JSON checkout request (start date, plan, custom dates, meals)
    #[arg(long)]
    pub file: PathBuf,

    /// Override the current date
    #[arg(long, value_parser = parse_date_arg)]
    pub today: Option<Date>,
}

pub fn checkout(config: &Config, args: CheckoutArgs, out: &mut impl Write) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let request: CheckoutRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid checkout request in {}", args.file.display()))?;

    let today = resolve_today(config, args.today);
    let payload = request.checkout(today).map_err(rule_error)?;

    writeln!(out, "{}", payload.to_json()?)?;

    Ok(())
}
