use anyhow::Result;
use clap::{Parser, Subcommand};
use mealbox::cli::{
    checkout::{self, CheckoutArgs},
    parse_date_arg,
    schedule::{self, ScheduleArgs},
};
use time::Date;

/// mealbox - meal subscription delivery scheduling
#[derive(Parser)]
#[command(name = "mealbox")]
#[command(about = "Plan meal subscription deliveries and build checkout payloads", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the earliest date a subscription can start
    StartDate {
        /// Override the current date
        #[arg(long, value_parser = parse_date_arg)]
        today: Option<Date>,
    },
    /// Check whether a date can be used as a start or delivery date
    CheckDate {
        #[arg(value_parser = parse_date_arg)]
        date: Date,

        /// Override the current date
        #[arg(long, value_parser = parse_date_arg)]
        today: Option<Date>,
    },
    /// Print the delivery schedule of a plan
    Schedule(ScheduleArgs),
    /// Validate a checkout request and print the subscription payload
    Checkout(CheckoutArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealbox::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealbox::observability::init_observability(
        "mealbox",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        &config.logging.format,
    )?;

    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::StartDate { today } => schedule::start_date(&config, today, &mut out),
        Commands::CheckDate { date, today } => {
            schedule::check_date(&config, date, today, &mut out)
        }
        Commands::Schedule(args) => schedule::schedule(&config, args, &mut out),
        Commands::Checkout(args) => checkout::checkout(&config, args, &mut out),
    }
}
