//! Tests for CLI commands (start-date, check-date, schedule, checkout)

use mealbox::{
    Config,
    cli::{
        checkout::{CheckoutArgs, checkout},
        schedule::{CadenceArg, ScheduleArgs, check_date, schedule, start_date},
    },
};
use temp_dir::TempDir;
use time::macros::date;

fn run(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> anyhow::Result<String> {
    let mut out = Vec::new();
    f(&mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_start_date_skips_to_sunday() -> anyhow::Result<()> {
    let config = Config::default();
    let output = run(|out| start_date(&config, Some(date!(2025 - 09 - 03)), out))?;

    assert_eq!(output, "2025-09-07\n");

    Ok(())
}

#[test]
fn test_check_date() -> anyhow::Result<()> {
    let config = Config::default();
    let today = Some(date!(2025 - 09 - 03));

    let output = run(|out| check_date(&config, date!(2025 - 09 - 08), today, out))?;
    assert_eq!(output, "ok\n");

    let err = run(|out| check_date(&config, date!(2025 - 09 - 04), today, out)).unwrap_err();
    assert!(err.to_string().starts_with("invalid_weekday:"));

    let err = run(|out| check_date(&config, date!(2025 - 09 - 03), today, out)).unwrap_err();
    assert!(err.to_string().starts_with("same_day_not_allowed:"));

    Ok(())
}

#[test]
fn test_weekly_schedule_table() -> anyhow::Result<()> {
    let config = Config::default();
    let args = ScheduleArgs {
        cadence: CadenceArg::Weekly,
        slots: None,
        start: None,
        today: Some(date!(2025 - 09 - 03)),
        json: false,
    };

    let output = run(|out| schedule(&config, args, out))?;
    let lines = output.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 5);
    assert!(lines[1].contains("2025-09-07"));
    assert!(lines[1].ends_with("meal_0_sunday"));
    assert!(lines[4].contains("2025-09-10"));
    assert!(lines[4].ends_with("meal_3_wednesday"));

    Ok(())
}

#[test]
fn test_monthly_schedule_uses_configured_slots() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.schedule.monthly_meal_slots = 6;
    let args = ScheduleArgs {
        cadence: CadenceArg::Monthly,
        slots: None,
        start: Some(date!(2025 - 09 - 07)),
        today: Some(date!(2025 - 09 - 03)),
        json: true,
    };

    let output = run(|out| schedule(&config, args, out))?;
    let json: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(json["plan"]["cadence"], "monthly");
    assert_eq!(json["slots"].as_array().map(|s| s.len()), Some(6));
    assert_eq!(json["slots"][5]["key"], "monday_week2");
    assert_eq!(json["slots"][5]["computed_date"], "2025-09-15");

    Ok(())
}

#[test]
fn test_schedule_rejects_thursday_start() {
    let config = Config::default();
    let args = ScheduleArgs {
        cadence: CadenceArg::Weekly,
        slots: None,
        start: Some(date!(2025 - 09 - 11)),
        today: Some(date!(2025 - 09 - 03)),
        json: false,
    };

    let err = run(|out| schedule(&config, args, out)).unwrap_err();
    assert!(err.to_string().starts_with("invalid_weekday:"));
}

#[test]
fn test_checkout_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("request.json");
    std::fs::write(
        &path,
        r#"{
            "start_date": "2025-09-07",
            "plan": { "cadence": "weekly", "required_meal_slots": 4 },
            "meals": [
                { "slot_index": 0, "meal_id": "m-1" },
                { "slot_index": 1, "meal_id": "m-2" },
                { "slot_index": 2, "meal_id": "m-3" },
                { "slot_index": 3, "meal_id": "m-4", "meal_type": "dinner" }
            ]
        }"#,
    )?;

    let config = Config::default();
    let args = CheckoutArgs {
        file: path,
        today: Some(date!(2025 - 09 - 03)),
    };
    let output = run(|out| checkout(&config, args, out))?;
    let json: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(json["required_meal_slots"], 4);
    assert_eq!(json["meals"][0]["date"], "2025-09-07");
    assert_eq!(json["meals"][0]["weekday"], "sunday");
    assert_eq!(json["meals"][3]["meal_type"], "dinner");

    Ok(())
}

#[test]
fn test_checkout_incomplete_request() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("request.json");
    std::fs::write(
        &path,
        r#"{
            "start_date": "2025-09-07",
            "plan": { "cadence": "monthly", "required_meal_slots": 8 },
            "meals": [{ "slot_index": 0, "meal_id": "m-1" }]
        }"#,
    )?;

    let args = CheckoutArgs {
        file: path,
        today: Some(date!(2025 - 09 - 03)),
    };
    let err = run(|out| checkout(&Config::default(), args, out)).unwrap_err();

    assert_eq!(
        err.to_string(),
        "incomplete_schedule: Only 1 of 8 meal slots have a meal"
    );

    Ok(())
}
