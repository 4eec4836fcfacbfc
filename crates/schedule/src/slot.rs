use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Cadence, DeliveryDay, ScheduleError, check_start_date};

/// Identity of a slot across recomputations.
///
/// Weekly plans use `meal_{index}_{day}`, monthly plans `{day}_week{n}`. The two
/// formats never match each other, so switching cadence drops custom dates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SlotKey(String);

impl SlotKey {
    pub fn new(cadence: Cadence, slot_index: usize, day: DeliveryDay, week_number: u32) -> Self {
        match cadence {
            Cadence::Weekly => Self(format!("meal_{slot_index}_{day}")),
            Cadence::Monthly => Self(format!("{day}_week{week_number}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialize only, a slot is always built by the scheduler so its override
/// has passed the date rules.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub key: SlotKey,
    pub slot_index: usize,
    pub week_number: u32,
    pub base_weekday: DeliveryDay,
    pub computed_date: Date,
    custom_date: Option<Date>,
    is_customized: bool,
}

impl ScheduleSlot {
    pub fn new(
        cadence: Cadence,
        slot_index: usize,
        week_number: u32,
        base_weekday: DeliveryDay,
        computed_date: Date,
    ) -> Self {
        Self {
            key: SlotKey::new(cadence, slot_index, base_weekday, week_number),
            slot_index,
            week_number,
            base_weekday,
            computed_date,
            custom_date: None,
            is_customized: false,
        }
    }

    pub fn custom_date(&self) -> Option<Date> {
        self.custom_date
    }

    pub fn is_customized(&self) -> bool {
        self.is_customized
    }

    /// The date the meal is actually delivered on.
    pub fn effective_date(&self) -> Date {
        match self.custom_date {
            Some(date) if self.is_customized => date,
            _ => self.computed_date,
        }
    }

    /// Overrides the delivery date. A rejected date leaves the slot untouched.
    pub fn apply_custom_date(&mut self, candidate: Date, today: Date) -> Result<(), ScheduleError> {
        if let Err(err) = check_start_date(candidate, today) {
            tracing::debug!(
                slot = %self.key,
                candidate = %candidate,
                code = err.code(),
                "custom date rejected"
            );

            return Err(err);
        }

        self.custom_date = Some(candidate);
        self.is_customized = true;

        Ok(())
    }

    pub fn reset_custom_date(&mut self) {
        self.custom_date = None;
        self.is_customized = false;
    }
}
