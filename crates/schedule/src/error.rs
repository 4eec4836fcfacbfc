use strum::AsRefStr;
use thiserror::Error;
use time::{Date, Weekday};

#[derive(Error, Debug, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ScheduleError {
    #[error("{date} falls on a {weekday}, deliveries run Sunday to Wednesday")]
    InvalidWeekday { date: Date, weekday: Weekday },

    #[error("{date} is today, deliveries cannot start on the same day")]
    SameDayNotAllowed { date: Date },

    #[error("Only {assigned} of {required} meal slots have a meal")]
    IncompleteSchedule { assigned: usize, required: usize },

    #[error("{assigned} meals assigned but the plan only has {required} slots")]
    OverAssigned { assigned: usize, required: usize },

    #[error("Slot not found: {0}")]
    SlotNotFound(usize),

    #[error("Slot {0} already has a meal")]
    SlotTaken(usize),

    #[error("Invalid meal: {0}")]
    InvalidMeal(String),

    #[error("Invalid plan: {0}")]
    InvalidPlan(#[from] validator::ValidationErrors),

    #[error("Schedule runs past the last supported calendar date")]
    DateOutOfRange,
}

impl ScheduleError {
    /// Stable reason code for the failed rule, e.g. `invalid_weekday`.
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    /// Date rule failures can be fixed by picking another date.
    pub fn is_date_rule(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidWeekday { .. } | ScheduleError::SameDayNotAllowed { .. }
        )
    }
}
