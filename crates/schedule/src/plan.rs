use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Cadence;

pub const SLOTS_PER_WEEK: u32 = 4;

#[derive(Validate, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionPlan {
    pub cadence: Cadence,
    #[validate(range(min = 1, max = 366))]
    pub required_meal_slots: u32,
}

impl SubscriptionPlan {
    pub fn new(cadence: Cadence, required_meal_slots: u32) -> Self {
        Self {
            cadence,
            required_meal_slots,
        }
    }

    /// One week of deliveries, Sunday to Wednesday.
    pub fn weekly() -> Self {
        Self::new(Cadence::Weekly, SLOTS_PER_WEEK)
    }

    pub fn monthly(required_meal_slots: u32) -> Self {
        Self::new(Cadence::Monthly, required_meal_slots)
    }

    /// Number of delivery weeks the plan spans, the last one possibly partial.
    pub fn weeks(&self) -> u32 {
        self.required_meal_slots.div_ceil(SLOTS_PER_WEEK)
    }
}
