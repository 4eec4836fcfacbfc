use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Cadence, DeliveryDay, MealAssignment, MealSelection, MealType, Schedule, ScheduleError, SubscriptionPlan,
};

/// One delivery in the subscription-creation request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CheckoutMeal {
    pub slot_index: usize,
    pub week_number: u32,
    pub date: Date,
    pub weekday: DeliveryDay,
    pub meal_id: String,
    pub meal_type: MealType,
    pub customized: bool,
}

/// Finalized subscription handed to persistence and payment initiation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CheckoutPayload {
    pub cadence: Cadence,
    pub required_meal_slots: u32,
    pub start_date: Date,
    pub meals: Vec<CheckoutMeal>,
}

impl CheckoutPayload {
    pub fn build(schedule: &Schedule, selection: &MealSelection) -> Result<Self, ScheduleError> {
        selection.validate(schedule)?;

        let mut meals = Vec::with_capacity(selection.len());
        for slot in schedule.by_effective_date() {
            let assignment = selection
                .get(slot.slot_index)
                .ok_or(ScheduleError::IncompleteSchedule {
                    assigned: selection.len(),
                    required: schedule.len(),
                })?;
            let date = slot.effective_date();
            let weekday =
                DeliveryDay::from_weekday(date.weekday()).ok_or(ScheduleError::InvalidWeekday {
                    date,
                    weekday: date.weekday(),
                })?;

            meals.push(CheckoutMeal {
                slot_index: slot.slot_index,
                week_number: slot.week_number,
                date,
                weekday,
                meal_id: assignment.meal_id.to_owned(),
                meal_type: assignment.meal_type,
                customized: slot.is_customized(),
            });
        }

        tracing::info!(
            cadence = %schedule.plan.cadence,
            start_date = %schedule.start_date,
            meals = meals.len(),
            "checkout payload built"
        );

        Ok(Self {
            cadence: schedule.plan.cadence,
            required_meal_slots: schedule.plan.required_meal_slots,
            start_date: schedule.start_date,
            meals,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CustomDate {
    pub slot_index: usize,
    pub date: Date,
}

/// Everything the ordering flow collects before checkout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub start_date: Date,
    pub plan: SubscriptionPlan,
    #[serde(default)]
    pub custom_dates: Vec<CustomDate>,
    pub meals: Vec<MealAssignment>,
}

impl CheckoutRequest {
    pub fn checkout(self, today: Date) -> Result<CheckoutPayload, ScheduleError> {
        let mut schedule = Schedule::generate(self.start_date, self.plan, today)?;

        for custom in &self.custom_dates {
            schedule.apply_custom_date(custom.slot_index, custom.date, today)?;
        }

        let selection = MealSelection::from_assignments(self.meals);

        CheckoutPayload::build(&schedule, &selection)
    }
}
