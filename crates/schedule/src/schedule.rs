use std::collections::HashMap;

use serde::Serialize;
use time::Date;
use validator::Validate;

use crate::{
    DeliveryDay, SLOTS_PER_WEEK, ScheduleError, ScheduleSlot, SlotKey, SubscriptionPlan,
    check_start_date,
};

/// Walks forward from `start_date` and emits one slot per Sunday to Wednesday
/// until the plan's slot count is reached. Thursday to Saturday are skipped.
///
/// The plan is not validated here, the walk stops early at the last supported
/// calendar date.
pub fn generate_schedule(start_date: Date, plan: &SubscriptionPlan) -> Vec<ScheduleSlot> {
    let required = plan.required_meal_slots as usize;
    // A year of deliveries at most, larger plans grow as the walk goes
    let mut slots = Vec::with_capacity(required.min(SLOTS_PER_WEEK as usize * 53));
    let mut day = start_date;

    while slots.len() < required {
        if let Some(base_weekday) = DeliveryDay::from_weekday(day.weekday()) {
            let slot_index = slots.len();
            let week_number = slot_index as u32 / SLOTS_PER_WEEK + 1;

            slots.push(ScheduleSlot::new(
                plan.cadence,
                slot_index,
                week_number,
                base_weekday,
                day,
            ));
        }

        let Some(next) = day.next_day() else {
            break;
        };

        day = next;
    }

    slots
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub start_date: Date,
    pub plan: SubscriptionPlan,
    slots: Vec<ScheduleSlot>,
}

impl Schedule {
    pub fn generate(
        start_date: Date,
        plan: SubscriptionPlan,
        today: Date,
    ) -> Result<Self, ScheduleError> {
        plan.validate()?;
        check_start_date(start_date, today)?;

        let slots = generate_schedule(start_date, &plan);
        if slots.len() != plan.required_meal_slots as usize {
            return Err(ScheduleError::DateOutOfRange);
        }

        tracing::debug!(
            start_date = %start_date,
            cadence = %plan.cadence,
            slots = slots.len(),
            "schedule generated"
        );

        Ok(Self {
            start_date,
            plan,
            slots,
        })
    }

    /// Builds a fresh schedule for new inputs. Custom dates are carried over
    /// for slots whose key is generated again, all others are dropped.
    pub fn recompute(
        &self,
        start_date: Date,
        plan: SubscriptionPlan,
        today: Date,
    ) -> Result<Self, ScheduleError> {
        let mut next = Self::generate(start_date, plan, today)?;

        let overrides = self
            .slots
            .iter()
            .filter_map(|slot| slot.custom_date().map(|date| (&slot.key, date)))
            .collect::<HashMap<&SlotKey, Date>>();

        let mut carried = 0;
        for slot in next.slots.iter_mut() {
            let Some(date) = overrides.get(&slot.key) else {
                continue;
            };

            if slot.apply_custom_date(*date, today).is_ok() {
                carried += 1;
            }
        }

        if carried < overrides.len() {
            tracing::warn!(
                carried,
                dropped = overrides.len() - carried,
                "custom dates dropped on schedule recompute"
            );
        }

        Ok(next)
    }

    pub fn slots(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    pub fn slot(&self, slot_index: usize) -> Option<&ScheduleSlot> {
        self.slots.get(slot_index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn apply_custom_date(
        &mut self,
        slot_index: usize,
        candidate: Date,
        today: Date,
    ) -> Result<(), ScheduleError> {
        self.slots
            .get_mut(slot_index)
            .ok_or(ScheduleError::SlotNotFound(slot_index))?
            .apply_custom_date(candidate, today)
    }

    pub fn reset_custom_date(&mut self, slot_index: usize) -> Result<(), ScheduleError> {
        self.slots
            .get_mut(slot_index)
            .ok_or(ScheduleError::SlotNotFound(slot_index))?
            .reset_custom_date();

        Ok(())
    }

    /// Slots in delivery order, by effective date then slot index.
    pub fn by_effective_date(&self) -> Vec<&ScheduleSlot> {
        let mut slots = self.slots.iter().collect::<Vec<_>>();
        slots.sort_by_key(|slot| (slot.effective_date(), slot.slot_index));
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2025 - 09 - 03);

    #[test]
    fn test_zero_slots_is_empty() {
        let plan = SubscriptionPlan::monthly(0);
        assert!(generate_schedule(date!(2025 - 09 - 07), &plan).is_empty());
    }

    #[test]
    fn test_generate_rejects_invalid_plan() {
        let err = Schedule::generate(date!(2025 - 09 - 07), SubscriptionPlan::monthly(0), TODAY)
            .unwrap_err();
        assert_eq!(err.code(), "invalid_plan");
    }

    #[test]
    fn test_generate_rejects_invalid_start() {
        let err = Schedule::generate(date!(2025 - 09 - 04), SubscriptionPlan::weekly(), TODAY)
            .unwrap_err();
        assert_eq!(err.code(), "invalid_weekday");

        let err = Schedule::generate(TODAY, SubscriptionPlan::weekly(), TODAY).unwrap_err();
        assert_eq!(err.code(), "same_day_not_allowed");
    }

    #[test]
    fn test_unknown_slot() {
        let mut schedule =
            Schedule::generate(date!(2025 - 09 - 07), SubscriptionPlan::weekly(), TODAY).unwrap();

        assert!(matches!(
            schedule.apply_custom_date(4, date!(2025 - 09 - 14), TODAY),
            Err(ScheduleError::SlotNotFound(4))
        ));
        assert!(matches!(
            schedule.reset_custom_date(10),
            Err(ScheduleError::SlotNotFound(10))
        ));
    }

    #[test]
    fn test_by_effective_date() {
        let mut schedule =
            Schedule::generate(date!(2025 - 09 - 07), SubscriptionPlan::weekly(), TODAY).unwrap();
        schedule
            .apply_custom_date(0, date!(2025 - 09 - 14), TODAY)
            .unwrap();

        let order = schedule
            .by_effective_date()
            .iter()
            .map(|slot| slot.slot_index)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}
