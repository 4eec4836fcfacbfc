use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{MealType, Schedule, ScheduleError};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MealAssignment {
    pub slot_index: usize,
    pub meal_id: String,
    #[serde(default)]
    pub meal_type: MealType,
}

/// Meals picked for the slots of one schedule, at most one per slot.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct MealSelection {
    assignments: Vec<MealAssignment>,
}

impl MealSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps assignments as received, nothing is checked until [`MealSelection::validate`].
    pub fn from_assignments(assignments: Vec<MealAssignment>) -> Self {
        Self { assignments }
    }

    /// Puts a meal in a slot and returns the meal it replaced.
    pub fn assign(
        &mut self,
        schedule: &Schedule,
        slot_index: usize,
        meal_id: impl Into<String>,
        meal_type: MealType,
    ) -> Result<Option<MealAssignment>, ScheduleError> {
        let meal_id = meal_id.into();

        if schedule.slot(slot_index).is_none() {
            return Err(ScheduleError::SlotNotFound(slot_index));
        }

        if meal_id.trim().is_empty() {
            return Err(ScheduleError::InvalidMeal("meal id is empty".to_owned()));
        }

        let replaced = self.unassign(slot_index);
        self.assignments.push(MealAssignment {
            slot_index,
            meal_id,
            meal_type,
        });

        Ok(replaced)
    }

    pub fn unassign(&mut self, slot_index: usize) -> Option<MealAssignment> {
        let position = self
            .assignments
            .iter()
            .position(|a| a.slot_index == slot_index)?;

        Some(self.assignments.remove(position))
    }

    pub fn get(&self, slot_index: usize) -> Option<&MealAssignment> {
        self.assignments.iter().find(|a| a.slot_index == slot_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MealAssignment> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn unassigned_slots(&self, schedule: &Schedule) -> Vec<usize> {
        schedule
            .slots()
            .iter()
            .map(|slot| slot.slot_index)
            .filter(|index| self.get(*index).is_none())
            .collect()
    }

    /// Pre-submit check: every slot of the schedule holds exactly one meal.
    pub fn validate(&self, schedule: &Schedule) -> Result<(), ScheduleError> {
        let required = schedule.plan.required_meal_slots as usize;
        let assigned = self.assignments.len();

        if assigned > required {
            return Err(ScheduleError::OverAssigned { assigned, required });
        }

        let mut seen = HashSet::with_capacity(assigned);
        for assignment in &self.assignments {
            if schedule.slot(assignment.slot_index).is_none() {
                return Err(ScheduleError::SlotNotFound(assignment.slot_index));
            }

            if assignment.meal_id.trim().is_empty() {
                return Err(ScheduleError::InvalidMeal(format!(
                    "slot {} has an empty meal id",
                    assignment.slot_index
                )));
            }

            if !seen.insert(assignment.slot_index) {
                return Err(ScheduleError::SlotTaken(assignment.slot_index));
            }
        }

        if assigned < required {
            return Err(ScheduleError::IncompleteSchedule { assigned, required });
        }

        Ok(())
    }
}
