use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Weekday;

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Weekly,
    Monthly,
}

/// The weekdays meals are delivered on.
#[derive(
    Serialize,
    Deserialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeliveryDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
}

impl DeliveryDay {
    /// Returns `None` for Thursday, Friday and Saturday.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Sunday => Some(DeliveryDay::Sunday),
            Weekday::Monday => Some(DeliveryDay::Monday),
            Weekday::Tuesday => Some(DeliveryDay::Tuesday),
            Weekday::Wednesday => Some(DeliveryDay::Wednesday),
            Weekday::Thursday | Weekday::Friday | Weekday::Saturday => None,
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            DeliveryDay::Sunday => Weekday::Sunday,
            DeliveryDay::Monday => Weekday::Monday,
            DeliveryDay::Tuesday => Weekday::Tuesday,
            DeliveryDay::Wednesday => Weekday::Wednesday,
        }
    }
}

impl TryFrom<Weekday> for DeliveryDay {
    type Error = Weekday;

    fn try_from(value: Weekday) -> Result<Self, Self::Error> {
        DeliveryDay::from_weekday(value).ok_or(value)
    }
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
}
