//! Delivery-day scheduling for meal subscriptions.
//!
//! A subscription start date and a plan are turned into one [`ScheduleSlot`] per
//! required meal, each bound to a Sunday, Monday, Tuesday or Wednesday. Meals are
//! then assigned to slots through a [`MealSelection`] and the finished set is
//! turned into a [`CheckoutPayload`].

mod checkout;
mod date;
mod error;
mod plan;
mod schedule;
mod selection;
mod slot;
mod types;

pub use checkout::*;
pub use date::*;
pub use error::*;
pub use plan::*;
pub use schedule::*;
pub use selection::*;
pub use slot::*;
pub use types::*;
