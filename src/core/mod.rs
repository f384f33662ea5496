pub mod brewer;

pub use crate::domain::model::{BrewEvent, Receipt, Step};
pub use crate::domain::ports::{Beverage, NotificationSink, SugarDecider};
pub use crate::utils::error::Result;
