pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::decider::{decider_fn, FixedDecider, PromptDecider, RandomDecider};
pub use crate::adapters::sink::{ConsoleSink, MemorySink, TracingSink};
pub use crate::app::beverages::CoffeeWithHook;
pub use crate::core::brewer::{prepare, BrewEngine};
pub use crate::domain::model::{BrewEvent, Receipt, Step};
pub use crate::domain::ports::{Beverage, NotificationSink, SugarDecider};
pub use crate::utils::error::{BrewError, Result};
