use serde::{Deserialize, Serialize};
use std::fmt;

/// One point in the brewing skeleton, in the order it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    BoilWater,
    Brew,
    PourInCup,
    Decide,
    AddSugar,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::BoilWater => "boil_water",
            Step::Brew => "brew",
            Step::PourInCup => "pour_in_cup",
            Step::Decide => "decide",
            Step::AddSugar => "add_sugar",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrewEvent {
    pub step: Step,
    pub message: String,
}

impl BrewEvent {
    pub fn new(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            message: message.into(),
        }
    }
}

impl fmt::Display for BrewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.step, self.message)
    }
}

/// What one run of the skeleton produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub beverage: String,
    pub sugar_added: bool,
    pub events: Vec<BrewEvent>,
}

impl Receipt {
    pub fn steps(&self) -> Vec<Step> {
        self.events.iter().map(|event| event.step).collect()
    }
}
