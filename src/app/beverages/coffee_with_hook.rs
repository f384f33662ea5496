use crate::adapters::decider::RandomDecider;
use crate::core::{Beverage, SugarDecider};
use crate::utils::error::Result;

/// Coffee whose sugar step depends on an injected decision source, a coin flip
/// unless told otherwise.
pub struct CoffeeWithHook<D: SugarDecider = RandomDecider> {
    decider: D,
}

impl CoffeeWithHook<RandomDecider> {
    pub fn new() -> Self {
        Self {
            decider: RandomDecider,
        }
    }
}

impl Default for CoffeeWithHook<RandomDecider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: SugarDecider> CoffeeWithHook<D> {
    pub fn with_decider(decider: D) -> Self {
        Self { decider }
    }
}

impl<D: SugarDecider> Beverage for CoffeeWithHook<D> {
    fn name(&self) -> &str {
        "coffee"
    }

    fn brew(&self) -> &str {
        "用沸水冲泡咖啡"
    }

    fn pour_in_cup(&self) -> &str {
        "把咖啡倒進杯子"
    }

    fn add_sugar(&self) -> &str {
        "加糖"
    }

    fn customer_wants_sugar(&mut self) -> Result<bool> {
        self.decider.decide()
    }
}
