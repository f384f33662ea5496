// Adapters layer: concrete sinks and decision sources the skeleton is wired to.

pub mod decider;
pub mod sink;
