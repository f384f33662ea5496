// Domain layer: value types and the traits the skeleton is written against.

pub mod model;
pub mod ports;
