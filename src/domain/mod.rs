// Domain layer: plan models and ports (interfaces) to the outside world.

pub mod model;
pub mod ports;
