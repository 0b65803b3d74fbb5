// Domain layer: case/report models and the case source port.

pub mod model;
pub mod ports;
