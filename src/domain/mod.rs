// Domain layer: user model, static choice data and the user store port.

pub mod model;
pub mod ports;
