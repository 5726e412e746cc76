// Domain layer: models and ports only. No HTTP or filesystem code lives here.

pub mod model;
pub mod ports;
