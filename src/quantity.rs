#[macro_use]
pub mod macros;

pub mod distance;
pub mod efficiency;
pub mod energy;
pub mod proportions;
pub mod temperature;
