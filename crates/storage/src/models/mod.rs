pub mod boxer;
pub mod weight_class;

pub use boxer::Boxer;
pub use weight_class::{MIN_WEIGHT, WeightClass};
