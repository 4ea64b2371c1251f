pub mod base_unit;

pub use base_unit::BaseUnit;
