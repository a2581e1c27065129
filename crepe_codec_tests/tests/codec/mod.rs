pub mod literals;
pub mod random;
pub mod tags;
