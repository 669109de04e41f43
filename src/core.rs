//! Core types used across the crate.

pub mod direction;
pub mod interval;

pub use direction::Direction;
pub use interval::DirectedInterval;
pub use interval::Interval;
