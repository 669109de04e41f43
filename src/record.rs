//! Input records.

pub mod read;

pub use read::Read;
