//! Scene state
//!
//! The viewer shows one of two pre-bound solids at a time.

mod solid_set;

pub use solid_set::SolidSet;
