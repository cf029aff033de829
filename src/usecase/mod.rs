//! Usecase layer: timed algorithm runs + events.

pub mod analyze;
pub mod event;
pub mod stats;
