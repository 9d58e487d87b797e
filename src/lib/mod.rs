//! Implementations that are useful accross the whole project
//!
//! Date management, preference definition, matching and aggregation

pub mod date;
pub mod error;
pub mod preference;
pub mod report;
pub mod schedule;
