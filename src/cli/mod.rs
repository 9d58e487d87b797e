//! Everything that talks to the terminal

pub mod logger;
pub mod table;
