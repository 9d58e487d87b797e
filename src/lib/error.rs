//! Failures that stop a run
//!
//! Unrecognized preferences are not errors: they are dropped
//! while loading and never reach this module.

use thiserror::Error;

use crate::lib::{date::DateError, preference::Tag};
use crate::load::STDIN;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{count} customers registered but only {max} tags are available", max = Tag::COUNT)]
    RegistryOverflow { count: usize },

    #[error("Invalid reference date: {0}")]
    InvalidDate(#[from] DateError),

    #[error("Malformed reference date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("Cannot read {input}: {source}")]
    Io {
        input: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// What message to show to help fix the error
    pub fn fix_hint(&self) -> String {
        match self {
            Error::RegistryOverflow { .. } => {
                format!("split the input into runs of at most {} customers", Tag::COUNT)
            }
            Error::InvalidDate(e) => e.fix_hint(),
            Error::MalformedDate(_) => "write the date as e.g. 2018-03-31".to_string(),
            Error::Io { input, source } => match source.kind() {
                std::io::ErrorKind::InvalidData => format!("{} must be UTF-8 text", input),
                _ if input == STDIN => "check that standard input is still open".to_string(),
                _ => format!("check that '{}' exists and is readable", input),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
