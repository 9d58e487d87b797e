//! Recurring subscription rules and the customers that hold them

use std::collections::BTreeSet;
use std::fmt;

use crate::lib::date::Weekday;

/// A day of the month that exists in every month
///
/// Only `1..=28` is representable, so that a `DayOfMonth` rule
/// never silently skips a short month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay(u8);

impl MonthDay {
    pub const MAX: u8 = 28;

    pub fn new(day: u8) -> Option<Self> {
        if (1..=Self::MAX).contains(&day) {
            Some(Self(day))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Set of weekdays, without duplicates and in Monday-first order
pub type WeekdaySet = BTreeSet<Weekday>;

/// What a customer asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preference {
    /// the same day every month
    DayOfMonth(MonthDay),
    /// any of these days of the week; may be empty
    Weekdays(WeekdaySet),
    Daily,
    Never,
    /// classification failed, filtered out before registration
    Unknown,
}

impl Preference {
    pub fn is_known(&self) -> bool {
        !matches!(self, Preference::Unknown)
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Preference::*;
        match self {
            DayOfMonth(d) => write!(f, "day {:02} of the month", d.get()),
            Weekdays(days) => {
                write!(f, "on")?;
                for d in days {
                    write!(f, " {}", d)?;
                }
                Ok(())
            }
            Daily => write!(f, "daily"),
            Never => write!(f, "never"),
            Unknown => write!(f, "unknown"),
        }
    }
}

/// Identity of a customer within one run, `A` to `Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag(char);

impl Tag {
    pub const COUNT: usize = 26;

    /// The `n`-th tag, `None` once the alphabet is exhausted
    pub fn nth(n: usize) -> Option<Self> {
        if n < Self::COUNT {
            Some(Self((b'A' + n as u8) as char))
        } else {
            None
        }
    }

    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub tag: Tag,
    pub preference: Preference,
}
