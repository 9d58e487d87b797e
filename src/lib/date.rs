//! Day-precise time management
//!
//! Dates are `YYYY-Mmm-DD`, not number of seconds. They know their weekday
//! and how to step to the following day, which is all that the subscription
//! window needs.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt;

/// A date with day-precision
///
/// Supports years in the range 1000..=9999, but weekday conversion
/// is not guaranteed accurate before 1900.
///
/// All methods execute in constant time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: Month,
    day: u8,
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{:02}", self.year, self.month, self.day)
    }
}

/// Twelve months in the year, identified by their 3-letter abbreviations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, PartialOrd, Ord)]
pub enum Month {
    Jan = 0,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Month from its 1-based number (`1` is `Jan`)
    pub fn from_number(n: u32) -> Option<Self> {
        Self::from_u32(n.checked_sub(1)?)
    }

    /// Number of days in this month of the given year
    pub fn count(self, year: u16) -> u8 {
        use Month::*;
        match self {
            Jan | Mar | May | Jul | Aug | Oct | Dec => 31,
            Apr | Jun | Sep | Nov => 30,
            Feb => if is_leap(year) { 29 } else { 28 },
        }
    }

    /// Full english name (`"January"`, `"February"`, ...)
    pub fn name(self) -> &'static str {
        use Month::*;
        match self {
            Jan => "January",
            Feb => "February",
            Mar => "March",
            Apr => "April",
            May => "May",
            Jun => "June",
            Jul => "July",
            Aug => "August",
            Sep => "September",
            Oct => "October",
            Nov => "November",
            Dec => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Weekday with Monday-first week convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
pub enum Weekday {
    Mon = 0,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// Uppercase abbreviations accepted in user input
const ABBREVIATIONS: [(&str, Weekday); 7] = [
    ("MON", Weekday::Mon),
    ("TUE", Weekday::Tue),
    ("WED", Weekday::Wed),
    ("THU", Weekday::Thu),
    ("FRI", Weekday::Fri),
    ("SAT", Weekday::Sat),
    ("SUN", Weekday::Sun),
];

impl Weekday {
    /// Look up an uppercase abbreviation (`"MON"`, `"TUE"`, ...)
    ///
    /// Case-sensitive: `"Mon"` and `"MONDAY"` are not recognized.
    pub fn from_abbrev(s: &str) -> Option<Self> {
        ABBREVIATIONS
            .iter()
            .find(|(abbrev, _)| *abbrev == s)
            .map(|(_, w)| *w)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Ways in which a date taken from user input can be wrong
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateError {
    /// year is outside of 1000..=9999
    UnsupportedYear(i64),
    /// Feb 29 of a non-leap year
    NotBissextile(i64),
    /// Feb 30 or Feb 31 or 31st day of a 30-day month
    MonthTooShort(Month, usize),
    /// day outside of 1..=31
    InvalidDay(usize),
}

impl Date {
    /// Last supported date
    pub const MAX: Date = Date { year: 9999, month: Month::Dec, day: 31 };

    /// Validate year-month-day into date
    pub fn from(year: i64, month: Month, day: usize) -> Result<Self, DateError> {
        if !(1000..=9999).contains(&year) {
            Err(DateError::UnsupportedYear(year))
        } else if day == 0 || day > 31 {
            Err(DateError::InvalidDay(day))
        } else if day <= month.count(year as u16) as usize {
            Ok(Self { year: year as u16, month, day: day as u8 })
        } else if day >= 30 {
            Err(DateError::MonthTooShort(month, day))
        } else {
            Err(DateError::NotBissextile(year))
        }
    }

    /// `self.day` accessor
    pub fn day(&self) -> u8 {
        self.day
    }

    /// `self.month` accessor
    pub fn month(&self) -> Month {
        self.month
    }

    /// `self.year` accessor
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Biject the dates with integers
    ///
    /// This indexing is guaranteed consistent in the sense that
    /// for any date `d`,
    ///
    ///     assert_eq!(d.index() + 1, d.next().index());
    pub fn index(self) -> usize {
        let leaps = {
            let years = if self.month <= Month::Feb {
                self.year as usize - 1
            } else {
                self.year as usize
            };
            // count leap years before current
            (years / 4) - (years / 100) + (years / 400)
        };
        let mut n = self.year as usize * 365 + self.day as usize;
        // partially elapsed current year
        n += [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334][self.month as usize];
        n += leaps;
        n
    }

    /// Get day of week
    pub fn weekday(self) -> Weekday {
        let offset = 2; // essentially the weekday of 0000-Jan-01
        Weekday::from_usize((self.index() - offset) % 7).unwrap()
    }

    /// The following day, crossing month and year boundaries
    ///
    /// Must not be called on `Date::MAX`, see `window_end`.
    pub fn next(self) -> Self {
        if self.month.count(self.year) == self.day {
            if self.month == Month::Dec {
                Self { year: self.year + 1, month: Month::Jan, day: 1 }
            } else {
                Self { month: Month::from_usize(self.month as usize + 1).unwrap(), day: 1, ..self }
            }
        } else {
            Self { day: self.day + 1, ..self }
        }
    }

    /// Last day of the `count` days that follow
    ///
    /// Fails if any of them is past `Date::MAX`, in which case
    /// `following(count)` must not be used.
    pub fn window_end(self, count: usize) -> Result<Self, DateError> {
        let mut d = self;
        for _ in 0..count {
            if d == Self::MAX {
                return Err(DateError::UnsupportedYear(Self::MAX.year as i64 + 1));
            }
            d = d.next();
        }
        Ok(d)
    }

    /// Iterator over the `count` days that follow, excluding `self`
    pub fn following(self, count: usize) -> impl Iterator<Item = Date> {
        std::iter::successors(Some(self.next()), |d| Some(d.next())).take(count)
    }
}

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = DateError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;
        let month = Month::from_number(date.month()).unwrap();
        Self::from(date.year() as i64, month, date.day() as usize)
    }
}

fn is_leap(year: u16) -> bool {
    if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DateError::*;
        match self {
            UnsupportedYear(y) => write!(f, "{} is outside of the supported range for years", y),
            NotBissextile(y) => write!(f, "{} is not bissextile, Feb 29 does not exist", y),
            MonthTooShort(m, d) => write!(
                f,
                "{} is a short month, it does not have a {}th day",
                m, d,
            ),
            InvalidDay(d) => write!(f, "{} is not a valid day", d),
        }
    }
}

impl std::error::Error for DateError {}

impl DateError {
    /// What message to show to help fix the date error
    pub fn fix_hint(self) -> String {
        use DateError::*;
        match self {
            UnsupportedYear(_) => "year should be between 1000 and 9999 inclusive".to_string(),
            NotBissextile(y) => format!("did you mean {y}-Feb-28 or {y}-Mar-01 ?", y = y),
            MonthTooShort(m, d) => format!("{} is only {} days long", m,
                if m == Month::Feb { 28.max(d - 1) } else { 30 }
            ),
            InvalidDay(d) => format!("{} is not in the range 1 ..= 31", d),
        }
    }
}
