use std::fmt;

use crate::lib::{
    date::Date,
    preference::Customer,
    report::{DaySubscriptions, Report},
};

/// Gap between the date column and the subscriber column
const GAP: &str = "   ";
/// Between two tags of the same line
const SEPARATOR: &str = ", ";

struct DateFmt(Date);

struct TagsFmt<'d>(&'d [Customer]);

impl fmt::Display for DateFmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.0;
        write!(
            f,
            "{} {:02}-{}-{:04}",
            d.weekday(),
            d.day(),
            d.month().name(),
            d.year()
        )
    }
}

impl fmt::Display for TagsFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tags = self.0.iter().map(|c| c.tag);
        if let Some(first) = tags.next() {
            write!(f, "{}", first)?;
            for t in tags {
                write!(f, "{}{}", SEPARATOR, t)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for DaySubscriptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", DateFmt(self.date), GAP, TagsFmt(&self.subscribers))
    }
}

/// One line per day, each terminated by a newline
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for day in self.days() {
            writeln!(f, "{}", day)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
    use super::*;
    use crate::lib::{
        date::Month::*,
        preference::{Preference, Tag},
        report::WINDOW,
    };

    macro_rules! dt {
        ( $y:tt - $m:tt - $d:tt ) => {
            Date::from($y, $m, $d).unwrap()
        }
    }

    macro_rules! render {
        ( $date:expr, [ $( $tag:expr ),* ] => $fmt:expr ) => {{
            let subscribers = vec![ $( Customer {
                tag: Tag::nth($tag).unwrap(),
                preference: Preference::Daily,
            } ),* ];
            let day = DaySubscriptions { date: $date, subscribers };
            assert_eq!(&format!("{}", day), $fmt);
        }}
    }

    #[test]
    fn day_lines() {
        render!(dt!(2018-Apr-1), [2] => "Sun 01-April-2018   C");
        render!(dt!(2018-Apr-2), [1, 2] => "Mon 02-April-2018   B, C");
        render!(dt!(2018-Dec-25), [0, 1, 25] => "Tue 25-December-2018   A, B, Z");
    }

    #[test]
    fn nobody_subscribed() {
        render!(dt!(2018-Apr-1), [] => "Sun 01-April-2018   ");
    }

    #[test]
    fn whole_report() {
        let customers = vec![Customer { tag: Tag::nth(0).unwrap(), preference: Preference::Never }];
        let text = format!("{}", Report::build(&customers, dt!(2018-Mar-31)));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), WINDOW);
        assert_eq!(lines[0], "Sun 01-April-2018   ");
        assert_eq!(lines[WINDOW - 1], "Fri 29-June-2018   ");
        assert!(text.ends_with('\n'));
        assert!(!text.contains('['));
        assert!(!text.contains(','));
    }
}
