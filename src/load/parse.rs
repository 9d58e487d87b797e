//! Convert a line of user input into a subscription preference

use pest::Parser;
use pest_derive::*;

use crate::lib::{
    date::Weekday,
    preference::{MonthDay, Preference, WeekdaySet},
};

/// Pest-generated parser
#[derive(Parser)]
#[grammar = "load/preference.pest"]
pub struct PreferenceParser;

/// Categorize `raw`, trying in order a day of the month,
/// a list of weekdays, `Daily` and `Never`.
///
/// Never fails: anything that is not recognized is `Preference::Unknown`.
pub fn classify(raw: &str) -> Preference {
    if let Some(day) = day_of_month(raw) {
        Preference::DayOfMonth(day)
    } else if matches(Rule::weekday_mention, raw) {
        Preference::Weekdays(weekdays(raw))
    } else if matches(Rule::daily, raw) {
        Preference::Daily
    } else if matches(Rule::never, raw) {
        Preference::Never
    } else {
        Preference::Unknown
    }
}

fn matches(rule: Rule, raw: &str) -> bool {
    PreferenceParser::parse(rule, raw).is_ok()
}

fn day_of_month(raw: &str) -> Option<MonthDay> {
    let pairs = PreferenceParser::parse(Rule::day_of_month, raw).ok()?;
    let day = pairs.flatten().find(|p| p.as_rule() == Rule::day)?;
    day.as_str().parse::<u8>().ok().and_then(MonthDay::new)
}

// unrecognized tokens are dropped, possibly leaving the set empty
fn weekdays(raw: &str) -> WeekdaySet {
    raw.split(' ').filter_map(Weekday::from_abbrev).collect()
}
