//! Deciding who is subscribed on a given date

use crate::lib::{
    date::Date,
    preference::{Customer, Preference},
};

impl Preference {
    /// Whether this rule subscribes its holder on `date`
    pub fn matches(&self, date: Date) -> bool {
        use Preference::*;
        match self {
            DayOfMonth(d) => date.day() == d.get(),
            Weekdays(days) => days.contains(&date.weekday()),
            Daily => true,
            Never => false,
            Unknown => false,
        }
    }
}

/// Customers subscribed on `date`, in registration order
pub fn subscribers_on(date: Date, customers: &[Customer]) -> Vec<Customer> {
    customers
        .iter()
        .filter(|c| c.preference.matches(date))
        .cloned()
        .collect()
}
