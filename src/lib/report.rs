//! Aggregation of subscribers over the look-ahead window

use crate::lib::{
    date::Date,
    preference::Customer,
    schedule,
};

/// Number of days covered by a report
pub const WINDOW: usize = 90;

/// Everyone subscribed on a single date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySubscriptions {
    pub date: Date,
    pub subscribers: Vec<Customer>,
}

/// A collection of per-day subscriptions in chronological order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    days: Vec<DaySubscriptions>,
}

impl Report {
    /// Evaluate every customer on the `WINDOW` days following `reference`
    ///
    /// `reference` itself is not part of the report, and
    /// `reference.window_end(WINDOW)` must have succeeded.
    pub fn build(customers: &[Customer], reference: Date) -> Self {
        let mut days = Vec::with_capacity(WINDOW);
        for date in reference.following(WINDOW) {
            let subscribers = schedule::subscribers_on(date, customers);
            days.push(DaySubscriptions { date, subscribers });
        }
        tracing::debug!(
            "report covers {} days after {}, {} customers",
            days.len(),
            reference,
            customers.len()
        );
        Self { days }
    }

    pub fn days(&self) -> &[DaySubscriptions] {
        &self.days
    }
}
