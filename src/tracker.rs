use crate::record::Record;
use chrono::{Duration, Local, NaiveDate};
use log::{debug, trace};
use rust_decimal::Decimal;

// Length of the trailing window used by `Tracker::week_total`
const WEEK_DAYS: i64 = 7;

/// Aggregates `Record`s against a daily limit.
///
/// `Tracker` only knows about numbers. Turning the remaining balance into something a
/// person wants to read is left to `SpendingTracker` and `ConsumptionTracker`, which
/// both wrap a `Tracker`.
#[derive(Clone, Debug)]
pub struct Tracker {
    limit: Decimal,
    records: Vec<Record>,
    // Both reference dates are captured once, when the tracker is created. A tracker
    // kept alive past midnight keeps reporting against the day it was created on.
    today: NaiveDate,
    week_start: NaiveDate,
}

impl Tracker {
    /// Create a new `Tracker` whose "today" is the current local date
    pub fn new(limit: Decimal) -> Self {
        Self::with_today(limit, Local::now().date_naive())
    }

    /// Create a new `Tracker` with an explicit reference date
    pub fn with_today(limit: Decimal, today: NaiveDate) -> Self {
        let week_start = today - Duration::days(WEEK_DAYS);
        debug!(
            "tracking a limit of {} for {} (week from {})",
            limit, today, week_start
        );

        Tracker {
            limit,
            records: Vec::new(),
            today,
            week_start,
        }
    }

    pub fn add_record(&mut self, record: Record) {
        debug!(
            "adding record of {} for {} ({})",
            record.amount(),
            record.date(),
            record.comment()
        );
        self.records.push(record);
    }

    /// Sum of every record dated today
    pub fn today_total(&self) -> Decimal {
        let total = self.sum_where(|date| date == self.today);
        trace!("total for {}: {}", self.today, total);
        total
    }

    /// Sum of every record in the last 7 days, today included.
    ///
    /// The day exactly one week ago is not part of the window.
    pub fn week_total(&self) -> Decimal {
        let total = self.sum_where(|date| self.week_start < date && date <= self.today);
        trace!("total after {} up to {}: {}", self.week_start, self.today, total);
        total
    }

    /// What is left of today's limit. Negative once the limit is exceeded.
    pub fn remaining(&self) -> Decimal {
        self.limit - self.today_total()
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn sum_where<F: Fn(NaiveDate) -> bool>(&self, include: F) -> Decimal {
        self.records
            .iter()
            .filter(|r| include(r.date()))
            .map(Record::amount)
            .sum()
    }
}
