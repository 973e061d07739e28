//! Clock port
//!
//! Injected so tests can pin time. The engine never reads the system
//! clock directly.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    /// Current calendar date (UTC)
    fn today(&self) -> NaiveDate;
    /// Current Unix timestamp in milliseconds
    fn now_millis(&self) -> i64;
}

/// System clock (UTC)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        shared::util::now_millis()
    }
}

/// Fixed clock for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub date: NaiveDate,
    pub millis: i64,
}

impl FixedClock {
    pub fn new(date: NaiveDate, millis: i64) -> Self {
        Self { date, millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}
