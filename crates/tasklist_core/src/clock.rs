//! Time source capability.
//!
//! # Responsibility
//! - Supply "now" in epoch milliseconds for task ids.
//! - Supply "today" as a local calendar date for due classification.
//!
//! # Invariants
//! - Core code never reads the system clock directly; it goes through `Clock`.

use chrono::{Local, NaiveDate, Utc};
use std::cell::Cell;

/// Time source used by the task list.
pub trait Clock {
    /// Current time in Unix epoch milliseconds.
    fn now_millis(&self) -> i64;
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation backed by the host clock and local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Deterministic clock for tests and replay.
///
/// `today` is fixed; `now_millis` starts at a caller-chosen value and
/// advances by one on every read, so consecutive adds get distinct ids.
#[derive(Debug)]
pub struct ManualClock {
    today: Cell<NaiveDate>,
    next_millis: Cell<i64>,
}

impl ManualClock {
    pub fn new(today: NaiveDate, start_millis: i64) -> Self {
        Self {
            today: Cell::new(today),
            next_millis: Cell::new(start_millis),
        }
    }

    /// Moves the calendar date without touching the millisecond counter.
    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        let value = self.next_millis.get();
        self.next_millis.set(value + 1);
        value
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
