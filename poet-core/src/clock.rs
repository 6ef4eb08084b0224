//! Date source for generation stamps in file headers.

use std::fmt::Debug;

use chrono::{Local, NaiveDate};

/// Supplies "today" to the writer.
///
/// Injected rather than read from the system so tests can pin the date.
pub trait Clock: Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Pin the clock to a calendar date. Out-of-range dates fall back to the epoch.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::ymd(2015, 11, 10);
        assert_eq!(clock.today().format("%-m/%-d/%y").to_string(), "11/10/15");
    }

    #[test]
    fn test_fixed_clock_invalid_date() {
        assert_eq!(FixedClock::ymd(2015, 13, 40).today(), NaiveDate::default());
    }
}
