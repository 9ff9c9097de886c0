use std::cell::Cell;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Source of the current local date-time for history entries and "today" filtering
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock, stays put until moved with `set` or `advance`
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        return Self {
            now: Cell::new(now),
        };
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_date_time(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    #[test]
    fn fixed_clock_advance() {
        let clock = FixedClock::new(build_date_time(10, 23));

        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());

        clock.advance(Duration::hours(2));

        assert_eq!(clock.now(), build_date_time(11, 1));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    }

    #[test]
    fn fixed_clock_set() {
        let clock = FixedClock::new(build_date_time(10, 8));

        clock.set(build_date_time(1, 9));

        assert_eq!(clock.now(), build_date_time(1, 9));
    }
}
