//! Current-date providers.
//!
//! The ledger never reads the wall clock directly. A [`Clock`] is injected
//! so tests run against a fixed, advanceable date and every operation is
//! deterministic given the current date.

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;

/// Provider of the current calendar date.
pub trait Clock {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock provider using the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Fixed date for tests. Interior-mutable so a handle kept outside the
/// ledger can advance time mid-scenario.
#[derive(Debug)]
pub struct FixedClock {
    today: Cell<NaiveDate>,
}

impl FixedClock {
    /// Creates a clock pinned to the given date.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    /// Creates a shared handle suitable for passing into a ledger while
    /// keeping a second handle to drive time.
    #[must_use]
    pub fn shared(today: NaiveDate) -> Rc<Self> {
        Rc::new(Self::new(today))
    }

    /// Pins the clock to a new date.
    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }

    /// Moves the clock forward by whole days.
    pub fn advance_days(&self, days: u64) {
        self.today
            .set(self.today.get() + chrono::Days::new(days));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
        clock.advance_days(3);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());
    }

    #[test]
    fn test_shared_handle_sees_updates() {
        let clock = FixedClock::shared(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let handle = Rc::clone(&clock);
        clock.set_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(handle.today(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }
}
