//! Fine calculation strategies.
//!
//! A policy maps a (due date, return date) pair to a monetary penalty.
//! Days overdue are computed by calendar-date subtraction, so the result is
//! correct across month and year boundaries. Policies are pluggable at
//! runtime without touching ledger state.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::catalog::BookKind;

/// Number of full calendar days by which `returned` exceeds `due`.
/// Zero for on-time or early returns.
#[must_use]
pub fn days_overdue(due: NaiveDate, returned: NaiveDate) -> i64 {
    (returned - due).num_days().max(0)
}

/// Strategy computing a fine from a due/return date pair.
pub trait FinePolicy {
    /// Returns the fine for a return. Zero when `returned <= due`.
    ///
    /// The book kind is provided so rate tables can differentiate item
    /// types; flat-rate policies ignore it.
    fn calculate_fine(&self, due: NaiveDate, returned: NaiveDate, kind: &BookKind) -> Decimal;
}

/// Flat daily rate, regardless of item kind.
#[derive(Debug, Clone)]
pub struct StandardFinePolicy {
    daily_rate: Decimal,
}

impl StandardFinePolicy {
    /// Creates a policy with the given non-negative daily rate.
    #[must_use]
    pub const fn new(daily_rate: Decimal) -> Self {
        Self { daily_rate }
    }
}

impl Default for StandardFinePolicy {
    fn default() -> Self {
        Self::new(Decimal::ONE)
    }
}

impl FinePolicy for StandardFinePolicy {
    fn calculate_fine(&self, due: NaiveDate, returned: NaiveDate, _kind: &BookKind) -> Decimal {
        Decimal::from(days_overdue(due, returned)) * self.daily_rate
    }
}

/// Daily rate keyed by item kind, with a fallback rate.
#[derive(Debug, Clone)]
pub struct KindRateFinePolicy {
    textbook_rate: Decimal,
    magazine_rate: Decimal,
    reference_rate: Decimal,
    fallback_rate: Decimal,
}

impl KindRateFinePolicy {
    /// Creates a policy with explicit per-kind rates.
    #[must_use]
    pub const fn new(
        textbook_rate: Decimal,
        magazine_rate: Decimal,
        reference_rate: Decimal,
        fallback_rate: Decimal,
    ) -> Self {
        Self {
            textbook_rate,
            magazine_rate,
            reference_rate,
            fallback_rate,
        }
    }

    /// Overrides the rate for one kind.
    pub fn set_rate(&mut self, kind: &BookKind, rate: Decimal) {
        match kind {
            BookKind::TextBook { .. } => self.textbook_rate = rate,
            BookKind::Magazine { .. } => self.magazine_rate = rate,
            BookKind::ReferenceBook => self.reference_rate = rate,
        }
    }

    fn rate_for(&self, kind: &BookKind) -> Decimal {
        match kind {
            BookKind::TextBook { .. } => self.textbook_rate,
            BookKind::Magazine { .. } => self.magazine_rate,
            BookKind::ReferenceBook => self.reference_rate,
        }
    }

    /// Rate applied when no kind is known.
    #[must_use]
    pub const fn fallback_rate(&self) -> Decimal {
        self.fallback_rate
    }
}

impl Default for KindRateFinePolicy {
    /// Standard rate table: textbook 2.00, magazine 1.50, reference 5.00,
    /// fallback 1.00.
    fn default() -> Self {
        Self::new(
            Decimal::new(200, 2),
            Decimal::new(150, 2),
            Decimal::new(500, 2),
            Decimal::ONE,
        )
    }
}

impl FinePolicy for KindRateFinePolicy {
    fn calculate_fine(&self, due: NaiveDate, returned: NaiveDate, kind: &BookKind) -> Decimal {
        Decimal::from(days_overdue(due, returned)) * self.rate_for(kind)
    }
}
