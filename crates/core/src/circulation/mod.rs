//! Loan and reservation lifecycle logic.
//!
//! This module implements the circulation core:
//! - The loan ledger (borrow, return, fine payment)
//! - Per-book FIFO reservation queues with expiry sweeps
//! - Pluggable fine policies
//! - Injectable current-date providers
//! - Reporting queries over the transaction log

pub mod clock;
pub mod error;
pub mod fine;
pub mod ledger;
pub mod queue;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CirculationError;
pub use fine::{FinePolicy, KindRateFinePolicy, StandardFinePolicy, days_overdue};
pub use ledger::{CirculationResult, LoanLedger};
pub use queue::ReservationQueue;
pub use types::{LoanTransaction, Reservation, ReturnOutcome};
