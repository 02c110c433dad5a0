//! Circulation error types.
//!
//! Business-rule rejections (a suspended user, a book already out, a
//! duplicate reservation) are expected, recoverable outcomes the caller can
//! act on. Malformed date text is the one hard-stop condition: dates are a
//! controlled internal format, so a parse failure is a programmer error and
//! is kept distinct from rejections.

use biblio_shared::DateError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::BookStatus;

/// Errors that can occur during circulation operations.
#[derive(Debug, Error)]
pub enum CirculationError {
    // ========== Borrow Rejections ==========
    /// The user's account is suspended.
    #[error("User account is suspended")]
    UserSuspended,

    /// The user's fine balance is at or above the configured cap.
    #[error("Fine balance {balance} is at or above the cap {cap}")]
    FineCapReached {
        /// Current fine balance.
        balance: Decimal,
        /// Configured maximum balance.
        cap: Decimal,
    },

    /// The user already has the maximum number of unreturned loans.
    #[error("Borrow limit of {limit} reached")]
    BorrowLimitReached {
        /// The role's borrow limit.
        limit: usize,
    },

    /// The book is not in the `Available` state.
    #[error("Book is not available for borrowing (status: {status})")]
    BookNotAvailable {
        /// The book's current status.
        status: BookStatus,
    },

    /// Reference works are never borrowable.
    #[error("Reference-only items cannot be borrowed")]
    ReferenceOnly,

    // ========== Return Rejections ==========
    /// No unreturned loan matches the (user, book) pair.
    #[error("No active loan found for this user and book")]
    NoActiveLoan,

    // ========== Reservation Rejections ==========
    /// The user is not eligible to place reservations.
    #[error("User cannot place reservations")]
    CannotReserve,

    /// Only books currently on loan can be reserved.
    #[error("Book is not on loan, so it cannot be reserved (status: {status})")]
    BookNotOnLoan {
        /// The book's current status.
        status: BookStatus,
    },

    /// The user already holds an active reservation for this book.
    #[error("User already has an active reservation for this book")]
    DuplicateReservation,

    /// No reservation by this user exists in the book's queue.
    #[error("No reservation found for this user and book")]
    ReservationNotFound,

    // ========== Payment Rejections ==========
    /// Payment amounts must be strictly positive.
    #[error("Payment amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    // ========== Configuration Rejections ==========
    /// The reservation period must be at least one day so that the expiry
    /// date is strictly after the reservation date.
    #[error("Reservation period must be at least 1 day, got {0}")]
    InvalidReservationPeriod(u32),

    // ========== Hard Errors ==========
    /// Malformed date text reached the date parser.
    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

impl CirculationError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UserSuspended => "USER_SUSPENDED",
            Self::FineCapReached { .. } => "FINE_CAP_REACHED",
            Self::BorrowLimitReached { .. } => "BORROW_LIMIT_REACHED",
            Self::BookNotAvailable { .. } => "BOOK_NOT_AVAILABLE",
            Self::ReferenceOnly => "REFERENCE_ONLY",
            Self::NoActiveLoan => "NO_ACTIVE_LOAN",
            Self::CannotReserve => "CANNOT_RESERVE",
            Self::BookNotOnLoan { .. } => "BOOK_NOT_ON_LOAN",
            Self::DuplicateReservation => "DUPLICATE_RESERVATION",
            Self::ReservationNotFound => "RESERVATION_NOT_FOUND",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidReservationPeriod(_) => "INVALID_RESERVATION_PERIOD",
            Self::InvalidDate(_) => "INVALID_DATE",
        }
    }

    /// Returns true for recoverable business-rule rejections, false for the
    /// hard malformed-date condition.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::InvalidDate(_))
    }
}
