//! Library user entities.

use biblio_shared::{CirculationConfig, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Role of a library user, which determines borrowing capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Ordinary patron.
    Regular,
    /// Library staff with extended limits.
    Librarian,
}

impl UserRole {
    /// Maximum simultaneous unreturned loans for this role, read from the
    /// current configuration.
    #[must_use]
    pub const fn borrow_limit(self, cfg: &CirculationConfig) -> usize {
        match self {
            Self::Regular => cfg.regular_borrow_limit,
            Self::Librarian => cfg.librarian_borrow_limit,
        }
    }

    /// Loan period in days for this role.
    #[must_use]
    pub const fn loan_period_days(self, cfg: &CirculationConfig) -> u32 {
        match self {
            Self::Regular => cfg.regular_loan_period_days,
            Self::Librarian => cfg.librarian_loan_period_days,
        }
    }
}

/// Account standing of a library user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// In good standing.
    Active,
    /// Borrowing and reserving privileges revoked.
    Suspended,
}

/// A library user record.
///
/// The circulation ledger consumes the status and capabilities and mutates
/// only the fine balance (adds on late return, deducts on payment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login/display name.
    pub username: String,
    /// Role determining limits and periods.
    pub role: UserRole,
    /// Account standing.
    pub status: UserStatus,
    /// Accumulated unpaid fines. Never negative.
    pub fine_balance: Decimal,
}

impl User {
    /// Creates an active regular user with a zero fine balance.
    #[must_use]
    pub fn regular(id: UserId, username: impl Into<String>) -> Self {
        Self::new(id, username, UserRole::Regular)
    }

    /// Creates an active librarian with a zero fine balance.
    #[must_use]
    pub fn librarian(id: UserId, username: impl Into<String>) -> Self {
        Self::new(id, username, UserRole::Librarian)
    }

    fn new(id: UserId, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            status: UserStatus::Active,
            fine_balance: Decimal::ZERO,
        }
    }

    /// Returns true if the user is in good standing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Returns true if the user may borrow: active AND fine balance strictly
    /// under the configured cap. Applies uniformly to both roles.
    #[must_use]
    pub fn can_borrow(&self, cfg: &CirculationConfig) -> bool {
        self.is_active() && self.fine_balance < cfg.max_fine_balance
    }

    /// Returns true if the user may place reservations.
    #[must_use]
    pub fn can_reserve(&self) -> bool {
        self.is_active()
    }

    /// Adds a fine to the user's balance.
    pub fn add_fine(&mut self, amount: Decimal) {
        self.fine_balance += amount;
    }

    /// Deducts a payment from the user's balance, flooring at zero.
    pub fn deduct_fine(&mut self, amount: Decimal) {
        self.fine_balance = (self.fine_balance - amount).max(Decimal::ZERO);
    }
}
