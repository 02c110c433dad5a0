//! Circulation configuration management.
//!
//! All knobs are runtime-mutable: the ledger reads current values at call
//! time and never caches them, so the reload boundary is the call site —
//! no ledger operation observes a configuration change mid-call.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Circulation policy knobs.
///
/// Every knob carries a sensible library-policy default.
#[derive(Debug, Clone, Deserialize)]
pub struct CirculationConfig {
    /// Maximum simultaneous unreturned loans for a regular user.
    #[serde(default = "default_regular_borrow_limit")]
    pub regular_borrow_limit: usize,
    /// Maximum simultaneous unreturned loans for a librarian.
    #[serde(default = "default_librarian_borrow_limit")]
    pub librarian_borrow_limit: usize,
    /// Loan period in days for a regular user.
    #[serde(default = "default_regular_loan_period")]
    pub regular_loan_period_days: u32,
    /// Loan period in days for a librarian.
    #[serde(default = "default_librarian_loan_period")]
    pub librarian_loan_period_days: u32,
    /// Days a reservation stays active before expiring.
    #[serde(default = "default_reservation_period")]
    pub reservation_period_days: u32,
    /// Daily fine rate for overdue returns.
    #[serde(default = "default_daily_fine_rate")]
    pub daily_fine_rate: Decimal,
    /// Fine balance at or above which borrowing is blocked.
    #[serde(default = "default_max_fine_balance")]
    pub max_fine_balance: Decimal,
}

fn default_regular_borrow_limit() -> usize {
    5
}

fn default_librarian_borrow_limit() -> usize {
    100
}

fn default_regular_loan_period() -> u32 {
    14
}

fn default_librarian_loan_period() -> u32 {
    60
}

fn default_reservation_period() -> u32 {
    7
}

fn default_daily_fine_rate() -> Decimal {
    Decimal::ONE
}

fn default_max_fine_balance() -> Decimal {
    Decimal::new(5000, 2) // 50.00
}

impl Default for CirculationConfig {
    fn default() -> Self {
        Self {
            regular_borrow_limit: default_regular_borrow_limit(),
            librarian_borrow_limit: default_librarian_borrow_limit(),
            regular_loan_period_days: default_regular_loan_period(),
            librarian_loan_period_days: default_librarian_loan_period(),
            reservation_period_days: default_reservation_period(),
            daily_fine_rate: default_daily_fine_rate(),
            max_fine_balance: default_max_fine_balance(),
        }
    }
}

impl CirculationConfig {
    /// Loads configuration from config files and environment.
    ///
    /// Layers `config/default.toml` (optional) and `BIBLIO__*` environment
    /// variables over the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("BIBLIO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_knobs() {
        let cfg = CirculationConfig::default();
        assert_eq!(cfg.regular_borrow_limit, 5);
        assert_eq!(cfg.librarian_borrow_limit, 100);
        assert_eq!(cfg.regular_loan_period_days, 14);
        assert_eq!(cfg.librarian_loan_period_days, 60);
        assert_eq!(cfg.reservation_period_days, 7);
        assert_eq!(cfg.daily_fine_rate, dec!(1));
        assert_eq!(cfg.max_fine_balance, dec!(50.00));
    }

    #[test]
    fn test_deserialize_partial_fills_defaults() {
        let cfg: CirculationConfig =
            serde_json::from_str(r#"{"regular_borrow_limit": 3, "daily_fine_rate": "2.5"}"#)
                .unwrap();
        assert_eq!(cfg.regular_borrow_limit, 3);
        assert_eq!(cfg.daily_fine_rate, dec!(2.5));
        assert_eq!(cfg.librarian_borrow_limit, 100);
        assert_eq!(cfg.reservation_period_days, 7);
    }
}
