//! Shared types, date helpers, and configuration for Biblio.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Calendar-date parsing for the fixed `YYYY-MM-DD` textual form
//! - Circulation configuration with defined defaults

pub mod config;
pub mod types;

pub use config::CirculationConfig;
pub use types::date::{DateError, format_date, parse_date};
pub use types::{BookId, TransactionId, UserId};
