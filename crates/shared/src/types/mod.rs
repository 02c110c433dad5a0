//! Common types used across the application.

pub mod date;
pub mod id;

pub use id::*;
