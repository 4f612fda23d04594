//! Cofre puzzle engine
//!
//! Platform-agnostic state machine for the scenario-gated PIN vault puzzle.
//! This crate provides the selection, entry and evaluation rules without any
//! UI or platform-specific dependencies.

pub mod config;
pub mod pin;
pub mod scenario;
pub mod vault;

// Re-export commonly used types
pub use config::{ConfigError, VaultConfig};
pub use pin::{PIN_LEN, PinBuffer};
pub use scenario::Scenario;
pub use vault::{DigitHint, EditOutcome, Outcome, VaultState};
