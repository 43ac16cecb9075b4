//! Core data models for FinTooz
//!
//! This module contains the data structures that represent the finance
//! domain: transactions, their owners, and money amounts.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::{OwnerId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
