//! Service layer for FinTooz
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, ownership checks, shorthand command handling, and routing of
//! free-form questions to the assistant.

pub mod chat;
pub mod command;
pub mod transaction;

pub use chat::ChatService;
pub use command::{parse_command, CommandOutcome, CommandService, Directive, ParsedCommand};
pub use transaction::{CreateTransactionInput, TransactionService, UpdateTransactionInput};
