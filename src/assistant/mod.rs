//! Finance assistant backed by a hosted chat-completion model
//!
//! The [`Assistant`] trait is the seam between the services and the network:
//! [`ChatClient`] is the real implementation, tests substitute their own.

pub mod client;
pub mod prompt;

pub use client::{extract_reply, ChatClient};

use crate::error::FinResult;
use crate::models::Transaction;

/// One system + user exchange to send to the model
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    /// Apply the configured token cap and temperature
    pub tuned: bool,
}

impl CompletionRequest {
    /// Free-form question, forwarded verbatim
    pub fn question(language: &str, query: &str) -> Self {
        Self {
            system: prompt::system_prompt(language),
            user: query.to_string(),
            tuned: false,
        }
    }

    /// Advice request grounded in the user's transactions
    pub fn advice(language: &str, transactions: &[Transaction], question: &str) -> Self {
        Self {
            system: prompt::system_prompt(language),
            user: prompt::advice_prompt(transactions, question),
            tuned: true,
        }
    }
}

/// Something that can answer a completion request with text
#[allow(async_fn_in_trait)]
pub trait Assistant {
    async fn complete(&self, request: &CompletionRequest) -> FinResult<String>;
}
