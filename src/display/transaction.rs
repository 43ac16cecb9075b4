//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::{Transaction, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let signed = match txn.kind {
        TransactionKind::Income => txn.amount,
        TransactionKind::Expense => -txn.amount,
    };

    format!(
        "{:40} {} {:8} {:16} {:>12}  {}",
        txn.id.to_string(),
        txn.occurred_at.format("%Y-%m-%d"),
        txn.kind.to_string(),
        truncate(&txn.category, 16),
        signed.format_with_symbol(symbol),
        txn.description
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:40} {:10} {:8} {:16} {:>12}  {}\n",
        "ID", "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.occurred_at.format("%Y-%m-%d %H:%M")));
    output.push_str(&format!("Type:        {}\n", txn.kind.title()));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

/// Truncate a string to a maximum character count, marking the cut
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
