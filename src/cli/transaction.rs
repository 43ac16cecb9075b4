//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{FinError, FinResult};
use crate::models::{Money, OwnerId, TransactionKind};
use crate::services::{CreateTransactionInput, TransactionService, UpdateTransactionInput};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction type (income or expense)
        kind: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category label
        category: String,
        /// Free-text description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New type (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    owner: &OwnerId,
    cmd: TransactionCommands,
) -> FinResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let input = CreateTransactionInput {
                amount: parse_amount(&amount)?,
                kind: parse_kind(&kind)?,
                category,
                description,
                occurred_at: date.as_deref().map(parse_date).transpose()?,
            };

            let txn = service.create(owner, input)?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.occurred_at.format("%Y-%m-%d"));
            println!("  Type:     {}", txn.kind);
            println!("  Amount:   {}", txn.amount.format_with_symbol(symbol));
            println!("  Category: {}", txn.category);
        }

        TransactionCommands::List { limit } => {
            let mut transactions = service.list(owner)?;
            let total = transactions.len();
            transactions.truncate(limit);

            print!("{}", format_transaction_register(&transactions, symbol));
            println!("\nShowing {} of {} transactions", transactions.len(), total);
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id, owner)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let txn = service.find(&id, owner)?;

            let changes = UpdateTransactionInput {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                category,
                description,
                occurred_at: date.as_deref().map(parse_date).transpose()?,
            };

            if changes.is_empty() {
                println!("Nothing to change for transaction {}", txn.id);
                return Ok(());
            }

            let updated = service.update(txn.id, owner, changes)?;

            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {}", updated.occurred_at.format("%Y-%m-%d"));
            println!("  Type:     {}", updated.kind);
            println!("  Amount:   {}", updated.amount.format_with_symbol(symbol));
            println!("  Category: {}", updated.category);
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.find(&id, owner)?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(txn.id, owner)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                deleted.occurred_at.format("%Y-%m-%d"),
                deleted.category
            );
        }
    }

    Ok(())
}

fn parse_amount(amount: &str) -> FinResult<Money> {
    Money::parse(amount).map_err(|e| {
        FinError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '12.50'. Error: {}",
            amount, e
        ))
    })
}

fn parse_kind(kind: &str) -> FinResult<TransactionKind> {
    kind.parse::<TransactionKind>().map_err(FinError::Validation)
}

/// Parse a YYYY-MM-DD date as midnight UTC
fn parse_date(date: &str) -> FinResult<DateTime<Utc>> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| FinError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", date)))
}
