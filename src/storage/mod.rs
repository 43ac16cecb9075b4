//! Storage layer for FinTooz
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the `TransactionStore` seam the command interpreter writes
//! through.

pub mod file_io;
pub mod lock;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use lock::DataLock;
pub use transactions::TransactionRepository;

use crate::config::paths::FinPaths;
use crate::error::FinError;
use crate::models::Transaction;

/// Somewhere a newly created transaction can be appended
pub trait TransactionStore {
    /// Persist one new transaction. Errors propagate unchanged; no retry.
    fn append(&self, txn: Transaction) -> Result<(), FinError>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinPaths,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinPaths) -> Result<Self, FinError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinError> {
        self.transactions.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinError> {
        self.transactions.save()
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl TransactionStore for Storage {
    fn append(&self, txn: Transaction) -> Result<(), FinError> {
        self.transactions.upsert_and_save(txn)
    }
}
