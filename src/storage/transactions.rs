//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FinError;
use crate::models::{OwnerId, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with a per-owner index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Records>,
    /// Index: owner -> transaction_ids
    by_owner: RwLock<OwnerIndex>,
}

fn read_lock<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, FinError> {
    lock.read()
        .map_err(|e| FinError::Storage(format!("Failed to acquire read lock: {}", e)))
}

fn write_lock<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, FinError> {
    lock.write()
        .map_err(|e| FinError::Storage(format!("Failed to acquire write lock: {}", e)))
}

type Records = HashMap<TransactionId, Transaction>;
type OwnerIndex = HashMap<OwnerId, Vec<TransactionId>>;

fn insert_indexed(data: &mut Records, by_owner: &mut OwnerIndex, txn: Transaction) {
    if let Some(old) = data.get(&txn.id) {
        if let Some(ids) = by_owner.get_mut(&old.owner) {
            ids.retain(|&id| id != txn.id);
        }
    }

    by_owner.entry(txn.owner.clone()).or_default().push(txn.id);
    data.insert(txn.id, txn);
}

fn remove_indexed(data: &mut Records, by_owner: &mut OwnerIndex, id: TransactionId) -> bool {
    match data.remove(&id) {
        Some(txn) => {
            if let Some(ids) = by_owner.get_mut(&txn.owner) {
                ids.retain(|&tid| tid != id);
            }
            true
        }
        None => false,
    }
}

/// Newest first; creation time breaks ties
fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then(b.created_at.cmp(&a.created_at))
    });
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build the owner index
    pub fn load(&self) -> Result<(), FinError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = write_lock(&self.data)?;
        let mut by_owner = write_lock(&self.by_owner)?;

        data.clear();
        by_owner.clear();

        for txn in file_data.transactions {
            insert_indexed(&mut data, &mut by_owner, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FinError> {
        let data = read_lock(&self.data)?;
        self.write_file(data.values())
    }

    fn write_file<'t>(&self, records: impl Iterator<Item = &'t Transaction>) -> Result<(), FinError> {
        let mut transactions: Vec<_> = records.cloned().collect();
        sort_newest_first(&mut transactions);

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Insert or update a transaction and persist the result
    ///
    /// The file is written before memory changes, so a failed write leaves
    /// the repository exactly as it was.
    pub fn upsert_and_save(&self, txn: Transaction) -> Result<(), FinError> {
        let mut data = write_lock(&self.data)?;
        let mut by_owner = write_lock(&self.by_owner)?;

        self.write_file(
            data.values()
                .filter(|t| t.id != txn.id)
                .chain(std::iter::once(&txn)),
        )?;

        insert_indexed(&mut data, &mut by_owner, txn);
        Ok(())
    }

    /// Delete a transaction and persist the result, returning whether it existed
    ///
    /// Like `upsert_and_save`, memory is only touched after a successful write.
    pub fn delete_and_save(&self, id: TransactionId) -> Result<bool, FinError> {
        let mut data = write_lock(&self.data)?;
        let mut by_owner = write_lock(&self.by_owner)?;

        if !data.contains_key(&id) {
            return Ok(false);
        }

        self.write_file(data.values().filter(|t| t.id != id))?;

        Ok(remove_indexed(&mut data, &mut by_owner, id))
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinError> {
        Ok(read_lock(&self.data)?.get(&id).cloned())
    }

    /// Get all transactions for an owner, newest first
    pub fn get_by_owner(&self, owner: &OwnerId) -> Result<Vec<Transaction>, FinError> {
        let data = read_lock(&self.data)?;
        let by_owner = read_lock(&self.by_owner)?;

        let ids = by_owner.get(owner).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids
            .iter()
            .filter_map(|id| data.get(id).cloned())
            .collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FinError> {
        Ok(read_lock(&self.data)?.len())
    }
}
