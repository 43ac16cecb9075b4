//! Transaction service
//!
//! Provides CRUD operations on a single owner's transactions. Every lookup by
//! ID checks ownership: a transaction that exists but belongs to someone else
//! is reported as `NotAuthorized`, not `NotFound`.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{FinError, FinResult};
use crate::models::{Money, OwnerId, Transaction, TransactionId, TransactionKind};
use crate::storage::{Storage, TransactionStore};

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    pub description: Option<String>,
    /// Defaults to now
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub amount: Option<Money>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.kind.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.occurred_at.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, owner: &OwnerId, input: CreateTransactionInput) -> FinResult<Transaction> {
        let mut txn = Transaction::new(
            owner.clone(),
            input.kind,
            input.amount,
            input.category.trim(),
        );

        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        if let Some(occurred_at) = input.occurred_at {
            txn.occurred_at = occurred_at;
        }

        txn.validate()
            .map_err(|e| FinError::Validation(e.to_string()))?;

        self.storage.append(txn.clone())?;
        info!(%owner, id = %txn.id, kind = %txn.kind, "created transaction");

        Ok(txn)
    }

    /// All of the owner's transactions, newest first
    pub fn list(&self, owner: &OwnerId) -> FinResult<Vec<Transaction>> {
        self.storage.transactions.get_by_owner(owner)
    }

    /// Get a transaction the owner is allowed to see
    pub fn get(&self, id: TransactionId, owner: &OwnerId) -> FinResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinError::transaction_not_found(id.to_string()))?;

        if !txn.is_owned_by(owner) {
            return Err(FinError::NotAuthorized(format!(
                "Transaction {} belongs to another user",
                id
            )));
        }

        Ok(txn)
    }

    /// Find a transaction by ID string ("txn-<uuid>" or a bare UUID)
    pub fn find(&self, identifier: &str, owner: &OwnerId) -> FinResult<Transaction> {
        let id = identifier
            .parse::<TransactionId>()
            .map_err(|_| FinError::transaction_not_found(identifier))?;
        self.get(id, owner)
    }

    /// Update a transaction
    pub fn update(
        &self,
        id: TransactionId,
        owner: &OwnerId,
        changes: UpdateTransactionInput,
    ) -> FinResult<Transaction> {
        let mut txn = self.get(id, owner)?;

        if let Some(amount) = changes.amount {
            txn.amount = amount;
        }

        if let Some(kind) = changes.kind {
            txn.kind = kind;
        }

        if let Some(category) = changes.category {
            txn.category = category.trim().to_string();
        }

        if let Some(description) = changes.description {
            txn.description = description.trim().to_string();
        }

        if let Some(occurred_at) = changes.occurred_at {
            txn.occurred_at = occurred_at;
        }

        txn.updated_at = Utc::now();

        txn.validate()
            .map_err(|e| FinError::Validation(e.to_string()))?;

        self.storage.transactions.upsert_and_save(txn.clone())?;
        info!(%owner, %id, "updated transaction");

        Ok(txn)
    }

    /// Delete a transaction, returning what was removed
    pub fn delete(&self, id: TransactionId, owner: &OwnerId) -> FinResult<Transaction> {
        let txn = self.get(id, owner)?;

        self.storage.transactions.delete_and_save(id)?;
        info!(%owner, %id, "deleted transaction");

        Ok(txn)
    }
}
