//! Income / expense summary
//!
//! Totals every transaction handed in. Anything that is not income counts as
//! an expense.

use serde::Serialize;

use crate::error::{FinError, FinResult};
use crate::models::money::serialize_decimal;
use crate::models::{Money, Transaction};

/// Totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(serialize_with = "serialize_decimal")]
    pub total_income: Money,
    #[serde(serialize_with = "serialize_decimal")]
    pub total_expenses: Money,
    /// `total_income - total_expenses`; may be negative
    #[serde(serialize_with = "serialize_decimal")]
    pub balance: Money,
}

/// Reject records that break the transaction invariants
pub(crate) fn check_well_formed(txn: &Transaction) -> FinResult<()> {
    txn.validate().map_err(|e| {
        FinError::Aggregation(format!("Malformed transaction {}: {}", txn.id, e))
    })
}

pub(crate) fn accumulate(total: Money, amount: Money) -> FinResult<Money> {
    total
        .checked_add(amount)
        .ok_or_else(|| FinError::Aggregation("Total exceeds the representable range".into()))
}

/// Total income, total expenses and balance
///
/// Fails on the first malformed transaction instead of skipping it, since a
/// skipped record would silently change the totals.
pub fn summarize(transactions: &[Transaction]) -> FinResult<Summary> {
    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();

    for txn in transactions {
        check_well_formed(txn)?;

        if txn.is_income() {
            total_income = accumulate(total_income, txn.amount)?;
        } else {
            total_expenses = accumulate(total_expenses, txn.amount)?;
        }
    }

    let balance = total_income
        .checked_sub(total_expenses)
        .ok_or_else(|| FinError::Aggregation("Balance exceeds the representable range".into()))?;

    Ok(Summary {
        total_income,
        total_expenses,
        balance,
    })
}
