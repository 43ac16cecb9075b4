//! Per-category income and expense totals

use std::collections::BTreeMap;

use serde::Serialize;

use super::summary::{accumulate, check_well_formed};
use crate::error::FinResult;
use crate::models::money::serialize_decimal;
use crate::models::{Money, Transaction};

/// Totals for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryTotals {
    #[serde(serialize_with = "serialize_decimal")]
    pub income: Money,
    #[serde(serialize_with = "serialize_decimal")]
    pub expense: Money,
}

impl CategoryTotals {
    /// Income minus expense within the category
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Category label -> totals, for exactly the categories seen in the input
///
/// Labels are compared as-is: "Food" and "food" are different categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryBreakdown(BTreeMap<String, CategoryTotals>);

impl CategoryBreakdown {
    pub fn get(&self, category: &str) -> Option<&CategoryTotals> {
        self.0.get(category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Categories in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryTotals)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Group transactions by category label
///
/// Uses the same income-else-expense split as [`super::summarize`].
pub fn breakdown_by_category(transactions: &[Transaction]) -> FinResult<CategoryBreakdown> {
    let mut categories: BTreeMap<String, CategoryTotals> = BTreeMap::new();

    for txn in transactions {
        check_well_formed(txn)?;

        let totals = categories.entry(txn.category.clone()).or_default();
        if txn.is_income() {
            totals.income = accumulate(totals.income, txn.amount)?;
        } else {
            totals.expense = accumulate(totals.expense, txn.amount)?;
        }
    }

    Ok(CategoryBreakdown(categories))
}
