//! Reports module for FinTooz
//!
//! Pure aggregations over a user's transactions: the overall summary and the
//! per-category breakdown.

pub mod categories;
pub mod summary;

pub use categories::{breakdown_by_category, CategoryBreakdown, CategoryTotals};
pub use summary::{summarize, Summary};
