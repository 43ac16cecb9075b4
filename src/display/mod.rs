//! Terminal output formatting

pub mod report;
pub mod transaction;

pub use report::{format_category_breakdown, format_summary};
pub use transaction::{format_transaction_details, format_transaction_register};
