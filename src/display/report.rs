//! Report display formatting

use crate::reports::{CategoryBreakdown, Summary};

/// Format the income / expense summary
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total income:    {:>14}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total expenses:  {:>14}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&"-".repeat(31));
    output.push('\n');
    output.push_str(&format!(
        "Balance:         {:>14}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output
}

/// Format the per-category breakdown as a table
pub fn format_category_breakdown(breakdown: &CategoryBreakdown, symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:20} {:>14} {:>14} {:>14}\n",
        "Category", "Income", "Expense", "Net"
    ));
    output.push_str(&"-".repeat(65));
    output.push('\n');

    for (category, totals) in breakdown.iter() {
        output.push_str(&format!(
            "{:20} {:>14} {:>14} {:>14}\n",
            category,
            totals.income.format_with_symbol(symbol),
            totals.expense.format_with_symbol(symbol),
            totals.net().format_with_symbol(symbol)
        ));
    }

    output
}
