//! Prompt construction for the finance assistant

use crate::models::Transaction;

/// System prompt with formatting rules and the reply language
pub fn system_prompt(language: &str) -> String {
    format!(
        "You are a helpful financial assistant. \n\
         \n\
         Please follow these formatting guidelines in your responses:\n\
         1. Use proper paragraphs with clear spacing between ideas\n\
         2. Use bullet points or numbered lists for multiple items\n\
         3. Use headings (with ** for bold) to organize sections\n\
         4. Keep sentences concise and clear\n\
         5. Respond in the {} language\n\
         \n\
         For financial advice, structure your response with clear sections like \
         \"Summary\", \"Analysis\", and \"Recommendations\".",
        language
    )
}

/// One line per transaction: `date | amount | kind | category | description`
pub fn format_transactions(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|t| {
            format!(
                "{} | {} | {} | {} | {}",
                t.occurred_at.format("%Y-%m-%d"),
                t.amount.plain(),
                t.kind,
                t.category,
                t.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// User prompt asking for advice about the given transactions
pub fn advice_prompt(transactions: &[Transaction], question: &str) -> String {
    format!(
        "Based on these transactions:\n{}\n\nQuestion: {}\n\nPlease provide financial advice:",
        format_transactions(transactions),
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, OwnerId, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(
                OwnerId::new("u"),
                TransactionKind::Expense,
                Money::from_cents(1250),
                "food",
            )
            .with_description("lunch")
            .with_occurred_at(Utc.with_ymd_and_hms(2025, 3, 4, 12, 0, 0).unwrap()),
            Transaction::new(
                OwnerId::new("u"),
                TransactionKind::Income,
                Money::from_cents(300000),
                "salary",
            )
            .with_occurred_at(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()),
        ]
    }

    #[test]
    fn test_system_prompt_names_language() {
        let prompt = system_prompt("hi");
        assert!(prompt.starts_with("You are a helpful financial assistant."));
        assert!(prompt.contains("5. Respond in the hi language"));
        assert!(prompt.contains("\"Recommendations\""));
    }

    #[test]
    fn test_format_transactions() {
        assert_eq!(
            format_transactions(&sample()),
            "2025-03-04 | 12.5 | expense | food | lunch\n2025-03-01 | 3000 | income | salary | "
        );
        assert_eq!(format_transactions(&[]), "");
    }

    #[test]
    fn test_advice_prompt() {
        let prompt = advice_prompt(&sample(), "Am I overspending?");
        assert!(prompt.starts_with("Based on these transactions:\n2025-03-04 | 12.5"));
        assert!(prompt.ends_with("Question: Am I overspending?\n\nPlease provide financial advice:"));
    }
}
