//! Shorthand transaction commands
//!
//! Free-text queries of the form `add, <category>, <amount>` (income) or
//! `sub, <category>, <amount>` (expense) are recorded directly. Anything
//! else is reported as `NotACommand` so the caller can hand the text to the
//! assistant instead.
//!
//! Incomplete or invalid commands are not errors: they produce a guidance
//! message and write nothing. Only a failed write is an error.

use std::fmt;

use tracing::{debug, info};

use crate::error::FinResult;
use crate::models::{Money, OwnerId, Transaction, TransactionKind};
use crate::storage::TransactionStore;

/// Guidance returned when the amount is missing a positive number
pub const INVALID_AMOUNT_MESSAGE: &str = "Please provide a valid amount greater than zero.";

/// First comma-separated token of a shorthand command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Add,
    Sub,
}

impl Directive {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            _ => None,
        }
    }

    /// Kind of transaction this directive records
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Add => TransactionKind::Income,
            Self::Sub => TransactionKind::Expense,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized command, complete or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Ready to record
    Record {
        directive: Directive,
        category: String,
        amount: Money,
    },
    MissingCategory(Directive),
    MissingAmount {
        directive: Directive,
        category: String,
    },
    InvalidAmount,
}

impl ParsedCommand {
    /// Guidance text for incomplete commands; `None` for `Record`
    pub fn guidance(&self) -> Option<String> {
        match self {
            Self::Record { .. } => None,
            Self::MissingCategory(directive) => Some(format!(
                "Please specify a category. Use the format: {}, category, amount",
                directive
            )),
            Self::MissingAmount {
                directive,
                category,
            } => Some(format!(
                "Please specify an amount for {}. Use the format: {}, {}, amount",
                category, directive, category
            )),
            Self::InvalidAmount => Some(INVALID_AMOUNT_MESSAGE.to_string()),
        }
    }
}

/// What the caller should do with a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Show this message to the user as-is
    Handled(String),
    /// Not a shorthand command; forward the query to the assistant as typed
    NotACommand,
}

impl CommandOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Parse a query without side effects
///
/// Returns `None` when the query is not a shorthand command at all.
pub fn parse_command(query: &str) -> Option<ParsedCommand> {
    let normalized = query.trim().to_lowercase();

    // A bare word is never a command, even "add"
    if !normalized.contains(',') {
        return None;
    }

    let mut segments = normalized.split(',').map(str::trim);
    let directive = Directive::from_token(segments.next()?)?;

    let category = match segments.next() {
        Some(category) if !category.is_empty() => category.to_string(),
        _ => return Some(ParsedCommand::MissingCategory(directive)),
    };

    let raw_amount = match segments.next() {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Some(ParsedCommand::MissingAmount {
                directive,
                category,
            })
        }
    };

    match parse_amount(raw_amount) {
        Some(amount) => Some(ParsedCommand::Record {
            directive,
            category,
            amount,
        }),
        None => Some(ParsedCommand::InvalidAmount),
    }
}

/// Read a positive amount out of a loosely typed token
///
/// Everything but digits and decimal points is dropped ("$50", "50rs",
/// "50-20" reads as 5020). A minus sign ahead of the first digit marks a
/// negative amount, which is rejected rather than flipped positive.
fn parse_amount(raw: &str) -> Option<Money> {
    let leading_minus = raw
        .chars()
        .find(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .is_some_and(|c| c == '-');
    if leading_minus {
        return None;
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Money::parse_decimal_prefix(&cleaned).filter(Money::is_positive)
}

/// Sentence stored as the description of a recorded command
pub fn auto_description(kind: TransactionKind, amount: Money, category: &str) -> String {
    format!("{} of {} for {}", kind.title(), amount.plain(), category)
}

/// Confirmation shown after a command is recorded
pub fn confirmation(kind: TransactionKind, amount: Money, category: &str) -> String {
    format!(
        "Transaction recorded: {} of {} for {}.",
        kind,
        amount.plain(),
        category
    )
}

/// Service that interprets queries and records complete commands
pub struct CommandService<'a, S: TransactionStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: TransactionStore + ?Sized> CommandService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Interpret `query` on behalf of `owner`
    ///
    /// At most one transaction is written, and only for a complete command.
    pub fn interpret(&self, query: &str, owner: &OwnerId) -> FinResult<CommandOutcome> {
        let Some(command) = parse_command(query) else {
            debug!("query is not a shorthand command");
            return Ok(CommandOutcome::NotACommand);
        };

        let (directive, category, amount) = match command {
            ParsedCommand::Record {
                directive,
                category,
                amount,
            } => (directive, category, amount),
            incomplete => {
                debug!(?incomplete, "incomplete shorthand command");
                let message = incomplete.guidance().unwrap_or_default();
                return Ok(CommandOutcome::Handled(message));
            }
        };

        let kind = directive.kind();
        let txn = Transaction::new(owner.clone(), kind, amount, category.clone())
            .with_description(auto_description(kind, amount, &category));
        let id = txn.id;

        self.store.append(txn)?;
        info!(%owner, %id, %kind, %category, amount = %amount.plain(), "recorded transaction from command");

        Ok(CommandOutcome::Handled(confirmation(kind, amount, &category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinError;
    use crate::reports::summarize;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingStore {
        appended: RefCell<Vec<Transaction>>,
    }

    impl TransactionStore for RecordingStore {
        fn append(&self, txn: Transaction) -> Result<(), FinError> {
            self.appended.borrow_mut().push(txn);
            Ok(())
        }
    }

    struct FailingStore;

    impl TransactionStore for FailingStore {
        fn append(&self, _txn: Transaction) -> Result<(), FinError> {
            Err(FinError::Storage("disk unavailable".into()))
        }
    }

    fn owner() -> OwnerId {
        OwnerId::new("user-42")
    }

    fn run(store: &RecordingStore, query: &str) -> CommandOutcome {
        CommandService::new(store).interpret(query, &owner()).unwrap()
    }

    #[test]
    fn test_plain_questions_are_not_commands() {
        let store = RecordingStore::default();
        for query in [
            "How can I save more money?",
            "add more food",
            "add",
            "  sub  ",
            "",
            "subtract, food, 10",
            "addition, food, 10",
            "food, add, 10",
        ] {
            assert_eq!(run(&store, query), CommandOutcome::NotACommand, "{query:?}");
        }
        assert!(store.appended.borrow().is_empty());
    }

    #[test]
    fn test_add_records_income() {
        let store = RecordingStore::default();
        let outcome = run(&store, "add, Food, 250");

        assert_eq!(
            outcome,
            CommandOutcome::Handled("Transaction recorded: income of 250 for food.".into())
        );

        let appended = store.appended.borrow();
        assert_eq!(appended.len(), 1);
        let txn = &appended[0];
        assert_eq!(txn.owner, owner());
        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(txn.category, "food");
        assert_eq!(txn.amount, Money::from_cents(25000));
        assert_eq!(txn.description, "Income of 250 for food");
    }

    #[test]
    fn test_sub_records_expense() {
        let store = RecordingStore::default();
        let outcome = run(&store, "  SUB ,  Travel , $12.50 ");

        assert_eq!(
            outcome,
            CommandOutcome::Handled("Transaction recorded: expense of 12.5 for travel.".into())
        );
        let appended = store.appended.borrow();
        assert_eq!(appended[0].kind, TransactionKind::Expense);
        assert_eq!(appended[0].description, "Expense of 12.5 for travel");
    }

    #[test]
    fn test_directive_spacing_and_case() {
        let store = RecordingStore::default();
        assert!(run(&store, "Add, rent, 10").is_handled());
        assert!(run(&store, " add , rent, 10").is_handled());
        assert!(run(&store, "add,rent,10").is_handled());
        assert_eq!(store.appended.borrow().len(), 3);
    }

    #[test]
    fn test_missing_category_gives_syntax() {
        let store = RecordingStore::default();

        let CommandOutcome::Handled(message) = run(&store, "add,") else {
            panic!("expected guidance");
        };
        assert!(message.contains("add, category, amount"));

        let CommandOutcome::Handled(message) = run(&store, "sub, , 40") else {
            panic!("expected guidance");
        };
        assert!(message.contains("sub, category, amount"));

        assert!(store.appended.borrow().is_empty());
    }

    #[test]
    fn test_missing_amount_names_category() {
        let store = RecordingStore::default();

        for query in ["sub, travel,", "sub, travel", "sub, travel,   "] {
            let CommandOutcome::Handled(message) = run(&store, query) else {
                panic!("expected guidance for {query:?}");
            };
            assert!(message.contains("travel"));
            assert!(message.contains("sub, travel, amount"));
        }
        assert!(store.appended.borrow().is_empty());
    }

    #[test]
    fn test_invalid_amounts() {
        let store = RecordingStore::default();
        for query in [
            "add, food, -5",
            "add, food, $-5",
            "add, food, - 5",
            "add, food, 0",
            "add, food, 0.00",
            "add, food, abc",
            "add, food, .",
            "add, food, 0.001",
            "add, food, 12.999",
        ] {
            assert_eq!(
                run(&store, query),
                CommandOutcome::Handled(INVALID_AMOUNT_MESSAGE.into()),
                "{query:?}"
            );
        }
        assert!(store.appended.borrow().is_empty());
    }

    #[test]
    fn test_amount_contamination_is_stripped() {
        assert_eq!(
            parse_command("add, food, 50rs"),
            Some(ParsedCommand::Record {
                directive: Directive::Add,
                category: "food".into(),
                amount: Money::from_cents(5000),
            })
        );
        assert_eq!(parse_amount("$ 1 200.5"), Some(Money::from_cents(120050)));
    }

    #[test]
    fn test_inner_dashes_are_dropped() {
        assert_eq!(
            parse_command("add, food, 50-20"),
            Some(ParsedCommand::Record {
                directive: Directive::Add,
                category: "food".into(),
                amount: Money::from_cents(502000),
            })
        );
        assert_eq!(parse_amount("1-800"), Some(Money::from_cents(180000)));
        assert_eq!(parse_amount("12.50-"), Some(Money::from_cents(1250)));
    }

    #[test]
    fn test_thousands_separator_is_split_away() {
        // The outer comma split eats "1,200" before the amount is read
        assert_eq!(
            parse_command("add, bonus, 1,200"),
            Some(ParsedCommand::Record {
                directive: Directive::Add,
                category: "bonus".into(),
                amount: Money::from_cents(100),
            })
        );
    }

    #[test]
    fn test_persistence_failure_propagates() {
        let err = CommandService::new(&FailingStore)
            .interpret("add, food, 10", &owner())
            .unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_guidance_does_not_touch_failing_store() {
        let service = CommandService::new(&FailingStore);
        assert!(service.interpret("add, food", &owner()).unwrap().is_handled());
        assert_eq!(
            service.interpret("what is a budget?", &owner()).unwrap(),
            CommandOutcome::NotACommand
        );
    }

    #[test]
    fn test_identical_commands_create_separate_records() {
        let store = RecordingStore::default();
        run(&store, "sub, coffee, 3");
        run(&store, "sub, coffee, 3");

        let appended = store.appended.borrow();
        assert_eq!(appended.len(), 2);
        assert_ne!(appended[0].id, appended[1].id);
    }

    #[test]
    fn test_recorded_command_feeds_summary() {
        let store = RecordingStore::default();
        run(&store, "add, salary, 1000");

        let summary = summarize(&store.appended.borrow()).unwrap();
        assert_eq!(summary.total_income, Money::from_cents(100000));
        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.balance, Money::from_cents(100000));
    }
}
