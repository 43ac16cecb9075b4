//! Chat entry points: shorthand commands first, the assistant otherwise

use tracing::{debug, warn};

use crate::assistant::{Assistant, CompletionRequest};
use crate::error::{FinError, FinResult};
use crate::models::OwnerId;
use crate::storage::Storage;

use super::command::{CommandOutcome, CommandService};

/// Routes user queries to the command interpreter or the assistant
pub struct ChatService<'a, A: Assistant> {
    storage: &'a Storage,
    assistant: &'a A,
}

impl<'a, A: Assistant> ChatService<'a, A> {
    pub fn new(storage: &'a Storage, assistant: &'a A) -> Self {
        Self { storage, assistant }
    }

    /// Answer a query
    ///
    /// Shorthand commands are handled locally and never reach the assistant.
    /// Everything else is forwarded as typed and the reply returned unchanged.
    pub async fn ask(&self, owner: &OwnerId, query: &str, language: &str) -> FinResult<String> {
        if query.trim().is_empty() {
            return Err(FinError::Validation("Query is required".into()));
        }

        match CommandService::new(self.storage).interpret(query, owner)? {
            CommandOutcome::Handled(message) => Ok(message),
            CommandOutcome::NotACommand => {
                debug!(%owner, "forwarding query to assistant");
                self.assistant
                    .complete(&CompletionRequest::question(language, query))
                    .await
                    .inspect_err(|e| warn!(error = %e, "assistant query failed"))
            }
        }
    }

    /// Ask for advice about the owner's stored transactions
    pub async fn advice(
        &self,
        owner: &OwnerId,
        question: &str,
        language: &str,
    ) -> FinResult<String> {
        if question.trim().is_empty() {
            return Err(FinError::Validation("Question is required".into()));
        }

        let transactions = self.storage.transactions.get_by_owner(owner)?;
        debug!(%owner, count = transactions.len(), "requesting advice");

        self.assistant
            .complete(&CompletionRequest::advice(language, &transactions, question))
            .await
            .inspect_err(|e| warn!(error = %e, "assistant advice failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use crate::storage::TransactionStore;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct FakeAssistant {
        reply: FinResult<String>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl FakeAssistant {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(FinError::Assistant("500: upstream down".into())),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Assistant for FakeAssistant {
        async fn complete(&self, request: &CompletionRequest) -> FinResult<String> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(FinError::Assistant(e.to_string())),
            }
        }
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn owner() -> OwnerId {
        OwnerId::new("alice")
    }

    #[tokio::test]
    async fn test_command_is_handled_locally() {
        let (_temp_dir, storage) = create_test_storage();
        let assistant = FakeAssistant::replying("unused");
        let chat = ChatService::new(&storage, &assistant);

        let reply = chat.ask(&owner(), "sub, coffee, 4", "en").await.unwrap();

        assert_eq!(reply, "Transaction recorded: expense of 4 for coffee.");
        assert!(assistant.requests().is_empty());
        assert_eq!(storage.transactions.get_by_owner(&owner()).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_guidance_is_handled_locally() {
        let (_temp_dir, storage) = create_test_storage();
        let assistant = FakeAssistant::replying("unused");
        let chat = ChatService::new(&storage, &assistant);

        let reply = chat.ask(&owner(), "add, food", "en").await.unwrap();

        assert!(reply.contains("food"));
        assert!(assistant.requests().is_empty());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_question_is_forwarded_verbatim() {
        let (_temp_dir, storage) = create_test_storage();
        let assistant = FakeAssistant::replying("**Summary**\nSpend less.");
        let chat = ChatService::new(&storage, &assistant);

        let reply = chat
            .ask(&owner(), "How do I build an emergency fund?", "fr")
            .await
            .unwrap();

        assert_eq!(reply, "**Summary**\nSpend less.");
        let requests = assistant.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].user, "How do I build an emergency fund?");
        assert!(requests[0].system.contains("Respond in the fr language"));
        assert!(!requests[0].tuned);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let assistant = FakeAssistant::replying("unused");
        let chat = ChatService::new(&storage, &assistant);

        let err = chat.ask(&owner(), "   ", "en").await.unwrap_err();
        assert!(err.is_validation());
        assert!(assistant.requests().is_empty());
    }

    #[tokio::test]
    async fn test_assistant_failure_propagates() {
        let (_temp_dir, storage) = create_test_storage();
        let assistant = FakeAssistant::failing();
        let chat = ChatService::new(&storage, &assistant);

        let err = chat.ask(&owner(), "Any tips?", "en").await.unwrap_err();
        assert!(matches!(err, FinError::Assistant(_)));
    }

    #[tokio::test]
    async fn test_advice_includes_owner_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .append(Transaction::new(
                owner(),
                TransactionKind::Expense,
                Money::from_cents(4200),
                "dining",
            ))
            .unwrap();
        storage
            .append(Transaction::new(
                OwnerId::new("bob"),
                TransactionKind::Expense,
                Money::from_cents(100),
                "secret",
            ))
            .unwrap();

        let assistant = FakeAssistant::replying("Cook at home.");
        let chat = ChatService::new(&storage, &assistant);

        let reply = chat.advice(&owner(), "Where can I cut?", "en").await.unwrap();
        assert_eq!(reply, "Cook at home.");

        let requests = assistant.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].tuned);
        assert!(requests[0].user.contains("| 42 | expense | dining |"));
        assert!(!requests[0].user.contains("secret"));
        assert!(requests[0].user.contains("Question: Where can I cut?"));
    }

    #[tokio::test]
    async fn test_advice_requires_question() {
        let (_temp_dir, storage) = create_test_storage();
        let assistant = FakeAssistant::replying("unused");
        let chat = ChatService::new(&storage, &assistant);

        assert!(chat.advice(&owner(), "", "en").await.unwrap_err().is_validation());
    }
}
