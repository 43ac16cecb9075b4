//! Assistant-backed CLI commands

use crate::assistant::ChatClient;
use crate::config::Settings;
use crate::error::FinResult;
use crate::models::OwnerId;
use crate::services::ChatService;
use crate::storage::Storage;

/// Handle `ask`: shorthand commands are recorded, anything else goes to the assistant
pub async fn handle_ask_command(
    storage: &Storage,
    settings: &Settings,
    owner: &OwnerId,
    language: &str,
    query: &str,
) -> FinResult<()> {
    let client = ChatClient::from_settings(&settings.assistant);
    let reply = ChatService::new(storage, &client)
        .ask(owner, query, language)
        .await?;
    println!("{}", reply);
    Ok(())
}

/// Handle `advice`: ask about the owner's stored transactions
pub async fn handle_advice_command(
    storage: &Storage,
    settings: &Settings,
    owner: &OwnerId,
    language: &str,
    question: &str,
) -> FinResult<()> {
    let client = ChatClient::from_settings(&settings.assistant);
    let reply = ChatService::new(storage, &client)
        .advice(owner, question, language)
        .await?;
    println!("{}", reply);
    Ok(())
}
