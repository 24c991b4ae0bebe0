//! Shared test utilities for integration tests
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use conversation_search::{
    Attachment, Conversation, MemoryStore, Message, Role, SearchConfig, SearchService,
};

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builder for test conversations
pub struct ConversationBuilder {
    conversation: Conversation,
}

impl ConversationBuilder {
    /// Create a conversation with the given id and a default title
    pub fn new(id: &str) -> Self {
        Self { conversation: Conversation::new(id, "New Chat") }
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.conversation.title = title.to_string();
        self
    }

    /// Set an explicit creation time
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.conversation.created_at = Some(created_at);
        self
    }

    /// Append a message
    pub fn message(mut self, message: MessageBuilder) -> Self {
        self.conversation.messages.push(message.build());
        self
    }

    /// Append a user message with plain text
    pub fn user(self, content: &str) -> Self {
        self.message(MessageBuilder::user(content))
    }

    /// Append a model message with plain text
    pub fn model(self, content: &str) -> Self {
        self.message(MessageBuilder::model(content))
    }

    pub fn build(self) -> Conversation {
        self.conversation
    }
}

/// Builder for messages
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn user(content: &str) -> Self {
        Self { message: Message::new(Role::User, content) }
    }

    pub fn model(content: &str) -> Self {
        Self { message: Message::new(Role::Model, content) }
    }

    /// Attach a file reference
    pub fn with_file(mut self, name: &str) -> Self {
        let id = format!("file-{}", self.message.files.len() + 1);
        self.message.files.push(Attachment { id, name: name.to_string() });
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

/// In-memory service with default configuration
pub fn memory_service() -> SearchService<MemoryStore> {
    init_logging();
    SearchService::new(MemoryStore::new(), SearchConfig::default())
}

/// The single "Python Help" conversation used by the end-to-end scenarios
pub fn python_help() -> Vec<Conversation> {
    vec![
        ConversationBuilder::new("1")
            .title("Python Help")
            .user("How do I write a for loop in python?")
            .build(),
    ]
}

/// A small but varied history
pub fn realistic_conversations() -> Vec<Conversation> {
    vec![
        ConversationBuilder::new("1718452800000")
            .title("Python Help")
            .user("How do I write a for loop in python?")
            .model("In Python you write `for item in items:` followed by an indented block.")
            .build(),
        ConversationBuilder::new("1700000000000")
            .title("Trip planning")
            .user("Plan a three day trip to Lisbon")
            .model("Day one: Alfama and the castle. Day two: Belém. Day three: Sintra.")
            .build(),
        ConversationBuilder::new("conv-rust")
            .title("Borrow checker")
            .message(
                MessageBuilder::user("Why does the borrow checker reject this?").with_file("main.rs"),
            )
            .model("The borrow of `v` outlives the loop; clone it or restructure the loop.")
            .build(),
    ]
}
