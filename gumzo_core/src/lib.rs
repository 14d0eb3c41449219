#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod language;
pub mod thread;
pub mod util;

pub use language::{Language, ParseLanguageError};
pub use thread::ThreadId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// A remote text-generation service.
///
/// `messages` carries the whole request: any `Role::System` entries are the
/// system instruction, the rest is the turn history ending with the new user
/// turn.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse>;
}

#[async_trait]
impl<T: LLMProvider + ?Sized> LLMProvider for Arc<T> {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse> {
        (**self).chat(messages, model).await
    }
}

/// One persisted user → thread association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub user_id: String,
    pub thread_id: ThreadId,
    pub created_at: DateTime<Utc>,
}

/// Durable mapping from platform user id to conversation thread id.
///
/// A missing key is `Ok(None)`, never an error. Errors mean the backing store
/// itself is unusable and must reach the caller.
#[async_trait]
pub trait ThreadStore: Send + Sync {
    async fn lookup(&self, user_id: &str) -> anyhow::Result<Option<ThreadId>>;

    /// Associate `thread_id` with `user_id`, replacing any previous value.
    async fn store(&self, user_id: &str, thread_id: &ThreadId) -> anyhow::Result<()>;

    /// Insert only if `user_id` has no record yet. Returns whichever thread id
    /// is stored once the call completes.
    async fn store_if_absent(
        &self,
        user_id: &str,
        thread_id: &ThreadId,
    ) -> anyhow::Result<ThreadId>;

    async fn list(&self) -> anyhow::Result<Vec<ThreadRecord>>;
}

#[async_trait]
impl<T: ThreadStore + ?Sized> ThreadStore for Arc<T> {
    async fn lookup(&self, user_id: &str) -> anyhow::Result<Option<ThreadId>> {
        (**self).lookup(user_id).await
    }

    async fn store(&self, user_id: &str, thread_id: &ThreadId) -> anyhow::Result<()> {
        (**self).store(user_id, thread_id).await
    }

    async fn store_if_absent(
        &self,
        user_id: &str,
        thread_id: &ThreadId,
    ) -> anyhow::Result<ThreadId> {
        (**self).store_if_absent(user_id, thread_id).await
    }

    async fn list(&self) -> anyhow::Result<Vec<ThreadRecord>> {
        (**self).list().await
    }
}
