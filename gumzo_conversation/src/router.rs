//! Top-level message handling.

use gumzo_core::{LLMProvider, ThreadRecord, ThreadStore};
use std::sync::Arc;
use tracing::info;

use crate::{ConversationError, GenerationSettings, ResponseGenerator, ThreadResolver};

/// Entry point for the hosting process: one call per inbound message.
///
/// Built once at startup and shared (it is `Send + Sync`); it holds no
/// per-message state.
pub struct ConversationRouter<P = Arc<dyn LLMProvider>, S = Arc<dyn ThreadStore>>
where
    P: Send + Sync,
    S: Send + Sync,
{
    resolver: ThreadResolver<S>,
    generator: ResponseGenerator<P>,
}

impl<P, S> ConversationRouter<P, S>
where
    P: LLMProvider + Send + Sync,
    S: ThreadStore + Send + Sync,
{
    pub const fn new(provider: P, store: S, settings: GenerationSettings) -> Self {
        Self {
            resolver: ThreadResolver::new(store),
            generator: ResponseGenerator::new(provider, settings),
        }
    }

    /// Resolve the sender's thread, then generate a reply.
    ///
    /// Only a thread store failure is returned as an error; generation
    /// problems come back as the fallback reply.
    pub async fn handle_message(
        &self,
        message_text: &str,
        user_id: &str,
        display_name: &str,
    ) -> Result<String, ConversationError> {
        let thread_id = self.resolver.resolve(user_id).await?;

        info!("Processing message from {display_name}: {message_text}");

        Ok(self
            .generator
            .generate(&thread_id, display_name, message_text)
            .await)
    }

    /// Every stored user → thread record.
    pub async fn threads(&self) -> Result<Vec<ThreadRecord>, ConversationError> {
        Ok(self.resolver.store().list().await?)
    }

    #[must_use]
    pub const fn generator(&self) -> &ResponseGenerator<P> {
        &self.generator
    }
}
