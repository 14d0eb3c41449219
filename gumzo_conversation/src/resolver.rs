//! Per-user thread lookup and lazy creation.

use chrono::{DateTime, Utc};
use gumzo_core::{ThreadId, ThreadStore};
use std::sync::Arc;
use tracing::{info, warn};

use crate::ConversationError;

pub struct ThreadResolver<S = Arc<dyn ThreadStore>>
where
    S: Send + Sync,
{
    store: S,
}

impl<S> ThreadResolver<S>
where
    S: ThreadStore + Send + Sync,
{
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Return the user's thread id, creating `thread_<user_id>_<unix secs>`
    /// on first contact.
    pub async fn resolve(&self, user_id: &str) -> Result<ThreadId, ConversationError> {
        self.resolve_at(user_id, Utc::now()).await
    }

    /// [`resolve`](Self::resolve) with an explicit creation time.
    pub async fn resolve_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ThreadId, ConversationError> {
        if let Some(existing) = self.store.lookup(user_id).await? {
            info!("Retrieving existing thread {existing} for user {user_id}");
            return Ok(existing);
        }

        let candidate = ThreadId::generate(user_id, now);
        info!("Creating new thread {candidate} for user {user_id}");

        let stored = self.store.store_if_absent(user_id, &candidate).await?;
        if stored != candidate {
            warn!("Thread for user {user_id} was created concurrently, using {stored}");
        }

        Ok(stored)
    }
}
