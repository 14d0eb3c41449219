use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Thread store error: {0}")]
    Store(#[from] anyhow::Error),
}
