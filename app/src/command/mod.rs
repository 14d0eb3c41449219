//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with its own input, dispatched
//! statically from `main`.

use gumzo_config::Config;
use gumzo_conversation::{ConversationRouter, GenerationSettings};
use gumzo_providers::GeminiProvider;
use gumzo_session::SqliteThreadStore;
use tracing::info;

mod info;
mod init;
mod reply;
mod threads;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use reply::{ReplyInput, ReplyStrategy};
pub use threads::ThreadsStrategy;
pub use version::VersionStrategy;

/// Open the thread store named by the config, creating it if needed.
async fn open_store(config: &Config) -> anyhow::Result<SqliteThreadStore> {
    info!("Thread store path: {}", config.database.path.display());
    SqliteThreadStore::open(&config.database.path).await
}

/// Open the thread store named by the config without creating the file.
async fn open_existing_store(config: &Config) -> anyhow::Result<SqliteThreadStore> {
    info!("Thread store path: {}", config.database.path.display());
    SqliteThreadStore::open_existing(&config.database.path).await
}

/// Wire the provider, the store and the generation settings into a router.
async fn build_router(
    config: &Config,
) -> anyhow::Result<ConversationRouter<GeminiProvider, SqliteThreadStore>> {
    let provider = GeminiProvider::new(config.gemini.api_key.clone());
    let store = open_store(config).await?;

    Ok(ConversationRouter::new(
        provider,
        store,
        GenerationSettings::from(config),
    ))
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type; calls are monomorphized, so no
/// trait objects are involved.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
