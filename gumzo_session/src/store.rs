use async_trait::async_trait;
use gumzo_core::{ThreadId, ThreadRecord, ThreadStore};
use gumzo_entities::threads;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Schema, Set,
};
use std::path::Path;
use tracing::{debug, info};

/// `ThreadStore` backed by a SQLite file through sea-orm.
///
/// Every operation is a single auto-committed statement on a pooled
/// connection, so a write is on disk once the call returns.
pub struct SqliteThreadStore {
    db: DatabaseConnection,
}

impl SqliteThreadStore {
    /// Open (creating if needed) the SQLite database at `path`.
    pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::connect(&sqlite_url(path.as_ref(), "rwc")?).await
    }

    /// Open the SQLite database at `path` only if the file already exists.
    pub async fn open_existing(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::connect(&sqlite_url(path.as_ref(), "rw")?).await
    }

    /// Connect with an explicit sea-orm URL and ensure the `threads` table
    /// exists.
    pub async fn connect(db_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to thread store: {}", db_url);

        let db = Database::connect(db_url).await?;

        let backend = db.get_database_backend();
        let schema = Schema::new(backend);
        let mut stmt = schema.create_table_from_entity(threads::Entity);
        stmt.if_not_exists();
        db.execute_unprepared(&backend.build(&stmt).to_string())
            .await?;

        info!("Thread store initialized");
        Ok(Self { db })
    }

    fn active_model(user_id: &str, thread_id: &ThreadId) -> threads::ActiveModel {
        threads::ActiveModel {
            user_id: Set(user_id.to_owned()),
            thread_id: Set(thread_id.as_str().to_owned()),
            created_at: Set(chrono::Utc::now().naive_utc()),
        }
    }
}

// The path is spliced into a URL verbatim; characters with URL meaning are refused.
fn sqlite_url(path: &Path, mode: &str) -> anyhow::Result<String> {
    let path = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Thread store path is not UTF-8: {}", path.display()))?;

    if let Some(c) = path.chars().find(|c| matches!(c, '?' | '#' | '%')) {
        anyhow::bail!("Thread store path {path} contains '{c}', which is not supported");
    }

    Ok(format!("sqlite:{path}?mode={mode}"))
}

#[async_trait]
impl ThreadStore for SqliteThreadStore {
    async fn lookup(&self, user_id: &str) -> anyhow::Result<Option<ThreadId>> {
        let model = threads::Entity::find_by_id(user_id.to_owned())
            .one(&self.db)
            .await?;

        Ok(model.map(|m| ThreadId::from(m.thread_id)))
    }

    async fn store(&self, user_id: &str, thread_id: &ThreadId) -> anyhow::Result<()> {
        threads::Entity::insert(Self::active_model(user_id, thread_id))
            .on_conflict(
                OnConflict::column(threads::Column::UserId)
                    .update_column(threads::Column::ThreadId)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        debug!("Stored thread {} for user {}", thread_id, user_id);
        Ok(())
    }

    async fn store_if_absent(
        &self,
        user_id: &str,
        thread_id: &ThreadId,
    ) -> anyhow::Result<ThreadId> {
        let inserted = threads::Entity::insert(Self::active_model(user_id, thread_id))
            .on_conflict(
                OnConflict::column(threads::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;

        match inserted {
            Ok(0) | Err(DbErr::RecordNotInserted) => {
                debug!("Thread for user {} already present, keeping it", user_id);
            }
            Ok(_) => debug!("Stored thread {} for user {}", thread_id, user_id),
            Err(e) => return Err(e.into()),
        }

        self.lookup(user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Thread record for user {user_id} missing after insert"))
    }

    async fn list(&self) -> anyhow::Result<Vec<ThreadRecord>> {
        let models = threads::Entity::find()
            .order_by_asc(threads::Column::UserId)
            .all(&self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| ThreadRecord {
                user_id: m.user_id,
                thread_id: ThreadId::from(m.thread_id),
                created_at: m.created_at.and_utc(),
            })
            .collect())
    }
}
