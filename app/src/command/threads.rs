use gumzo_config::Config;
use gumzo_core::ThreadStore;

/// Strategy for listing the stored user → thread records.
#[derive(Debug, Clone, Copy)]
pub struct ThreadsStrategy;

impl super::CommandStrategy for ThreadsStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_unvalidated()?;
        let store = super::open_store(&config).await?;

        let records = store.list().await?;
        if records.is_empty() {
            println!("No threads stored in {}", config.database.path.display());
            return Ok(());
        }

        for record in &records {
            println!(
                "{}\t{}\t{}",
                record.user_id,
                record.thread_id,
                record.created_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
        println!("\n{} thread(s)", records.len());

        Ok(())
    }
}
