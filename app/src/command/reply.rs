use gumzo_config::Config;
use std::io::Write;
use tracing::info;

/// Input parameters for the Reply command strategy.
#[derive(Debug, Clone)]
pub struct ReplyInput {
    /// Platform user id the messages are attributed to
    pub user_id: String,
    /// Display name interpolated into the greeting turn
    pub display_name: String,
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
}

/// Strategy for answering messages through the conversation router.
///
/// Stands in for a messaging webhook: every line becomes one inbound message
/// from `user_id`.
#[derive(Debug, Clone, Copy)]
pub struct ReplyStrategy;

impl super::CommandStrategy for ReplyStrategy {
    type Input = ReplyInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let router = super::build_router(&config).await?;

        if let Some(message) = input.message {
            let reply = router
                .handle_message(&message, &input.user_id, &input.display_name)
                .await?;
            println!("{reply}");
            return Ok(());
        }

        info!(
            "Interactive session for user {} ({})",
            input.user_id, input.display_name
        );
        println!("gumzo started. Type 'exit' to quit.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();

            if matches!(line, "exit" | "quit") {
                break;
            }

            if line.is_empty() {
                continue;
            }

            let reply = router
                .handle_message(line, &input.user_id, &input.display_name)
                .await?;
            println!("\n{reply}\n");
        }

        Ok(())
    }
}
