use gumzo_config::Config;
use tracing::info;

/// Strategy for displaying the effective configuration.
///
/// Shows the masked API key, the thread store and whether it opens, and the
/// generation settings.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_unvalidated()?;

        println!("=== gumzo Configuration ===\n");

        println!("API Key:");
        println!("  Gemini: {}", mask_secret(&config.gemini.api_key));
        println!();

        println!("Thread Store:");
        println!("  Path: {}", config.database.path.display());

        info!("Testing thread store");
        match super::open_existing_store(&config).await {
            Ok(_) => println!("  Status: Ready"),
            Err(e) => {
                println!("  Status: Unavailable");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Generation:");
        println!("  Model: {}", config.gemini.model);
        println!(
            "  System Instruction: {}",
            truncate(&config.gemini.system_instruction, 60)
        );
        println!("  Language: {}", config.language);
        println!("  Fallback: {}", config.language.fallback_reply());

        Ok(())
    }
}

fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        "(not set)".to_string()
    } else if secret.len() > 8 && secret.is_ascii() {
        format!("{}...{}", &secret[..4], &secret[secret.len() - 4..])
    } else {
        "***".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
