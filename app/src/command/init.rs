use gumzo_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the starter configuration file at `~/gumzo/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Add your Gemini API key (or export GEMINI_API_KEY)");
        println!("   2. Adjust the system instruction and language if needed");
        println!("   3. Run 'gumzo reply --user <id> --message <text>' to try it");
        Ok(())
    }
}
