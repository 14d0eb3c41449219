//! Reply generation with a seeded history and a localized fallback.

use gumzo_config::Config;
use gumzo_core::util::{DEFAULT_MODEL, DEFAULT_SYSTEM_INSTRUCTION};
use gumzo_core::{ChatMessage, LLMProvider, Language, ThreadId};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Everything the generator needs besides the provider.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Model identifier passed to the provider
    pub model: String,
    /// System instruction, also interpolated into the greeting turn
    pub system_instruction: String,
    /// Language of the greeting and of the fallback reply
    pub language: Language,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            language: Language::default(),
        }
    }
}

impl From<&Config> for GenerationSettings {
    fn from(config: &Config) -> Self {
        Self {
            model: config.gemini.model.clone(),
            system_instruction: config.gemini.system_instruction.clone(),
            language: config.language,
        }
    }
}

pub struct ResponseGenerator<P = Arc<dyn LLMProvider>>
where
    P: Send + Sync,
{
    provider: P,
    settings: GenerationSettings,
}

impl<P> ResponseGenerator<P>
where
    P: LLMProvider + Send + Sync,
{
    pub const fn new(provider: P, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Ask the provider for a reply to `message_text`.
    ///
    /// Never fails: an empty reply or any provider error is logged and
    /// replaced by the language's fallback sentence. There is no retry.
    pub async fn generate(
        &self,
        thread_id: &ThreadId,
        display_name: &str,
        message_text: &str,
    ) -> String {
        info!("Running assistant for thread: {thread_id}");

        let messages = self.build_messages(display_name, message_text);
        debug!("Seeded {} messages for thread {thread_id}", messages.len());

        match self.provider.chat(&messages, &self.settings.model).await {
            Ok(response) if !response.content.is_empty() => {
                if let Some(usage) = &response.usage {
                    debug!(
                        "Token usage for thread {thread_id}: prompt={}, completion={}, total={}",
                        usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
                    );
                }
                info!("Generated message: {}", response.content);
                response.content
            }
            Ok(_) => {
                error!("No response generated for thread {thread_id}");
                self.fallback()
            }
            Err(e) => {
                error!("Error running assistant for thread {thread_id}: {e:#}");
                self.fallback()
            }
        }
    }

    /// System instruction, the two seed turns, then the new user turn.
    ///
    /// The seeded model turn holds the inbound message itself, not an earlier
    /// reply.
    #[must_use]
    pub fn build_messages(&self, display_name: &str, message_text: &str) -> Vec<ChatMessage> {
        let instruction = &self.settings.system_instruction;

        vec![
            ChatMessage::system(instruction.as_str()),
            ChatMessage::user(self.settings.language.greeting(display_name, instruction)),
            ChatMessage::assistant(message_text),
            ChatMessage::user(message_text),
        ]
    }

    fn fallback(&self) -> String {
        self.settings.language.fallback_reply().to_string()
    }
}
