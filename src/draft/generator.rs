//! Draft generation: prompt, single oracle call, reply parsing.

use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, DraftError, DraftKind};
use crate::llm::{ChatClient, CompletionRequest, Oracle, Provider};

use super::parse::parse_drafts;
use super::prompt::{
    Style, THREAD_SYSTEM_PROMPT, TWEETS_SYSTEM_PROMPT, build_thread_prompt, build_tweets_prompt,
};

const TEMPERATURE: f32 = 0.8;
const TWEETS_MAX_TOKENS: u32 = 1000;
const THREAD_MAX_TOKENS: u32 = 1500;

/// Turns formatted commit text into post candidates.
pub struct DraftGenerator<O: Oracle = ChatClient> {
    oracle: O,
    model: String,
}

impl DraftGenerator<ChatClient> {
    /// Build a generator for `provider` from resolved credentials.
    ///
    /// Fails with `MissingCredential` when the provider has no API key.
    pub fn new(config: &Config, provider: Provider) -> Result<Self, ConfigError> {
        let api_key = config.api_key(provider)?;
        let client = ChatClient::new(api_key, config.base_url(provider));
        debug!("Using {} via {}", provider.model(), client.endpoint());
        Ok(Self::with_oracle(client, provider.model()))
    }

    /// Same as [`DraftGenerator::new`], with the provider given by name.
    ///
    /// Fails with `UnsupportedProvider` for an unknown name.
    pub fn for_provider_name(config: &Config, name: &str) -> Result<Self, ConfigError> {
        Self::new(config, name.parse()?)
    }
}

impl<O: Oracle> DraftGenerator<O> {
    /// Build a generator around any oracle.
    pub fn with_oracle(oracle: O, model: impl Into<String>) -> Self {
        Self {
            oracle,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate standalone post options.
    ///
    /// `option_count` is only passed to the model; the result is not padded
    /// or truncated to match it.
    pub async fn generate_tweets(
        &self,
        commit_text: &str,
        style: Style,
        option_count: usize,
    ) -> Result<Vec<String>, DraftError> {
        let prompt = build_tweets_prompt(commit_text, style, option_count);
        self.generate(DraftKind::Tweets, TWEETS_SYSTEM_PROMPT, prompt, TWEETS_MAX_TOKENS)
            .await
    }

    /// Generate a 2-4 post thread.
    pub async fn generate_thread(&self, commit_text: &str) -> Result<Vec<String>, DraftError> {
        let prompt = build_thread_prompt(commit_text);
        self.generate(DraftKind::Thread, THREAD_SYSTEM_PROMPT, prompt, THREAD_MAX_TOKENS)
            .await
    }

    async fn generate(
        &self,
        kind: DraftKind,
        system: &str,
        prompt: String,
        max_tokens: u32,
    ) -> Result<Vec<String>, DraftError> {
        debug!("Requesting {} ({} prompt chars)", kind, prompt.len());

        let request = CompletionRequest {
            model: self.model.clone(),
            system: system.to_string(),
            prompt,
            temperature: TEMPERATURE,
            max_tokens,
        };

        let reply = self
            .oracle
            .complete(request)
            .await
            .map_err(|source| DraftError::GenerationFailed { kind, source })?;

        let drafts = parse_drafts(&reply);
        debug!("Parsed {} candidate(s) from {} reply chars", drafts.len(), reply.len());

        Ok(drafts)
    }
}
