use super::text_generation_repository::TextGenerationRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::time::Duration;

/// OpenAI chat completions implementation of the text generation repository
pub struct OpenAiTextRepository {
    model: String,
    api_base: Option<String>,
    timeout: Duration,
}

impl OpenAiTextRepository {
    pub fn new(model: String, api_base: Option<String>, timeout: Duration) -> Self {
        Self {
            model,
            api_base,
            timeout,
        }
    }

    /// The key arrives per request, so the client is built per request too
    fn client(&self, api_key: &str) -> Client<OpenAIConfig> {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(api_base) = &self.api_base {
            config = config.with_api_base(api_base);
        }
        Client::with_config(config)
    }

    async fn call_openai(&self, api_key: &str, prompt: &str) -> Result<String, String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| format!("OpenAI request error: {}", e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([message.into()])
            .build()
            .map_err(|e| format!("OpenAI request error: {}", e))?;

        let response = self
            .client(api_key)
            .chat()
            .create(request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    prompt_length = prompt.len(),
                    "OpenAI chat completion failed"
                );
                format!("OpenAI error: {}", e)
            })?;

        let text: String = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err("OpenAI returned no text".to_string());
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerationRepository for OpenAiTextRepository {
    fn provider(&self) -> &'static str {
        "openai"
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling OpenAI chat completions"
        );

        let text = tokio::time::timeout(self.timeout, self.call_openai(api_key, prompt))
            .await
            .map_err(|_| {
                format!(
                    "OpenAI request timed out after {} seconds",
                    self.timeout.as_secs()
                )
            })??;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            response_length = text.len(),
            "OpenAI generation completed"
        );

        Ok(text)
    }
}
