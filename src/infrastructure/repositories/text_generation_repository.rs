use async_trait::async_trait;

/// Repository for hosted text generation.
/// Abstracts the underlying model provider (Gemini, OpenAI, etc.)
///
/// Implementations are responsible for:
/// - Building the provider-specific request around a plain prompt
/// - Authenticating with the key they are handed
/// - Flattening the provider response into a single text blob
#[async_trait]
pub trait TextGenerationRepository: Send + Sync {
    /// Short provider identifier, e.g. "gemini"
    fn provider(&self) -> &'static str;

    /// Send one prompt and return the generated text
    ///
    /// # Arguments
    /// * `api_key` - Provider key, already resolved by the caller
    /// * `prompt` - The full instruction text
    ///
    /// # Errors
    /// Returns a message if the provider is unreachable, rejects the key,
    /// or answers without any text
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, String>;
}
