use super::error::ScriptServiceError;
use super::length::LengthTarget;
use super::model::{GeneratedScript, LengthReport, ScriptConfig};
use super::prompt::{build_continuation_prompt, build_script_prompt};
use super::text::{append_continuation, clean_script, count_speaker_turns};
use super::GenerateScriptRequest;
use crate::infrastructure::repositories::TextGenerationRepository;
use async_trait::async_trait;
use chrono::Utc;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub struct ScriptService {
    text_repo: Arc<dyn TextGenerationRepository>,
    default_api_key: Option<String>,
    max_extension_attempts: u32,
    cache: Cache<Uuid, GeneratedScript>,
}

impl ScriptService {
    pub fn new(
        text_repo: Arc<dyn TextGenerationRepository>,
        default_api_key: Option<String>,
        max_extension_attempts: u32,
        cache_capacity: u64,
        cache_ttl: Duration,
    ) -> Self {
        // Generated scripts only need to outlive the "download" click
        let cache = Cache::builder()
            .max_capacity(cache_capacity)
            .time_to_idle(cache_ttl)
            .build();

        Self {
            text_repo,
            default_api_key: default_api_key.filter(|key| !key.trim().is_empty()),
            max_extension_attempts,
            cache,
        }
    }

    pub fn provider(&self) -> &'static str {
        self.text_repo.provider()
    }

    pub fn has_default_credentials(&self) -> bool {
        self.default_api_key.is_some()
    }
}

/// Outcome of the generate-then-extend chain before it is stored
struct ExtensionOutcome {
    text: String,
    length: LengthReport,
    attempts: u32,
    /// Most recent continuation failure, if any
    last_error: Option<String>,
}

#[async_trait]
pub trait ScriptServiceApi: Send + Sync {
    /// Generate a two speaker script for the submitted form
    ///
    /// This operation:
    /// - Resolves the provider API key (request key first, then server key)
    /// - Validates the topic and the language/dialect pair
    /// - Calls the provider, then keeps asking it to continue while the
    ///   script is shorter than its target band, up to the attempt ceiling
    /// - Stores the result so it can be downloaded afterwards
    ///
    /// Falling short of the target is not an error; the result carries a warning.
    async fn generate(
        &self,
        request: GenerateScriptRequest,
    ) -> Result<GeneratedScript, ScriptServiceError>;

    /// Look up a previously generated script
    async fn get(&self, script_id: Uuid) -> Result<GeneratedScript, ScriptServiceError>;
}

#[async_trait]
impl ScriptServiceApi for ScriptService {
    async fn generate(
        &self,
        request: GenerateScriptRequest,
    ) -> Result<GeneratedScript, ScriptServiceError> {
        // 1. Credentials come before anything else, like the form did
        let api_key = self.resolve_api_key(request.api_key.as_deref())?;

        // 2. Validate form input
        let config = self.validate(request)?;

        tracing::info!(
            provider = self.text_repo.provider(),
            language = %config.language,
            dialect = %config.dialect,
            duration_minutes = config.duration.minutes(),
            speakers = config.speakers.id(),
            domain = config.domain.id(),
            topic_length = config.topic.len(),
            "Script generation request"
        );

        // 3. Generate and extend
        let start_time = std::time::Instant::now();
        let outcome = self.generate_and_extend(&api_key, &config).await?;

        let reached_target = outcome.length.reached_target();
        let warning = match (&outcome.last_error, reached_target) {
            (_, true) => None,
            (Some(err), false) => Some(format!(
                "Could not reach target length after {}. \
                 Script has {} of the {} {} targeted. Last provider error: {}",
                attempts_phrase(outcome.attempts),
                outcome.length.count,
                outcome.length.target_min,
                outcome.length.unit,
                err
            )),
            (None, false) => Some(format!(
                "Could not reach target length after {}. \
                 Script has {} of the {} {} targeted.",
                attempts_phrase(outcome.attempts),
                outcome.length.count,
                outcome.length.target_min,
                outcome.length.unit
            )),
        };

        if let Some(message) = &warning {
            tracing::warn!(
                attempts = outcome.attempts,
                count = outcome.length.count,
                target_min = outcome.length.target_min,
                "{}",
                message
            );
        }

        // 4. Store for download
        let script = GeneratedScript {
            id: Uuid::new_v4(),
            speaker_turns: count_speaker_turns(&outcome.text),
            config,
            text: outcome.text,
            length: outcome.length,
            extension_attempts: outcome.attempts,
            reached_target,
            warning,
            created_at: Utc::now(),
        };

        self.cache.insert(script.id, script.clone()).await;

        tracing::info!(
            script_id = %script.id,
            unit = %script.length.unit,
            count = script.length.count,
            target_min = script.length.target_min,
            target_max = script.length.target_max,
            extension_attempts = script.extension_attempts,
            speaker_turns = script.speaker_turns,
            latency_ms = start_time.elapsed().as_millis(),
            "Script generated"
        );

        Ok(script)
    }

    async fn get(&self, script_id: Uuid) -> Result<GeneratedScript, ScriptServiceError> {
        self.cache.get(&script_id).await.ok_or_else(|| {
            tracing::info!(script_id = %script_id, "Script not in cache");
            ScriptServiceError::NotFound
        })
    }
}

impl ScriptService {
    fn resolve_api_key(&self, request_key: Option<&str>) -> Result<String, ScriptServiceError> {
        request_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .or_else(|| self.default_api_key.clone())
            .ok_or_else(|| {
                ScriptServiceError::MissingCredentials(format!(
                    "Please enter your {} API key.",
                    provider_display_name(self.text_repo.provider())
                ))
            })
    }

    fn validate(&self, request: GenerateScriptRequest) -> Result<ScriptConfig, ScriptServiceError> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(ScriptServiceError::Invalid("Please enter a topic.".to_string()));
        }

        if request.dialect.language() != request.language {
            return Err(ScriptServiceError::Invalid(format!(
                "Dialect {} ({}) is not available for {}",
                request.dialect.label(),
                request.dialect,
                request.language.name()
            )));
        }

        Ok(ScriptConfig {
            topic: topic.to_string(),
            language: request.language,
            dialect: request.dialect,
            duration: request.duration,
            speakers: request.speakers,
            domain: request.domain,
        })
    }

    /// Generate a script, then ask for continuations while it is too short.
    ///
    /// The loop stops at the attempt ceiling whether or not the length
    /// converged. A failed continuation still uses up an attempt; the loop
    /// moves on to the next one and keeps the text gathered so far.
    async fn generate_and_extend(
        &self,
        api_key: &str,
        config: &ScriptConfig,
    ) -> Result<ExtensionOutcome, ScriptServiceError> {
        let target: LengthTarget = config.length_target();

        let prompt = build_script_prompt(config, &target);
        let raw = self
            .text_repo
            .generate(api_key, &prompt)
            .await
            .map_err(ScriptServiceError::Dependency)?;

        let mut text = clean_script(&raw);
        let mut length = target.report(&text);
        let mut attempts = 0;
        let mut last_error = None;

        tracing::info!(
            unit = %length.unit,
            count = length.count,
            target_min = length.target_min,
            "Initial script received"
        );

        while !length.reached_target() && attempts < self.max_extension_attempts {
            attempts += 1;

            let prompt = build_continuation_prompt(config, &target, &text, length.count);
            let continuation = match self.text_repo.generate(api_key, &prompt).await {
                Ok(raw) => clean_script(&raw),
                Err(err) => {
                    tracing::warn!(
                        attempt = attempts,
                        max_attempts = self.max_extension_attempts,
                        error = %err,
                        "Continuation request failed"
                    );
                    last_error = Some(err);
                    continue;
                }
            };

            append_continuation(&mut text, &continuation);
            length = target.report(&text);

            tracing::info!(
                attempt = attempts,
                max_attempts = self.max_extension_attempts,
                continuation_count = target.report(&continuation).count,
                count = length.count,
                target_min = length.target_min,
                "Script extended"
            );
        }

        Ok(ExtensionOutcome {
            text,
            length,
            attempts,
            last_error,
        })
    }
}

fn attempts_phrase(attempts: u32) -> String {
    if attempts == 1 {
        "1 attempt".to_string()
    } else {
        format!("{} attempts", attempts)
    }
}

fn provider_display_name(provider: &str) -> &str {
    match provider {
        "gemini" => "Gemini",
        "openai" => "OpenAI",
        other => other,
    }
}
