pub mod error;
pub mod language;
pub mod length;
pub mod model;
pub mod prompt;
pub mod service;
pub mod text;

pub use error::ScriptServiceError;
pub use language::{Dialect, Language, LengthUnit};
pub use length::{measure, LengthTarget};
pub use model::{
    Domain, GeneratedScript, LengthReport, ScriptConfig, ScriptDuration, SpeakerPair,
};
pub use service::{ScriptService, ScriptServiceApi};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for POST /api/scripts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScriptRequest {
    #[serde(default)]
    pub topic: String,
    pub language: Language,
    pub dialect: Dialect,
    pub duration: ScriptDuration,
    pub speakers: SpeakerPair,
    pub domain: Domain,
    /// Overrides the server's provider key for this request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Links for fetching a script in each export format
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadLinks {
    pub txt: String,
    pub pdf: String,
}

/// Response for script endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ScriptResponse {
    pub id: Uuid,
    pub topic: String,
    pub language: Language,
    pub dialect: Dialect,
    pub duration: ScriptDuration,
    pub speakers: SpeakerPair,
    pub domain: Domain,
    pub script: String,
    pub length: LengthReport,
    pub extension_attempts: u32,
    pub reached_target: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub speaker_turns: usize,
    pub created_at: DateTime<Utc>,
    pub downloads: DownloadLinks,
}

impl From<GeneratedScript> for ScriptResponse {
    fn from(script: GeneratedScript) -> Self {
        let download_base = format!("/api/scripts/{}/download", script.id);
        Self {
            id: script.id,
            topic: script.config.topic,
            language: script.config.language,
            dialect: script.config.dialect,
            duration: script.config.duration,
            speakers: script.config.speakers,
            domain: script.config.domain,
            script: script.text,
            length: script.length,
            extension_attempts: script.extension_attempts,
            reached_target: script.reached_target,
            warning: script.warning,
            speaker_turns: script.speaker_turns,
            created_at: script.created_at,
            downloads: DownloadLinks {
                txt: format!("{}?format=txt", download_base),
                pdf: format!("{}?format=pdf", download_base),
            },
        }
    }
}
