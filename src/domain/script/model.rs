use super::language::{Dialect, Language, LengthUnit};
use super::length::LengthTarget;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Target running time of a script, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptDuration {
    #[serde(rename = "21")]
    Minutes21,
    #[serde(rename = "41")]
    Minutes41,
}

impl ScriptDuration {
    pub const ALL: [ScriptDuration; 2] = [ScriptDuration::Minutes21, ScriptDuration::Minutes41];

    pub fn minutes(&self) -> u32 {
        match self {
            ScriptDuration::Minutes21 => 21,
            ScriptDuration::Minutes41 => 41,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeakerPair {
    MaleFemale,
    MaleMale,
    FemaleFemale,
}

impl SpeakerPair {
    pub const ALL: [SpeakerPair; 3] = [
        SpeakerPair::MaleFemale,
        SpeakerPair::MaleMale,
        SpeakerPair::FemaleFemale,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SpeakerPair::MaleFemale => "male_female",
            SpeakerPair::MaleMale => "male_male",
            SpeakerPair::FemaleFemale => "female_female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeakerPair::MaleFemale => "Male and Female",
            SpeakerPair::MaleMale => "Male and Male",
            SpeakerPair::FemaleFemale => "Female and Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Healthcare,
    CallCenter,
    Finance,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Healthcare, Domain::CallCenter, Domain::Finance];

    pub fn id(&self) -> &'static str {
        match self {
            Domain::Healthcare => "healthcare",
            Domain::CallCenter => "call_center",
            Domain::Finance => "finance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Domain::Healthcare => "Healthcare",
            Domain::CallCenter => "Call center",
            Domain::Finance => "Finance",
        }
    }
}

/// Validated form input for a single generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub topic: String,
    pub language: Language,
    pub dialect: Dialect,
    pub duration: ScriptDuration,
    pub speakers: SpeakerPair,
    pub domain: Domain,
}

impl ScriptConfig {
    pub fn length_unit(&self) -> LengthUnit {
        self.language.length_unit()
    }

    pub fn length_target(&self) -> LengthTarget {
        LengthTarget::for_duration(self.duration, self.length_unit())
    }
}

/// Length of a script measured against its target band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthReport {
    pub unit: LengthUnit,
    pub count: usize,
    pub target_min: usize,
    pub target_max: usize,
}

impl LengthReport {
    pub fn reached_target(&self) -> bool {
        self.count >= self.target_min
    }

    pub fn exceeds_target(&self) -> bool {
        self.count > self.target_max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedScript {
    pub id: Uuid,
    pub config: ScriptConfig,
    pub text: String,
    pub length: LengthReport,
    pub extension_attempts: u32,
    pub reached_target: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub speaker_turns: usize,
    pub created_at: DateTime<Utc>,
}
