use serde::{Deserialize, Serialize};

/// A selectable dialect within a language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialectOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageOption {
    pub id: String,
    pub name: String,
    /// "words" or "characters"
    pub length_unit: String,
    pub dialects: Vec<DialectOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DurationOption {
    pub id: String,
    pub minutes: u32,
    pub label: String,
}

/// Plain id/label pair for speaker combinations and domains
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceOption {
    pub id: String,
    pub label: String,
}

/// Everything the generation form lets a user pick from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormOptions {
    pub languages: Vec<LanguageOption>,
    pub durations: Vec<DurationOption>,
    pub speakers: Vec<ChoiceOption>,
    pub domains: Vec<ChoiceOption>,
}

/// Repository trait for accessing the form catalogue
pub trait FormOptionsRepository: Send + Sync {
    fn get_form_options(&self) -> FormOptions;
}

// Re-export service
pub mod service;
pub use service::FormOptionsService;
