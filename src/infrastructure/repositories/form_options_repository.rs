use crate::domain::options::{
    ChoiceOption, DialectOption, DurationOption, FormOptions, FormOptionsRepository,
    LanguageOption,
};
use crate::domain::script::{Domain, Language, ScriptDuration, SpeakerPair};
use std::sync::LazyLock;

static FORM_OPTIONS: LazyLock<FormOptions> = LazyLock::new(|| FormOptions {
    languages: Language::ALL
        .iter()
        .map(|language| LanguageOption {
            id: language.as_str().to_string(),
            name: language.name().to_string(),
            length_unit: language.length_unit().as_str().to_string(),
            dialects: language
                .dialects()
                .iter()
                .map(|dialect| DialectOption {
                    id: dialect.tag().to_string(),
                    label: dialect.label().to_string(),
                })
                .collect(),
        })
        .collect(),
    durations: ScriptDuration::ALL
        .iter()
        .map(|duration| DurationOption {
            id: duration.minutes().to_string(),
            minutes: duration.minutes(),
            label: format!("{} minutes", duration.minutes()),
        })
        .collect(),
    speakers: SpeakerPair::ALL
        .iter()
        .map(|pair| ChoiceOption {
            id: pair.id().to_string(),
            label: pair.label().to_string(),
        })
        .collect(),
    domains: Domain::ALL
        .iter()
        .map(|domain| ChoiceOption {
            id: domain.id().to_string(),
            label: domain.label().to_string(),
        })
        .collect(),
});

/// Form catalogue compiled into the binary
pub struct HardcodedFormOptionsRepository;

impl HardcodedFormOptionsRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HardcodedFormOptionsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FormOptionsRepository for HardcodedFormOptionsRepository {
    fn get_form_options(&self) -> FormOptions {
        FORM_OPTIONS.clone()
    }
}
