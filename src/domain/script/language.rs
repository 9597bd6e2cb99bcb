use serde::{Deserialize, Serialize};

/// Languages a script can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
}

/// How the length of a script is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Words,
    Characters,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Words => "words",
            LengthUnit::Characters => "characters",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::Hindi,
        Language::Korean,
        Language::Japanese,
        Language::Chinese,
        Language::Thai,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Korean => "ko",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
            Language::Thai => "th",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
        }
    }

    /// Human readable name, as it appears in prompts
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Korean => "Korean",
            Language::Japanese => "Japanese",
            Language::Chinese => "Mandarin Chinese",
            Language::Thai => "Thai",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }

    /// Scripts in these languages are measured in characters, everything else in words
    pub fn length_unit(&self) -> LengthUnit {
        match self {
            Language::Japanese | Language::Korean | Language::Chinese | Language::Thai => {
                LengthUnit::Characters
            }
            _ => LengthUnit::Words,
        }
    }

    pub fn dialects(&self) -> &'static [Dialect] {
        match self {
            Language::English => &[
                Dialect::UnitedStates,
                Dialect::UnitedKingdom,
                Dialect::Australia,
                Dialect::IndianEnglish,
            ],
            Language::Hindi => &[Dialect::India],
            Language::Korean => &[Dialect::Seoul],
            Language::Japanese => &[Dialect::Tokyo],
            Language::Chinese => &[Dialect::MainlandChina, Dialect::Taiwan],
            Language::Thai => &[Dialect::Bangkok],
            Language::Spanish => &[Dialect::Spain, Dialect::Mexico],
            Language::French => &[Dialect::France, Dialect::Canada],
            Language::German => &[Dialect::Germany],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Regional variant of a language, identified by its BCP 47 tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    #[serde(rename = "en-US")]
    UnitedStates,
    #[serde(rename = "en-GB")]
    UnitedKingdom,
    #[serde(rename = "en-AU")]
    Australia,
    #[serde(rename = "en-IN")]
    IndianEnglish,
    #[serde(rename = "hi-IN")]
    India,
    #[serde(rename = "ko-KR")]
    Seoul,
    #[serde(rename = "ja-JP")]
    Tokyo,
    #[serde(rename = "zh-CN")]
    MainlandChina,
    #[serde(rename = "zh-TW")]
    Taiwan,
    #[serde(rename = "th-TH")]
    Bangkok,
    #[serde(rename = "es-ES")]
    Spain,
    #[serde(rename = "es-MX")]
    Mexico,
    #[serde(rename = "fr-FR")]
    France,
    #[serde(rename = "fr-CA")]
    Canada,
    #[serde(rename = "de-DE")]
    Germany,
}

impl Dialect {
    pub fn tag(&self) -> &'static str {
        match self {
            Dialect::UnitedStates => "en-US",
            Dialect::UnitedKingdom => "en-GB",
            Dialect::Australia => "en-AU",
            Dialect::IndianEnglish => "en-IN",
            Dialect::India => "hi-IN",
            Dialect::Seoul => "ko-KR",
            Dialect::Tokyo => "ja-JP",
            Dialect::MainlandChina => "zh-CN",
            Dialect::Taiwan => "zh-TW",
            Dialect::Bangkok => "th-TH",
            Dialect::Spain => "es-ES",
            Dialect::Mexico => "es-MX",
            Dialect::France => "fr-FR",
            Dialect::Canada => "fr-CA",
            Dialect::Germany => "de-DE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dialect::UnitedStates => "United States",
            Dialect::UnitedKingdom => "United Kingdom",
            Dialect::Australia => "Australia",
            Dialect::IndianEnglish => "India",
            Dialect::India => "India",
            Dialect::Seoul => "Seoul",
            Dialect::Tokyo => "Tokyo",
            Dialect::MainlandChina => "Mainland China",
            Dialect::Taiwan => "Taiwan",
            Dialect::Bangkok => "Bangkok",
            Dialect::Spain => "Spain",
            Dialect::Mexico => "Mexico",
            Dialect::France => "France",
            Dialect::Canada => "Canada",
            Dialect::Germany => "Germany",
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Dialect::UnitedStates
            | Dialect::UnitedKingdom
            | Dialect::Australia
            | Dialect::IndianEnglish => Language::English,
            Dialect::India => Language::Hindi,
            Dialect::Seoul => Language::Korean,
            Dialect::Tokyo => Language::Japanese,
            Dialect::MainlandChina | Dialect::Taiwan => Language::Chinese,
            Dialect::Bangkok => Language::Thai,
            Dialect::Spain | Dialect::Mexico => Language::Spanish,
            Dialect::France | Dialect::Canada => Language::French,
            Dialect::Germany => Language::German,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
