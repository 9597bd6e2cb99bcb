use super::language::LengthUnit;
use super::model::{LengthReport, ScriptDuration};

/// Character-counted languages get this many characters per word-equivalent
const CHARACTERS_PER_WORD: usize = 3;

/// Inclusive length band a generated script should land in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthTarget {
    pub unit: LengthUnit,
    pub min: usize,
    pub max: usize,
}

impl LengthTarget {
    pub fn for_duration(duration: ScriptDuration, unit: LengthUnit) -> Self {
        let (min_words, max_words) = match duration {
            ScriptDuration::Minutes21 => (2100, 2500),
            ScriptDuration::Minutes41 => (4100, 4800),
        };

        match unit {
            LengthUnit::Words => Self {
                unit,
                min: min_words,
                max: max_words,
            },
            LengthUnit::Characters => Self {
                unit,
                min: min_words * CHARACTERS_PER_WORD,
                max: max_words * CHARACTERS_PER_WORD,
            },
        }
    }

    /// e.g. "2100 to 2500 words"
    pub fn describe(&self) -> String {
        format!("{} to {} {}", self.min, self.max, self.unit)
    }

    /// How much is still missing before the lower bound is met
    pub fn shortfall(&self, count: usize) -> usize {
        self.min.saturating_sub(count)
    }

    pub fn report(&self, text: &str) -> LengthReport {
        LengthReport {
            unit: self.unit,
            count: measure(text, self.unit),
            target_min: self.min,
            target_max: self.max,
        }
    }
}

/// Measure text in the given unit.
///
/// Words are whitespace separated tokens. Characters are non-whitespace
/// Unicode scalar values, so line breaks and spaces between turns do not
/// inflate the count.
pub fn measure(text: &str, unit: LengthUnit) -> usize {
    match unit {
        LengthUnit::Words => text.split_whitespace().count(),
        LengthUnit::Characters => text.chars().filter(|c| !c.is_whitespace()).count(),
    }
}
