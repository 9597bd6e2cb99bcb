use super::{FormOptions, FormOptionsRepository, LanguageOption};
use std::sync::Arc;

pub struct FormOptionsService {
    repository: Arc<dyn FormOptionsRepository>,
}

impl FormOptionsService {
    pub fn new(repository: Arc<dyn FormOptionsRepository>) -> Self {
        Self { repository }
    }

    /// Returns the full catalogue for populating the form
    pub fn get_options(&self) -> FormOptions {
        self.repository.get_form_options()
    }

    /// Returns a single language with its dialects
    pub fn get_language(&self, language_id: &str) -> Option<LanguageOption> {
        let language = self
            .repository
            .get_form_options()
            .languages
            .into_iter()
            .find(|language| language.id == language_id);

        if language.is_none() {
            tracing::info!(language_id = %language_id, "Unknown language requested");
        }

        language
    }
}
