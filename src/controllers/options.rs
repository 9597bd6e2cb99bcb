use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::options::{FormOptions, FormOptionsService, LanguageOption},
    error::{AppError, AppResult},
};

pub struct OptionsController {
    service: Arc<FormOptionsService>,
}

impl OptionsController {
    pub fn new(service: Arc<FormOptionsService>) -> Self {
        Self { service }
    }

    /// GET /api/options - Everything the generation form can offer
    pub async fn get_options(
        State(controller): State<Arc<OptionsController>>,
    ) -> AppResult<Json<FormOptions>> {
        Ok(Json(controller.service.get_options()))
    }

    /// GET /api/options/languages/:languageId - One language and its dialects
    pub async fn get_language(
        State(controller): State<Arc<OptionsController>>,
        Path(language_id): Path<String>,
    ) -> AppResult<Json<LanguageOption>> {
        controller
            .service
            .get_language(&language_id)
            .map(Json)
            .ok_or_else(|| AppError::NotFound(format!("Language '{}'", language_id)))
    }
}
