use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        export::{export_script, ExportFormat, ExportedFile},
        script::{GenerateScriptRequest, ScriptResponse, ScriptService, ScriptServiceApi},
    },
    error::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

pub struct ScriptController {
    script_service: Arc<ScriptService>,
}

impl ScriptController {
    pub fn new(script_service: Arc<ScriptService>) -> Self {
        Self { script_service }
    }

    /// POST /api/scripts - Generate a script from the form
    pub async fn generate(
        State(controller): State<Arc<ScriptController>>,
        Json(request): Json<GenerateScriptRequest>,
    ) -> AppResult<(StatusCode, Json<ScriptResponse>)> {
        let script = controller
            .script_service
            .generate(request)
            .await
            .map_err(AppError::from)?;

        Ok((StatusCode::CREATED, Json(ScriptResponse::from(script))))
    }

    /// GET /api/scripts/:scriptId - Fetch a generated script
    pub async fn get_script(
        State(controller): State<Arc<ScriptController>>,
        Path(script_id): Path<Uuid>,
    ) -> AppResult<Json<ScriptResponse>> {
        let script = controller
            .script_service
            .get(script_id)
            .await
            .map_err(AppError::from)?;

        Ok(Json(ScriptResponse::from(script)))
    }

    /// GET /api/scripts/:scriptId/download?format=txt|pdf - Download as a file
    pub async fn download(
        State(controller): State<Arc<ScriptController>>,
        Path(script_id): Path<Uuid>,
        Query(query): Query<DownloadQuery>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let script = controller
            .script_service
            .get(script_id)
            .await
            .map_err(AppError::from)?;

        let file = export_script(&script.text, query.format);

        tracing::info!(
            script_id = %script_id,
            format = ?query.format,
            size = file.data.len(),
            "Script downloaded"
        );

        let mut headers = attachment_headers(&file)?;
        headers.insert(
            "X-Script-Id",
            HeaderValue::from_str(&script_id.to_string())
                .map_err(|e| AppError::Internal(e.to_string()))?,
        );

        Ok((StatusCode::OK, headers, Body::from(file.data)))
    }
}

/// Content-Type and Content-Disposition for a file download
pub fn attachment_headers(file: &ExportedFile) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(file.content_type));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file.file_name))
            .map_err(|e| AppError::Internal(e.to_string()))?,
    );
    Ok(headers)
}
