use axum::{
    body::Body,
    extract::Query,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use super::script::{attachment_headers, DownloadQuery};
use crate::{
    domain::export::export_script,
    error::{AppError, AppResult},
};

/// Request for POST /api/exports
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRequest {
    pub script: String,
}

/// POST /api/exports?format=txt|pdf - Export text that was edited client side
pub async fn export(
    Query(query): Query<DownloadQuery>,
    Json(request): Json<ExportRequest>,
) -> AppResult<(StatusCode, HeaderMap, Body)> {
    if request.script.trim().is_empty() {
        return Err(AppError::BadRequest("Script text cannot be empty".to_string()));
    }

    let file = export_script(&request.script, query.format);
    let headers = attachment_headers(&file)?;

    Ok((StatusCode::OK, headers, Body::from(file.data)))
}
