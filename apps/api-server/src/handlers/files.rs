//! File list handlers.
//!
//! Files are mutated independently of the rest of the record: appended
//! one at a time, cleared wholesale, never updated in place. File
//! operations emit no events.

use actix_web::{HttpResponse, web};
use serde_json::json;

use userstore_core::domain::File;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /users/{id}/files
pub async fn get_files(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let files = state
        .users
        .get_files(&id)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(HttpResponse::Ok().json(files))
}

/// POST /users/{id}/files
pub async fn add_file(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<File>,
) -> AppResult<HttpResponse> {
    state
        .users
        .add_file(&id, body.into_inner())
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "file added" })))
}

/// DELETE /users/{id}/files
pub async fn clear_files(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    state
        .users
        .clear_files(&id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "files deleted" })))
}
