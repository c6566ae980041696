//! Token issuance.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /login - the only public route besides the health check.
///
/// The login name is the identity key (email); a successful password
/// check answers with a bearer token valid for 24 hours.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .get_user(&req.username)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    let valid = state
        .passwords
        .verify(&req.password, &user.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized("wrong password".to_string()));
    }

    let token = state
        .tokens
        .create_token(&req.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "token": token })))
}
