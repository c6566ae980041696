//! User record handlers - the orchestration core.
//!
//! Each mutating handler validates, calls the store, and on success
//! emits exactly one domain event. The publish call never influences
//! the response: the publisher swallows its own failures.

use actix_web::{HttpResponse, web};
use serde_json::json;

use userstore_core::domain::{Event, User};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<User>,
) -> AppResult<HttpResponse> {
    let mut user = body.into_inner();

    if user.age < 18 {
        tracing::error!(email = %user.email, "User age is less than 18");
        return Err(AppError::BadRequest("User age is less than 18".to_string()));
    }

    user.password = state
        .passwords
        .hash(&user.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    state
        .users
        .create_user(user.clone())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    state
        .events
        .publish(Event::created(&user.email, user.age, user.file_count()))
        .await;

    Ok(HttpResponse::Created().json(user))
}

/// GET /users/{id}
pub async fn get_user(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let user = state
        .users
        .get_user(&id)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(HttpResponse::Ok().json(user))
}

/// PUT /users/{id}
///
/// Whole-record overwrite keyed on the record's own identity key; the
/// path id only feeds the event. No age check here - update accepts any
/// age, unlike create. The asymmetry is deliberate and pinned by test.
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<User>,
) -> AppResult<HttpResponse> {
    let user = body.into_inner();

    state
        .users
        .update_user(user.clone())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    state
        .events
        .publish(Event::updated(id.into_inner(), user.age, user.file_count()))
        .await;

    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /users/{id}
///
/// Deleting an absent key still reports success; the store does not
/// distinguish "nothing matched" from "one record removed".
pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();

    state
        .users
        .delete_user(&id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    state.events.publish(Event::deleted(id)).await;

    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted" })))
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(users))
}
