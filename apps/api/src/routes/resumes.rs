use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRecord, ResumeUpdate};
use crate::state::AppState;

/// POST /resumes
pub async fn handle_create(
    State(state): State<AppState>,
    Json(payload): Json<NewResume>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    payload.validate().map_err(AppError::Validation)?;
    let record = state.store.insert(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /resumes
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    Ok(Json(state.store.find_all().await?))
}

/// GET /resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// GET /resumes/:id/pdf
pub async fn handle_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let document = state.pipeline().run(id).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", document.filename),
        ),
    ];
    Ok((headers, document.bytes).into_response())
}

/// PATCH /resumes/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResumeUpdate>,
) -> Result<Json<ResumeRecord>, AppError> {
    payload.validate().map_err(AppError::Validation)?;
    let record = state
        .store
        .replace(id, payload)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// DELETE /resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !state.store.delete_by_id(id).await? {
        return Err(not_found(id));
    }
    Ok(Json(json!({ "message": "Resume deleted" })))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}
