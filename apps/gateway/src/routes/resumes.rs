use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use records::wire::{
    CreateResumeRequest, DeleteResumeRequest, GetAllResumesRequest, GetResumeRequest, Resume,
    UpdateResumeRequest,
};

use super::{decode_json, parse_id};
use crate::errors::GatewayError;
use crate::state::AppState;

/// POST /resumes
pub async fn handle_create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Resume>), GatewayError> {
    let resume: Resume = decode_json(&body)?;
    let res = state
        .records
        .create_resume(CreateResumeRequest { resume })
        .await?;
    Ok((StatusCode::CREATED, Json(res.resume)))
}

/// GET /resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, GatewayError> {
    let id = parse_id(&id)?;
    let res = state.records.get_resume(GetResumeRequest { id }).await?;
    Ok(Json(res.resume))
}

/// GET /resumes
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Resume>>, GatewayError> {
    let res = state
        .records
        .get_all_resumes(GetAllResumesRequest {})
        .await?;
    Ok(Json(res.resumes))
}

/// PUT /resumes
pub async fn handle_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Resume>, GatewayError> {
    let resume: Resume = decode_json(&body)?;
    let res = state
        .records
        .update_resume(UpdateResumeRequest { resume })
        .await?;
    Ok(Json(res.resume))
}

/// DELETE /resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = parse_id(&id)?;
    let res = state
        .records
        .delete_resume(DeleteResumeRequest { id })
        .await?;
    if res.success {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(GatewayError::DeleteFailed("Failed to delete resume"))
    }
}
