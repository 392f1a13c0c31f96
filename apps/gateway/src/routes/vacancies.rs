use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use records::wire::{
    CreateVacancyRequest, DeleteVacancyRequest, GetAllVacanciesRequest, GetVacancyRequest,
    UpdateVacancyRequest, Vacancy,
};

use super::{decode_json, parse_id};
use crate::errors::GatewayError;
use crate::state::AppState;

/// POST /vacancies
pub async fn handle_create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vacancy>), GatewayError> {
    let vacancy: Vacancy = decode_json(&body)?;
    let res = state
        .records
        .create_vacancy(CreateVacancyRequest { vacancy })
        .await?;
    Ok((StatusCode::CREATED, Json(res.vacancy)))
}

/// GET /vacancies/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vacancy>, GatewayError> {
    let id = parse_id(&id)?;
    let res = state.records.get_vacancy(GetVacancyRequest { id }).await?;
    Ok(Json(res.vacancy))
}

/// GET /vacancies
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Vacancy>>, GatewayError> {
    let res = state
        .records
        .get_all_vacancies(GetAllVacanciesRequest {})
        .await?;
    Ok(Json(res.vacancies))
}

/// PUT /vacancies
pub async fn handle_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vacancy>, GatewayError> {
    let vacancy: Vacancy = decode_json(&body)?;
    let res = state
        .records
        .update_vacancy(UpdateVacancyRequest { vacancy })
        .await?;
    Ok(Json(res.vacancy))
}

/// DELETE /vacancies/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = parse_id(&id)?;
    let res = state
        .records
        .delete_vacancy(DeleteVacancyRequest { id })
        .await?;
    if res.success {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(GatewayError::DeleteFailed("Failed to delete vacancy"))
    }
}
