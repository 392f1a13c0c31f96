pub mod resumes;
pub mod vacancies;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;

use crate::errors::GatewayError;
use crate::state::AppState;

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            "/resumes",
            post(resumes::handle_create)
                .get(resumes::handle_list)
                .put(resumes::handle_update),
        )
        .route(
            "/resumes/:id",
            get(resumes::handle_get).delete(resumes::handle_delete),
        )
        .route(
            "/vacancies",
            post(vacancies::handle_create)
                .get(vacancies::handle_list)
                .put(vacancies::handle_update),
        )
        .route(
            "/vacancies/:id",
            get(vacancies::handle_get).delete(vacancies::handle_delete),
        )
        // Anything else is a static asset (404 when the file is absent)
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Decodes a JSON body; the decoder's message becomes the 400 body.
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(body).map_err(|e| GatewayError::BadRequest(e.to_string()))
}

fn parse_id(raw: &str) -> Result<i64, GatewayError> {
    raw.parse::<i64>().map_err(|_| GatewayError::InvalidId)
}
