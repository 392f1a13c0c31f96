use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::service::RecruitmentService;
use crate::wire::*;

impl IntoResponse for Status {
    fn into_response(self) -> Response {
        let status = match self.code {
            Code::InvalidArgument => StatusCode::BAD_REQUEST,
            Code::NotFound => StatusCode::NOT_FOUND,
            Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
            Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Code::Unknown | Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("RPC failed: {self}");
        (status, Json(self)).into_response()
    }
}

pub fn router(service: RecruitmentService) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(method::CREATE_RESUME, post(create_resume))
        .route(method::GET_RESUME, post(get_resume))
        .route(method::GET_ALL_RESUMES, post(get_all_resumes))
        .route(method::UPDATE_RESUME, post(update_resume))
        .route(method::DELETE_RESUME, post(delete_resume))
        .route(method::CREATE_VACANCY, post(create_vacancy))
        .route(method::GET_VACANCY, post(get_vacancy))
        .route(method::GET_ALL_VACANCIES, post(get_all_vacancies))
        .route(method::UPDATE_VACANCY, post(update_vacancy))
        .route(method::DELETE_VACANCY, post(delete_vacancy))
        .with_state(service)
}

/// Serves the record service on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, service: RecruitmentService) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Record service listening on {addr}");
    }
    axum::serve(listener, router(service).layer(TraceLayer::new_for_http())).await
}

/// GET /health
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "records"
    }))
}

async fn create_resume(
    State(service): State<RecruitmentService>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<Json<CreateResumeResponse>, Status> {
    service.create_resume(req).await.map(Json)
}

async fn get_resume(
    State(service): State<RecruitmentService>,
    Json(req): Json<GetResumeRequest>,
) -> Result<Json<GetResumeResponse>, Status> {
    service.get_resume(req).await.map(Json)
}

async fn get_all_resumes(
    State(service): State<RecruitmentService>,
    Json(req): Json<GetAllResumesRequest>,
) -> Result<Json<GetAllResumesResponse>, Status> {
    service.get_all_resumes(req).await.map(Json)
}

async fn update_resume(
    State(service): State<RecruitmentService>,
    Json(req): Json<UpdateResumeRequest>,
) -> Result<Json<UpdateResumeResponse>, Status> {
    service.update_resume(req).await.map(Json)
}

async fn delete_resume(
    State(service): State<RecruitmentService>,
    Json(req): Json<DeleteResumeRequest>,
) -> Result<Json<DeleteResumeResponse>, Status> {
    service.delete_resume(req).await.map(Json)
}

async fn create_vacancy(
    State(service): State<RecruitmentService>,
    Json(req): Json<CreateVacancyRequest>,
) -> Result<Json<CreateVacancyResponse>, Status> {
    service.create_vacancy(req).await.map(Json)
}

async fn get_vacancy(
    State(service): State<RecruitmentService>,
    Json(req): Json<GetVacancyRequest>,
) -> Result<Json<GetVacancyResponse>, Status> {
    service.get_vacancy(req).await.map(Json)
}

async fn get_all_vacancies(
    State(service): State<RecruitmentService>,
    Json(req): Json<GetAllVacanciesRequest>,
) -> Result<Json<GetAllVacanciesResponse>, Status> {
    service.get_all_vacancies(req).await.map(Json)
}

async fn update_vacancy(
    State(service): State<RecruitmentService>,
    Json(req): Json<UpdateVacancyRequest>,
) -> Result<Json<UpdateVacancyResponse>, Status> {
    service.update_vacancy(req).await.map(Json)
}

async fn delete_vacancy(
    State(service): State<RecruitmentService>,
    Json(req): Json<DeleteVacancyRequest>,
) -> Result<Json<DeleteVacancyResponse>, Status> {
    service.delete_vacancy(req).await.map(Json)
}
