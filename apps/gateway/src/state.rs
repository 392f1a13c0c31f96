use records::rpc::RecruitmentClient;

/// Shared state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub records: RecruitmentClient,
}
