use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use records::rpc::RpcError;
use thiserror::Error;

/// Gateway error type.
/// Every variant renders as a plain-text body; nothing is wrapped in JSON.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request body was not a valid record. Carries the decoder message.
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid ID")]
    InvalidId,

    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The record service reported `success: false` for a delete.
    #[error("{0}")]
    DeleteFailed(&'static str),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::BadRequest(msg) => {
                tracing::warn!("Rejected request body: {msg}");
                StatusCode::BAD_REQUEST
            }
            GatewayError::InvalidId => {
                tracing::warn!("Rejected non-integer id");
                StatusCode::BAD_REQUEST
            }
            GatewayError::Rpc(e) => {
                tracing::error!("Record service call failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::DeleteFailed(msg) => {
                tracing::error!("{msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
