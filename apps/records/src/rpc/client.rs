use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::wire::*;

#[derive(Debug, Error)]
pub enum RpcError {
    /// The record service could not be reached or the exchange broke off.
    #[error("rpc error: code = Unavailable desc = {0}")]
    Transport(#[from] reqwest::Error),

    /// The record service answered with a failure status.
    #[error(transparent)]
    Status(#[from] Status),
}

impl RpcError {
    pub fn code(&self) -> Code {
        match self {
            RpcError::Transport(_) => Code::Unavailable,
            RpcError::Status(status) => status.code,
        }
    }
}

/// Client for the record service.
///
/// No connection is made until the first call, so a gateway can start while
/// the record service is still down. Calls carry no deadline and are never
/// retried.
#[derive(Clone)]
pub struct RecruitmentClient {
    client: Client,
    base_url: String,
}

impl RecruitmentClient {
    /// `addr` is either `host:port` or a full `http://host:port` URL.
    pub fn connect(addr: &str) -> Result<Self, RpcError> {
        let base_url = if addr.starts_with("http://") || addr.starts_with("https://") {
            addr.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", addr.trim_end_matches('/'))
        };

        Ok(Self {
            client: Client::builder().no_proxy().build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn unary<Req, Resp>(&self, method: &str, req: &Req) -> Result<Resp, RpcError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        debug!("RPC call {method}");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, method))
            .json(req)
            .send()
            .await?;

        let http_status = response.status();
        if http_status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let status = serde_json::from_str::<Status>(&body).unwrap_or_else(|_| {
            let code = match http_status.as_u16() {
                400 | 415 | 422 => Code::InvalidArgument,
                404 | 405 => Code::Unimplemented,
                503 => Code::Unavailable,
                _ => Code::Internal,
            };
            Status::new(code, body)
        });
        Err(RpcError::Status(status))
    }

    pub async fn create_resume(
        &self,
        req: CreateResumeRequest,
    ) -> Result<CreateResumeResponse, RpcError> {
        self.unary(method::CREATE_RESUME, &req).await
    }

    pub async fn get_resume(&self, req: GetResumeRequest) -> Result<GetResumeResponse, RpcError> {
        self.unary(method::GET_RESUME, &req).await
    }

    pub async fn get_all_resumes(
        &self,
        req: GetAllResumesRequest,
    ) -> Result<GetAllResumesResponse, RpcError> {
        self.unary(method::GET_ALL_RESUMES, &req).await
    }

    pub async fn update_resume(
        &self,
        req: UpdateResumeRequest,
    ) -> Result<UpdateResumeResponse, RpcError> {
        self.unary(method::UPDATE_RESUME, &req).await
    }

    pub async fn delete_resume(
        &self,
        req: DeleteResumeRequest,
    ) -> Result<DeleteResumeResponse, RpcError> {
        self.unary(method::DELETE_RESUME, &req).await
    }

    pub async fn create_vacancy(
        &self,
        req: CreateVacancyRequest,
    ) -> Result<CreateVacancyResponse, RpcError> {
        self.unary(method::CREATE_VACANCY, &req).await
    }

    pub async fn get_vacancy(
        &self,
        req: GetVacancyRequest,
    ) -> Result<GetVacancyResponse, RpcError> {
        self.unary(method::GET_VACANCY, &req).await
    }

    pub async fn get_all_vacancies(
        &self,
        req: GetAllVacanciesRequest,
    ) -> Result<GetAllVacanciesResponse, RpcError> {
        self.unary(method::GET_ALL_VACANCIES, &req).await
    }

    pub async fn update_vacancy(
        &self,
        req: UpdateVacancyRequest,
    ) -> Result<UpdateVacancyResponse, RpcError> {
        self.unary(method::UPDATE_VACANCY, &req).await
    }

    pub async fn delete_vacancy(
        &self,
        req: DeleteVacancyRequest,
    ) -> Result<DeleteVacancyResponse, RpcError> {
        self.unary(method::DELETE_VACANCY, &req).await
    }
}
