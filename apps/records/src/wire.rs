//! Messages exchanged over the RPC surface.
//!
//! Records use PascalCase JSON keys (`Id`, `CandidateName`, ...). The gateway
//! forwards these same structures as its HTTP bodies, so this is also the
//! public JSON shape. snake_case keys are accepted on input.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fully-qualified procedure paths, one per unary call.
pub mod method {
    pub const CREATE_RESUME: &str = "/recruitment.RecruitmentService/CreateResume";
    pub const GET_RESUME: &str = "/recruitment.RecruitmentService/GetResume";
    pub const GET_ALL_RESUMES: &str = "/recruitment.RecruitmentService/GetAllResumes";
    pub const UPDATE_RESUME: &str = "/recruitment.RecruitmentService/UpdateResume";
    pub const DELETE_RESUME: &str = "/recruitment.RecruitmentService/DeleteResume";

    pub const CREATE_VACANCY: &str = "/recruitment.RecruitmentService/CreateVacancy";
    pub const GET_VACANCY: &str = "/recruitment.RecruitmentService/GetVacancy";
    pub const GET_ALL_VACANCIES: &str = "/recruitment.RecruitmentService/GetAllVacancies";
    pub const UPDATE_VACANCY: &str = "/recruitment.RecruitmentService/UpdateVacancy";
    pub const DELETE_VACANCY: &str = "/recruitment.RecruitmentService/DeleteVacancy";
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resume {
    #[serde(default, alias = "id")]
    pub id: i64,
    #[serde(alias = "candidate_name")]
    pub candidate_name: String,
    #[serde(alias = "email")]
    pub email: String,
    #[serde(alias = "phone")]
    pub phone: String,
    #[serde(default, alias = "experience")]
    pub experience: String,
    #[serde(default, alias = "education")]
    pub education: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vacancy {
    #[serde(default, alias = "id")]
    pub id: i64,
    #[serde(alias = "title")]
    pub title: String,
    #[serde(alias = "company")]
    pub company: String,
    #[serde(alias = "location")]
    pub location: String,
    #[serde(default, alias = "description")]
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Resume requests / responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResumeRequest {
    pub resume: Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResumeResponse {
    pub resume: Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResumeRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResumeResponse {
    pub resume: Resume,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetAllResumesRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAllResumesResponse {
    pub resumes: Vec<Resume>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResumeRequest {
    pub resume: Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResumeResponse {
    pub resume: Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResumeRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResumeResponse {
    pub success: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Vacancy requests / responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVacancyRequest {
    pub vacancy: Vacancy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVacancyResponse {
    pub vacancy: Vacancy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVacancyRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVacancyResponse {
    pub vacancy: Vacancy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetAllVacanciesRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAllVacanciesResponse {
    pub vacancies: Vec<Vacancy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVacancyRequest {
    pub vacancy: Vacancy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVacancyResponse {
    pub vacancy: Vacancy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteVacancyRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteVacancyResponse {
    pub success: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Failure status
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Code {
    Unknown,
    InvalidArgument,
    NotFound,
    Internal,
    Unavailable,
    Unimplemented,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Code::Unknown => "Unknown",
            Code::InvalidArgument => "InvalidArgument",
            Code::NotFound => "NotFound",
            Code::Internal => "Internal",
            Code::Unavailable => "Unavailable",
            Code::Unimplemented => "Unimplemented",
        };
        f.write_str(name)
    }
}

/// Body of every failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("rpc error: code = {code} desc = {message}")]
pub struct Status {
    pub code: Code,
    pub message: String,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resume_accepts_pascal_case_without_id() {
        let resume: Resume = serde_json::from_value(json!({
            "CandidateName": "Alice",
            "Email": "a@x.com",
            "Phone": "555",
            "Experience": "5y",
            "Education": "BSc"
        }))
        .unwrap();

        assert_eq!(resume.id, 0);
        assert_eq!(resume.candidate_name, "Alice");
        assert_eq!(resume.education, "BSc");
    }

    #[test]
    fn test_resume_serializes_pascal_case() {
        let value = serde_json::to_value(Resume {
            id: 7,
            candidate_name: "Alice".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(value["Id"], 7);
        assert_eq!(value["CandidateName"], "Alice");
        assert!(value.get("candidate_name").is_none());
    }

    #[test]
    fn test_vacancy_accepts_snake_case_and_defaults_description() {
        let vacancy: Vacancy = serde_json::from_value(json!({
            "id": 3,
            "title": "SRE",
            "company": "Acme",
            "location": "Remote"
        }))
        .unwrap();

        assert_eq!(vacancy.id, 3);
        assert_eq!(vacancy.description, "");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result = serde_json::from_value::<Vacancy>(json!({
            "Title": "SRE",
            "Company": "Acme"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_display_matches_rpc_error_format() {
        let status = Status::new(Code::NotFound, "no resume with id 4");
        assert_eq!(
            status.to_string(),
            "rpc error: code = NotFound desc = no resume with id 4"
        );
    }
}
