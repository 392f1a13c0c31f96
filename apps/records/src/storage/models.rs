use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub experience: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VacancyRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
}
