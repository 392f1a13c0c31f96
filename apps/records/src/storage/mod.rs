//! Storage layer: durable persistence of resumes and vacancies.
//!
//! The record service only talks to the [`RecordStore`] trait. `Storage` is the
//! SQLite implementation; it is constructed once at startup and injected as an
//! `Arc<dyn RecordStore>`.
//!
//! Every operation is a single autocommitted statement. `update_*` and
//! `delete_*` return the number of affected rows, which is zero when the id
//! does not exist.

use async_trait::async_trait;

use crate::errors::StorageError;

pub mod models;
mod sqlite;

pub use models::{ResumeRow, VacancyRow};
pub use sqlite::Storage;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a resume and returns the assigned id. `resume.id` is ignored.
    async fn create_resume(&self, resume: &ResumeRow) -> Result<i64, StorageError>;
    async fn get_resume(&self, id: i64) -> Result<ResumeRow, StorageError>;
    async fn list_resumes(&self) -> Result<Vec<ResumeRow>, StorageError>;
    /// Overwrites every non-id column of the row matching `resume.id`.
    async fn update_resume(&self, resume: &ResumeRow) -> Result<u64, StorageError>;
    async fn delete_resume(&self, id: i64) -> Result<u64, StorageError>;

    /// Inserts a vacancy and returns the assigned id. `vacancy.id` is ignored.
    async fn create_vacancy(&self, vacancy: &VacancyRow) -> Result<i64, StorageError>;
    async fn get_vacancy(&self, id: i64) -> Result<VacancyRow, StorageError>;
    async fn list_vacancies(&self) -> Result<Vec<VacancyRow>, StorageError>;
    async fn update_vacancy(&self, vacancy: &VacancyRow) -> Result<u64, StorageError>;
    async fn delete_vacancy(&self, id: i64) -> Result<u64, StorageError>;
}
