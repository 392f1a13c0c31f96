use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::models::{ResumeRow, VacancyRow};
use super::RecordStore;
use crate::errors::StorageError;

const MAX_CONNECTIONS: u32 = 10;

const RESUMES_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS resumes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        candidate_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        experience TEXT,
        education TEXT
    )
"#;

const VACANCIES_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS vacancies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        company TEXT NOT NULL,
        location TEXT NOT NULL,
        description TEXT
    )
"#;

/// SQLite-backed [`RecordStore`]. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Opens (creating if missing) the database file at `path` and makes sure
    /// both tables exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        info!("Opening SQLite database at {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let storage = Self { pool };
        storage.create_schema().await?;
        info!("Database initialized successfully");
        Ok(storage)
    }

    /// A private in-memory database. The pool is pinned to one connection that
    /// never expires, since every new SQLite connection would see an empty
    /// database.
    pub async fn open_in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let storage = Self { pool };
        storage.create_schema().await?;
        Ok(storage)
    }

    /// Idempotent: both statements are `CREATE TABLE IF NOT EXISTS`.
    pub async fn create_schema(&self) -> Result<(), StorageError> {
        sqlx::query(RESUMES_SCHEMA).execute(&self.pool).await?;
        sqlx::query(VACANCIES_SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordStore for Storage {
    async fn create_resume(&self, resume: &ResumeRow) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO resumes (candidate_name, email, phone, experience, education) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&resume.candidate_name)
        .bind(&resume.email)
        .bind(&resume.phone)
        .bind(&resume.experience)
        .bind(&resume.education)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted resume {id}");
        Ok(id)
    }

    async fn get_resume(&self, id: i64) -> Result<ResumeRow, StorageError> {
        sqlx::query_as::<_, ResumeRow>(
            "SELECT id, candidate_name, email, phone, experience, education FROM resumes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound { kind: "resume", id })
    }

    async fn list_resumes(&self) -> Result<Vec<ResumeRow>, StorageError> {
        Ok(sqlx::query_as::<_, ResumeRow>(
            "SELECT id, candidate_name, email, phone, experience, education FROM resumes",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn update_resume(&self, resume: &ResumeRow) -> Result<u64, StorageError> {
        let result = sqlx::query(
            "UPDATE resumes SET candidate_name = ?, email = ?, phone = ?, experience = ?, education = ? WHERE id = ?",
        )
        .bind(&resume.candidate_name)
        .bind(&resume.email)
        .bind(&resume.phone)
        .bind(&resume.experience)
        .bind(&resume.education)
        .bind(resume.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_resume(&self, id: i64) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn create_vacancy(&self, vacancy: &VacancyRow) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO vacancies (title, company, location, description) VALUES (?, ?, ?, ?)",
        )
        .bind(&vacancy.title)
        .bind(&vacancy.company)
        .bind(&vacancy.location)
        .bind(&vacancy.description)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted vacancy {id}");
        Ok(id)
    }

    async fn get_vacancy(&self, id: i64) -> Result<VacancyRow, StorageError> {
        sqlx::query_as::<_, VacancyRow>(
            "SELECT id, title, company, location, description FROM vacancies WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound { kind: "vacancy", id })
    }

    async fn list_vacancies(&self) -> Result<Vec<VacancyRow>, StorageError> {
        Ok(sqlx::query_as::<_, VacancyRow>(
            "SELECT id, title, company, location, description FROM vacancies",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn update_vacancy(&self, vacancy: &VacancyRow) -> Result<u64, StorageError> {
        let result = sqlx::query(
            "UPDATE vacancies SET title = ?, company = ?, location = ?, description = ? WHERE id = ?",
        )
        .bind(&vacancy.title)
        .bind(&vacancy.company)
        .bind(&vacancy.location)
        .bind(&vacancy.description)
        .bind(vacancy.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_vacancy(&self, id: i64) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM vacancies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_resume(name: &str) -> ResumeRow {
        ResumeRow {
            id: 0,
            candidate_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555".to_string(),
            experience: Some("5y".to_string()),
            education: Some("BSc".to_string()),
        }
    }

    fn make_vacancy(title: &str) -> VacancyRow {
        VacancyRow {
            id: 0,
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_resume() {
        let storage = Storage::open_in_memory().await.unwrap();
        let input = make_resume("Alice");

        let id = storage.create_resume(&input).await.unwrap();
        let fetched = storage.get_resume(id).await.unwrap();

        assert_eq!(fetched, ResumeRow { id, ..input });
    }

    #[tokio::test]
    async fn test_create_ignores_supplied_id() {
        let storage = Storage::open_in_memory().await.unwrap();
        let first = storage.create_resume(&make_resume("Alice")).await.unwrap();

        let mut input = make_resume("Bob");
        input.id = 999;
        let second = storage.create_resume(&input).await.unwrap();

        assert_eq!(second, first + 1);
        assert!(storage.get_resume(999).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_optional_columns_round_trip_as_null() {
        let storage = Storage::open_in_memory().await.unwrap();
        let mut input = make_resume("Carol");
        input.experience = None;
        input.education = None;

        let id = storage.create_resume(&input).await.unwrap();
        let fetched = storage.get_resume(id).await.unwrap();

        assert_eq!(fetched.experience, None);
        assert_eq!(fetched.education, None);
    }

    #[tokio::test]
    async fn test_update_overwrites_every_field() {
        let storage = Storage::open_in_memory().await.unwrap();
        let id = storage.create_resume(&make_resume("Alice")).await.unwrap();

        let updated = ResumeRow {
            id,
            candidate_name: "Alice Smith".to_string(),
            email: "alice@smith.org".to_string(),
            phone: "777".to_string(),
            experience: Some("6y".to_string()),
            education: None,
        };
        let affected = storage.update_resume(&updated).await.unwrap();

        assert_eq!(affected, 1);
        assert_eq!(storage.get_resume(id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_and_delete_of_missing_id_affect_nothing() {
        let storage = Storage::open_in_memory().await.unwrap();
        let mut ghost = make_resume("Ghost");
        ghost.id = 42;

        assert_eq!(storage.update_resume(&ghost).await.unwrap(), 0);
        assert_eq!(storage.delete_resume(42).await.unwrap(), 0);
        assert_eq!(storage.delete_vacancy(42).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let storage = Storage::open_in_memory().await.unwrap();
        let id = storage.create_resume(&make_resume("Alice")).await.unwrap();

        assert_eq!(storage.delete_resume(id).await.unwrap(), 1);

        let err = storage.get_resume(id).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), format!("no resume with id {id}"));
    }

    #[tokio::test]
    async fn test_list_returns_every_row() {
        let storage = Storage::open_in_memory().await.unwrap();
        assert!(storage.list_resumes().await.unwrap().is_empty());

        let mut ids = Vec::new();
        for name in ["Alice", "Bob", "Carol"] {
            ids.push(storage.create_resume(&make_resume(name)).await.unwrap());
        }

        let mut listed: Vec<i64> = storage
            .list_resumes()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        listed.sort_unstable();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_vacancy_crud() {
        let storage = Storage::open_in_memory().await.unwrap();
        let id = storage
            .create_vacancy(&make_vacancy("Rust Engineer"))
            .await
            .unwrap();

        let mut vacancy = storage.get_vacancy(id).await.unwrap();
        assert_eq!(vacancy.title, "Rust Engineer");
        assert_eq!(vacancy.description, None);

        vacancy.description = Some("Build storage engines".to_string());
        vacancy.location = "Remote".to_string();
        assert_eq!(storage.update_vacancy(&vacancy).await.unwrap(), 1);
        assert_eq!(storage.get_vacancy(id).await.unwrap(), vacancy);

        assert_eq!(storage.list_vacancies().await.unwrap().len(), 1);
        assert_eq!(storage.delete_vacancy(id).await.unwrap(), 1);
        assert!(storage.get_vacancy(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_resume_and_vacancy_ids_are_independent() {
        let storage = Storage::open_in_memory().await.unwrap();
        let resume_id = storage.create_resume(&make_resume("Alice")).await.unwrap();
        let vacancy_id = storage.create_vacancy(&make_vacancy("SRE")).await.unwrap();

        assert_eq!(resume_id, 1);
        assert_eq!(vacancy_id, 1);
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let storage = Storage::open_in_memory().await.unwrap();
        let id = storage.create_resume(&make_resume("Alice")).await.unwrap();

        storage.create_schema().await.unwrap();

        assert_eq!(storage.get_resume(id).await.unwrap().candidate_name, "Alice");
    }

    #[tokio::test]
    async fn test_open_creates_missing_directory_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage").join("storage.db");

        let storage = Storage::open(&path).await.unwrap();
        let id = storage.create_vacancy(&make_vacancy("SRE")).await.unwrap();
        storage.close().await;

        assert!(path.exists());
        let reopened = Storage::open(&path).await.unwrap();
        assert_eq!(reopened.get_vacancy(id).await.unwrap().title, "SRE");
    }
}
