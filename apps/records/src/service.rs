//! Record service: CRUD for resumes and vacancies as remote procedures.
//!
//! Pure field-by-field translation between [`wire`](crate::wire) records and
//! storage rows. Storage errors pass through unchanged as a [`Status`].

use std::sync::Arc;

use tracing::debug;

use crate::errors::StorageError;
use crate::storage::{RecordStore, ResumeRow, VacancyRow};
use crate::wire::*;

impl From<StorageError> for Status {
    fn from(err: StorageError) -> Self {
        let code = if err.is_not_found() {
            Code::NotFound
        } else {
            Code::Unknown
        };
        Status::new(code, err.to_string())
    }
}

fn resume_to_row(resume: &Resume) -> ResumeRow {
    ResumeRow {
        id: resume.id,
        candidate_name: resume.candidate_name.clone(),
        email: resume.email.clone(),
        phone: resume.phone.clone(),
        experience: Some(resume.experience.clone()),
        education: Some(resume.education.clone()),
    }
}

fn row_to_resume(row: ResumeRow) -> Resume {
    Resume {
        id: row.id,
        candidate_name: row.candidate_name,
        email: row.email,
        phone: row.phone,
        experience: row.experience.unwrap_or_default(),
        education: row.education.unwrap_or_default(),
    }
}

fn vacancy_to_row(vacancy: &Vacancy) -> VacancyRow {
    VacancyRow {
        id: vacancy.id,
        title: vacancy.title.clone(),
        company: vacancy.company.clone(),
        location: vacancy.location.clone(),
        description: Some(vacancy.description.clone()),
    }
}

fn row_to_vacancy(row: VacancyRow) -> Vacancy {
    Vacancy {
        id: row.id,
        title: row.title,
        company: row.company,
        location: row.location,
        description: row.description.unwrap_or_default(),
    }
}

#[derive(Clone)]
pub struct RecruitmentService {
    store: Arc<dyn RecordStore>,
}

impl RecruitmentService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn create_resume(
        &self,
        req: CreateResumeRequest,
    ) -> Result<CreateResumeResponse, Status> {
        let id = self.store.create_resume(&resume_to_row(&req.resume)).await?;
        Ok(CreateResumeResponse {
            resume: Resume { id, ..req.resume },
        })
    }

    pub async fn get_resume(&self, req: GetResumeRequest) -> Result<GetResumeResponse, Status> {
        let row = self.store.get_resume(req.id).await?;
        Ok(GetResumeResponse {
            resume: row_to_resume(row),
        })
    }

    pub async fn get_all_resumes(
        &self,
        _req: GetAllResumesRequest,
    ) -> Result<GetAllResumesResponse, Status> {
        let rows = self.store.list_resumes().await?;
        Ok(GetAllResumesResponse {
            resumes: rows.into_iter().map(row_to_resume).collect(),
        })
    }

    /// Echoes the request record. An unknown id is not reported.
    pub async fn update_resume(
        &self,
        req: UpdateResumeRequest,
    ) -> Result<UpdateResumeResponse, Status> {
        let affected = self.store.update_resume(&resume_to_row(&req.resume)).await?;
        debug!("UpdateResume id={} rows_affected={affected}", req.resume.id);
        Ok(UpdateResumeResponse { resume: req.resume })
    }

    /// `success` is true whenever storage did not error, matched or not.
    pub async fn delete_resume(
        &self,
        req: DeleteResumeRequest,
    ) -> Result<DeleteResumeResponse, Status> {
        let affected = self.store.delete_resume(req.id).await?;
        debug!("DeleteResume id={} rows_affected={affected}", req.id);
        Ok(DeleteResumeResponse { success: true })
    }

    pub async fn create_vacancy(
        &self,
        req: CreateVacancyRequest,
    ) -> Result<CreateVacancyResponse, Status> {
        let id = self
            .store
            .create_vacancy(&vacancy_to_row(&req.vacancy))
            .await?;
        Ok(CreateVacancyResponse {
            vacancy: Vacancy { id, ..req.vacancy },
        })
    }

    pub async fn get_vacancy(&self, req: GetVacancyRequest) -> Result<GetVacancyResponse, Status> {
        let row = self.store.get_vacancy(req.id).await?;
        Ok(GetVacancyResponse {
            vacancy: row_to_vacancy(row),
        })
    }

    pub async fn get_all_vacancies(
        &self,
        _req: GetAllVacanciesRequest,
    ) -> Result<GetAllVacanciesResponse, Status> {
        let rows = self.store.list_vacancies().await?;
        Ok(GetAllVacanciesResponse {
            vacancies: rows.into_iter().map(row_to_vacancy).collect(),
        })
    }

    pub async fn update_vacancy(
        &self,
        req: UpdateVacancyRequest,
    ) -> Result<UpdateVacancyResponse, Status> {
        let affected = self
            .store
            .update_vacancy(&vacancy_to_row(&req.vacancy))
            .await?;
        debug!("UpdateVacancy id={} rows_affected={affected}", req.vacancy.id);
        Ok(UpdateVacancyResponse {
            vacancy: req.vacancy,
        })
    }

    pub async fn delete_vacancy(
        &self,
        req: DeleteVacancyRequest,
    ) -> Result<DeleteVacancyResponse, Status> {
        let affected = self.store.delete_vacancy(req.id).await?;
        debug!("DeleteVacancy id={} rows_affected={affected}", req.id);
        Ok(DeleteVacancyResponse { success: true })
    }
}
