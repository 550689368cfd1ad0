use super::{MarketStore, APPLICATIONS_KEY, JOBS_KEY};
use crate::error::{StoreError, StoreResult};
use crate::models::application::{Application, ApplicationPatch, ApplicationStatus};
use crate::utils::ids::new_id;
use chrono::Utc;
use tracing::info;

impl MarketStore {
    /// Records `candidate_id` applying to `job_id`. The application record
    /// and the job's applicationsCount move together: both are persisted or
    /// the operation fails with no visible change.
    pub fn create_application(
        &mut self,
        job_id: &str,
        candidate_id: &str,
    ) -> StoreResult<Application> {
        let Some(idx) = self.jobs.iter().position(|j| j.id == job_id) else {
            return Err(StoreError::JobNotFound(job_id.to_string()));
        };

        let application = Application {
            id: new_id("app"),
            job_id: job_id.to_string(),
            candidate_id: candidate_id.to_string(),
            employer_id: self.jobs[idx].posted_by.clone(),
            created_at: Utc::now(),
            status: ApplicationStatus::New,
            note: String::new(),
        };

        let mut new_applications = self.applications.clone();
        new_applications.push(application.clone());

        let mut new_jobs = self.jobs.clone();
        new_jobs[idx].applications_count += 1;

        self.persist_pair((APPLICATIONS_KEY, &new_applications), (JOBS_KEY, &new_jobs))?;
        self.applications = new_applications;
        self.jobs = new_jobs;

        info!(application_id = %application.id, job_id, candidate_id, "application created");
        Ok(application)
    }

    /// Status/note update by id; unknown ids are a no-op.
    pub fn update_application(&mut self, app_id: &str, patch: ApplicationPatch) -> StoreResult<()> {
        let Some(idx) = self.applications.iter().position(|a| a.id == app_id) else {
            return Ok(());
        };
        let mut new_applications = self.applications.clone();
        new_applications[idx].apply(patch);
        self.persist(APPLICATIONS_KEY, &new_applications)?;
        self.applications = new_applications;
        Ok(())
    }
}
