use super::{MarketStore, EMPLOYERS_KEY, JOBS_KEY};
use crate::error::{StoreError, StoreResult};
use crate::models::job::{Job, JobDraft, JobPatch, JobStatus};
use crate::utils::ids::new_id;
use chrono::Utc;
use tracing::info;

impl MarketStore {
    /// Creates a posting owned by `employer_id`. When the employer carries a
    /// plan with a post allotment, one post is consumed atomically with the
    /// creation; an exhausted allotment rejects the whole operation.
    pub fn create_job(&mut self, draft: JobDraft, employer_id: &str) -> StoreResult<Job> {
        let employer = self.employers.iter().find(|e| e.id == employer_id);

        // Quota gate only applies to an employer record with an active plan;
        // a None allotment means unlimited.
        if let Some(e) = employer {
            if e.plan.is_some() && matches!(e.plan_posts_remaining, Some(n) if n <= 0) {
                return Err(StoreError::QuotaExceeded {
                    employer_id: employer_id.to_string(),
                });
            }
        }
        let consume_post =
            employer.is_some_and(|e| matches!(e.plan_posts_remaining, Some(n) if n > 0));

        let job = Job {
            id: new_id("job"),
            title: draft.title,
            company: draft.company,
            sector: draft.sector,
            trade: draft.trade,
            city: draft.city,
            region: draft.region,
            country: draft.country,
            wage_band: draft.wage_band,
            union_job: draft.union_job,
            camp_loa: draft.camp_loa,
            shift: draft.shift,
            description: draft.description,
            posted_by: employer_id.to_string(),
            posted_at: Utc::now(),
            status: JobStatus::Open,
            archived: false,
            views: 0,
            applications_count: 0,
        };

        let mut new_jobs = self.jobs.clone();
        new_jobs.push(job.clone());

        if consume_post {
            let mut new_employers = self.employers.clone();
            if let Some(e) = new_employers.iter_mut().find(|e| e.id == employer_id) {
                e.plan_posts_remaining = e.plan_posts_remaining.map(|n| n - 1);
            }
            self.persist_pair((JOBS_KEY, &new_jobs), (EMPLOYERS_KEY, &new_employers))?;
            self.employers = new_employers;
        } else {
            self.persist(JOBS_KEY, &new_jobs)?;
        }
        self.jobs = new_jobs;

        info!(job_id = %job.id, employer_id, "job created");
        Ok(job)
    }

    /// Partial update by id; unknown ids are a no-op.
    pub fn update_job(&mut self, job_id: &str, patch: JobPatch) -> StoreResult<()> {
        let Some(idx) = self.jobs.iter().position(|j| j.id == job_id) else {
            return Ok(());
        };
        let mut new_jobs = self.jobs.clone();
        new_jobs[idx].apply(patch);
        self.persist(JOBS_KEY, &new_jobs)?;
        self.jobs = new_jobs;
        Ok(())
    }

    /// Hard delete. Applications referencing the job are left in place.
    pub fn delete_job(&mut self, job_id: &str) -> StoreResult<()> {
        if !self.jobs.iter().any(|j| j.id == job_id) {
            return Ok(());
        }
        let new_jobs: Vec<_> = self.jobs.iter().filter(|j| j.id != job_id).cloned().collect();
        self.persist(JOBS_KEY, &new_jobs)?;
        self.jobs = new_jobs;
        info!(job_id, "job deleted");
        Ok(())
    }

    /// Counts one view per job per session. Returns whether a view was
    /// recorded; repeat calls for the same id in this session are no-ops.
    /// The owning employer's view allotment, when finite and positive, is
    /// consumed with the count.
    pub fn increment_job_views(&mut self, job_id: &str, employer_id: &str) -> StoreResult<bool> {
        if self.viewed.contains(job_id) {
            return Ok(false);
        }
        let Some(idx) = self.jobs.iter().position(|j| j.id == job_id) else {
            return Ok(false);
        };

        let mut new_jobs = self.jobs.clone();
        new_jobs[idx].views += 1;

        let consume_view = self
            .employers
            .iter()
            .find(|e| e.id == employer_id)
            .is_some_and(|e| matches!(e.plan_views_remaining, Some(n) if n > 0));

        if consume_view {
            let mut new_employers = self.employers.clone();
            if let Some(e) = new_employers.iter_mut().find(|e| e.id == employer_id) {
                e.plan_views_remaining = e.plan_views_remaining.map(|n| n - 1);
            }
            self.persist_pair((JOBS_KEY, &new_jobs), (EMPLOYERS_KEY, &new_employers))?;
            self.employers = new_employers;
        } else {
            self.persist(JOBS_KEY, &new_jobs)?;
        }
        self.jobs = new_jobs;

        // Only a persisted view marks the session; a failed write above
        // leaves the id eligible for a retry.
        self.viewed.insert(job_id.to_string());
        Ok(true)
    }
}
