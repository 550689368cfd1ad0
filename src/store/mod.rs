pub mod applications;
pub mod blogs;
pub mod employers;
pub mod jobs;
pub mod seed;

use crate::error::StoreResult;
use crate::models::application::Application;
use crate::models::blog::BlogPost;
use crate::models::employer::Employer;
use crate::models::job::Job;
use crate::storage::StorageBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

pub const JOBS_KEY: &str = "ct_jobs";
pub const APPLICATIONS_KEY: &str = "ct_applications";
pub const EMPLOYERS_KEY: &str = "ct_employers";
pub const BLOGS_KEY: &str = "ct_blogs";

/// Local mirror of the four marketplace collections, backed by a key-value
/// store that persists each collection as one whole blob.
///
/// Consistency is session-local: every mutation persists before the
/// in-memory copy is replaced, so memory and storage never disagree from
/// this instance's point of view. Nothing coordinates two instances sharing
/// one backend; they overwrite each other last-writer-wins.
pub struct MarketStore {
    backend: Box<dyn StorageBackend>,
    jobs: Vec<Job>,
    applications: Vec<Application>,
    employers: Vec<Employer>,
    blogs: Vec<BlogPost>,
    /// Job ids this session already counted a view for. Not durable and
    /// not shared across instances.
    viewed: HashSet<String>,
    seeded: bool,
}

impl MarketStore {
    /// Loads every collection from the backend. Absent keys are seeded:
    /// jobs and blogs get the fixed example dataset, applications and
    /// employers start empty.
    pub fn open(mut backend: Box<dyn StorageBackend>) -> StoreResult<Self> {
        let mut seeded = false;

        let jobs = load_or_seed(backend.as_mut(), JOBS_KEY, seed::jobs, &mut seeded)?;
        let applications =
            load_or_seed(backend.as_mut(), APPLICATIONS_KEY, Vec::new, &mut seeded)?;
        let employers = load_or_seed(backend.as_mut(), EMPLOYERS_KEY, Vec::new, &mut seeded)?;
        let blogs = load_or_seed(backend.as_mut(), BLOGS_KEY, seed::blogs, &mut seeded)?;

        info!(
            jobs = jobs.len(),
            applications = applications.len(),
            employers = employers.len(),
            blogs = blogs.len(),
            seeded,
            "marketplace store opened"
        );

        Ok(Self {
            backend,
            jobs,
            applications,
            employers,
            blogs,
            viewed: HashSet::new(),
            seeded,
        })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn employers(&self) -> &[Employer] {
        &self.employers
    }

    pub fn blogs(&self) -> &[BlogPost] {
        &self.blogs
    }

    /// Whether this open wrote any seed data.
    pub fn seeded(&self) -> bool {
        self.seeded
    }

    pub(crate) fn persist<T: Serialize>(&mut self, key: &str, records: &[T]) -> StoreResult<()> {
        let blob = encode(records);
        self.backend.write(key, &blob)?;
        Ok(())
    }

    /// Persists `first` and then `second`; if the second write fails the
    /// first key is rewritten with its prior blob, so the pair is never
    /// durably half-applied.
    pub(crate) fn persist_pair<A: Serialize, B: Serialize>(
        &mut self,
        first: (&str, &[A]),
        second: (&str, &[B]),
    ) -> StoreResult<()> {
        let prior = self.backend.read(first.0)?;
        self.backend.write(first.0, &encode(first.1))?;
        if let Err(e) = self.backend.write(second.0, &encode(second.1)) {
            if let Some(prior) = prior {
                let _ = self.backend.write(first.0, &prior);
            }
            return Err(e.into());
        }
        Ok(())
    }
}

pub(crate) fn encode<T: Serialize>(records: &[T]) -> String {
    serde_json::to_string(records).expect("collection records are always serializable")
}

fn load_or_seed<T, F>(
    backend: &mut dyn StorageBackend,
    key: &str,
    seed: F,
    seeded: &mut bool,
) -> StoreResult<Vec<T>>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    if let Some(blob) = backend.read(key)? {
        // Tolerant read: a record missing newer fields deserializes with
        // defaults rather than poisoning the whole collection.
        match serde_json::from_str(&blob) {
            Ok(records) => return Ok(records),
            Err(e) => {
                tracing::warn!("discarding unreadable blob under {key}: {e}");
            }
        }
    }

    let records = seed();
    backend.write(key, &encode(&records))?;
    *seeded = true;
    Ok(records)
}
