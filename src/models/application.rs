use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    New,
    Reviewed,
    Shortlisted,
    Rejected,
}

/// A candidate's application to a job. Immutable after creation except for
/// `status` and `note`. Deleting the job does not cascade; the record is
/// left referencing a dead id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub employer_id: String,
    pub created_at: DateTime<Utc>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
    pub note: Option<String>,
}

impl Application {
    pub fn apply(&mut self, patch: ApplicationPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
    }
}
