use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

/// A job posting. Serialized field names match the `ct_jobs` blobs written
/// by earlier versions of the product, so existing data loads unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub trade: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub wage_band: String,
    #[serde(rename = "union", default)]
    pub union_job: bool,
    #[serde(rename = "campLOA", default)]
    pub camp_loa: bool,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub description: String,
    pub posted_by: String,
    pub posted_at: DateTime<Utc>,
    pub status: JobStatus,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub applications_count: u64,
}

/// Caller-supplied fields for a new posting. Everything the store derives
/// (id, owner, timestamps, counters) is filled in by `create_job`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub trade: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub wage_band: String,
    #[serde(rename = "union", default)]
    pub union_job: bool,
    #[serde(rename = "campLOA", default)]
    pub camp_loa: bool,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update: fields left as `None` are untouched. Counters and
/// ownership fields are deliberately not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub sector: Option<String>,
    pub trade: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub wage_band: Option<String>,
    #[serde(rename = "union")]
    pub union_job: Option<bool>,
    #[serde(rename = "campLOA")]
    pub camp_loa: Option<bool>,
    pub shift: Option<String>,
    pub description: Option<String>,
    pub status: Option<JobStatus>,
    pub archived: Option<bool>,
}

impl Job {
    pub fn apply(&mut self, patch: JobPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(sector) = patch.sector {
            self.sector = sector;
        }
        if let Some(trade) = patch.trade {
            self.trade = trade;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(region) = patch.region {
            self.region = region;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(wage_band) = patch.wage_band {
            self.wage_band = wage_band;
        }
        if let Some(union_job) = patch.union_job {
            self.union_job = union_job;
        }
        if let Some(camp_loa) = patch.camp_loa {
            self.camp_loa = camp_loa;
        }
        if let Some(shift) = patch.shift {
            self.shift = shift;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(archived) = patch.archived {
            self.archived = archived;
        }
    }
}
