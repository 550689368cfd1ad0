use serde::{Deserialize, Deserializer, Serialize};

/// One record per organization. `plan` is `None` until a subscription is
/// activated; a `None` remaining-counter means unlimited, not zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub id: String,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub plan_posts_remaining: Option<i64>,
    #[serde(default)]
    pub plan_views_remaining: Option<i64>,
    #[serde(default)]
    pub plan_seats: Option<i64>,
    #[serde(default)]
    pub member_emails: Vec<String>,
    #[serde(default)]
    pub owner_email: String,
    #[serde(default)]
    pub verified: bool,
}

/// Partial update. The plan fields are double-optioned so a patch can
/// distinguish "leave unchanged" (outer `None`) from "set back to
/// null/unlimited" (`Some(None)`), matching a merge of an explicit null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub plan: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub plan_posts_remaining: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub plan_views_remaining: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub plan_seats: Option<Option<i64>>,
    pub member_emails: Option<Vec<String>>,
    pub owner_email: Option<String>,
    pub verified: Option<bool>,
}

/// A present field deserializes to `Some(value-or-null)`; an absent field
/// falls back to the outer `None` via `#[serde(default)]`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl Employer {
    pub fn apply(&mut self, patch: EmployerPatch) {
        if let Some(plan) = patch.plan {
            self.plan = plan;
        }
        if let Some(posts) = patch.plan_posts_remaining {
            self.plan_posts_remaining = posts;
        }
        if let Some(views) = patch.plan_views_remaining {
            self.plan_views_remaining = views;
        }
        if let Some(seats) = patch.plan_seats {
            self.plan_seats = seats;
        }
        if let Some(members) = patch.member_emails {
            self.member_emails = members;
        }
        if let Some(owner_email) = patch.owner_email {
            self.owner_email = owner_email;
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
    }
}
