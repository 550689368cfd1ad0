use super::{MarketStore, EMPLOYERS_KEY};
use crate::error::{StoreError, StoreResult};
use crate::models::employer::{Employer, EmployerPatch};
use crate::utils::ids::new_id;
use tracing::info;

/// Post/view/seat allotments granted when a plan is activated.
#[derive(Debug, Clone, Copy)]
pub struct PlanAllotment {
    pub posts: Option<i64>,
    pub views: Option<i64>,
    pub seats: Option<i64>,
}

impl MarketStore {
    /// Partial update by id; unknown ids are a no-op.
    pub fn update_employer(&mut self, employer_id: &str, patch: EmployerPatch) -> StoreResult<()> {
        let Some(idx) = self.employers.iter().position(|e| e.id == employer_id) else {
            return Ok(());
        };
        let mut new_employers = self.employers.clone();
        new_employers[idx].apply(patch);
        self.persist(EMPLOYERS_KEY, &new_employers)?;
        self.employers = new_employers;
        Ok(())
    }

    /// Grants `plan` to the employer whose owner or member email matches,
    /// creating the record when the purchase arrives before profile
    /// completion. Remaining counters reset to the plan's allotments.
    pub fn activate_plan(
        &mut self,
        email: &str,
        plan: &str,
        allotment: PlanAllotment,
    ) -> StoreResult<Employer> {
        let mut new_employers = self.employers.clone();
        let idx = match new_employers.iter().position(|e| has_email(e, email)) {
            Some(idx) => idx,
            None => {
                new_employers.push(Employer {
                    id: new_id("emp"),
                    plan: None,
                    plan_posts_remaining: None,
                    plan_views_remaining: None,
                    plan_seats: None,
                    member_emails: Vec::new(),
                    owner_email: email.to_string(),
                    verified: false,
                });
                new_employers.len() - 1
            }
        };

        {
            let e = &mut new_employers[idx];
            e.plan = Some(plan.to_string());
            e.plan_posts_remaining = allotment.posts;
            e.plan_views_remaining = allotment.views;
            e.plan_seats = allotment.seats;
            e.verified = true;
        }

        self.persist(EMPLOYERS_KEY, &new_employers)?;
        self.employers = new_employers;
        let employer = self.employers[idx].clone();
        info!(employer_id = %employer.id, plan, "employer plan activated");
        Ok(employer)
    }

    /// Drops the plan after a lapsed or cancelled subscription; exhausts
    /// both remaining counters so nothing more can be consumed.
    pub fn deactivate_plan(&mut self, email: &str) -> StoreResult<Employer> {
        let Some(idx) = self.employers.iter().position(|e| has_email(e, email)) else {
            return Err(StoreError::RecordNotFound {
                collection: "employers",
                id: email.to_string(),
            });
        };

        let mut new_employers = self.employers.clone();
        {
            let e = &mut new_employers[idx];
            e.plan = None;
            e.plan_posts_remaining = Some(0);
            e.plan_views_remaining = Some(0);
        }

        self.persist(EMPLOYERS_KEY, &new_employers)?;
        self.employers = new_employers;
        let employer = self.employers[idx].clone();
        info!(employer_id = %employer.id, "employer plan deactivated");
        Ok(employer)
    }

    /// Inserts or replaces a full employer record, as written on employer
    /// profile completion.
    pub fn insert_employer(&mut self, employer: Employer) -> StoreResult<()> {
        let mut new_employers = self.employers.clone();
        new_employers.retain(|e| e.id != employer.id);
        new_employers.push(employer);
        self.persist(EMPLOYERS_KEY, &new_employers)?;
        self.employers = new_employers;
        Ok(())
    }
}

fn has_email(employer: &Employer, email: &str) -> bool {
    employer.owner_email.eq_ignore_ascii_case(email)
        || employer
            .member_emails
            .iter()
            .any(|m| m.eq_ignore_ascii_case(email))
}
