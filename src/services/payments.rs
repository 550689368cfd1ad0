use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::payment::PaymentEvent;
use crate::store::employers::PlanAllotment;
use crate::store::MarketStore;
use tracing::{info, warn};

/// What the relay did with an event. Everything here is acknowledged to the
/// provider; `Ignored` covers both unhandled kinds and events the store has
/// no matching record for.
#[derive(Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    Activated { employer_id: String, plan: String },
    Deactivated { employer_id: String },
    Ignored(&'static str),
}

/// Switch over the provider's subscription-lifecycle event kinds, mirroring
/// the hosted webhook function: a completed checkout activates the plan on
/// the matching employer record, a dead subscription or failed invoice
/// deactivates it, everything else is acknowledged untouched.
pub fn process_payment_event(
    config: &AppConfig,
    store: &mut MarketStore,
    event: PaymentEvent,
) -> StoreResult<PaymentOutcome> {
    match event.kind.as_str() {
        "checkout.session.completed" => {
            let Some(email) = event.data.object.email().map(str::to_owned) else {
                warn!("checkout completed without a customer email; skipping");
                return Ok(PaymentOutcome::Ignored("no customer email"));
            };

            let plan_id = event
                .data
                .object
                .metadata
                .get("plan")
                .cloned()
                .or_else(|| config.payments.plans.first().map(|p| p.id.clone()));
            let Some(plan_id) = plan_id else {
                warn!("no plan metadata and no plans configured; skipping activation");
                return Ok(PaymentOutcome::Ignored("no plan configured"));
            };
            let Some(plan) = config.plan(&plan_id) else {
                warn!(plan_id, "checkout references an unconfigured plan; skipping");
                return Ok(PaymentOutcome::Ignored("unknown plan"));
            };

            let allotment = PlanAllotment {
                posts: plan.posts,
                views: plan.views,
                seats: plan.seats,
            };
            let employer = store.activate_plan(&email, &plan_id, allotment)?;
            info!(employer_id = %employer.id, plan_id, "ACTIVATE");
            Ok(PaymentOutcome::Activated {
                employer_id: employer.id,
                plan: plan_id,
            })
        }

        "customer.subscription.deleted" | "invoice.payment_failed" => {
            let Some(email) = event.data.object.email().map(str::to_owned) else {
                warn!(kind = %event.kind, "event carries no customer email; skipping");
                return Ok(PaymentOutcome::Ignored("no customer email"));
            };
            match store.deactivate_plan(&email) {
                Ok(employer) => {
                    info!(employer_id = %employer.id, "DEACTIVATE");
                    Ok(PaymentOutcome::Deactivated {
                        employer_id: employer.id,
                    })
                }
                Err(StoreError::RecordNotFound { .. }) => {
                    warn!("no employer record for deactivation email");
                    Ok(PaymentOutcome::Ignored("unknown employer"))
                }
                Err(e) => Err(e),
            }
        }

        _ => Ok(PaymentOutcome::Ignored("unhandled event kind")),
    }
}
