use coretrades_local::error::StoreError;
use coretrades_local::models::blog::BlogDraft;
use coretrades_local::models::employer::{Employer, EmployerPatch};
use coretrades_local::models::job::{JobDraft, JobPatch, JobStatus};
use coretrades_local::storage::MemoryBackend;
use coretrades_local::store::MarketStore;

fn open_store() -> (MemoryBackend, MarketStore) {
    let backend = MemoryBackend::new();
    let store = MarketStore::open(Box::new(backend.clone())).unwrap();
    (backend, store)
}

fn employer_with_plan(id: &str, posts: Option<i64>, views: Option<i64>) -> Employer {
    Employer {
        id: id.to_string(),
        plan: Some("starter".to_string()),
        plan_posts_remaining: posts,
        plan_views_remaining: views,
        plan_seats: Some(1),
        member_emails: Vec::new(),
        owner_email: format!("{id}@example.test"),
        verified: true,
    }
}

fn draft(title: &str) -> JobDraft {
    JobDraft {
        title: title.to_string(),
        ..Default::default()
    }
}

fn posts_remaining(store: &MarketStore, employer_id: &str) -> Option<i64> {
    store
        .employers()
        .iter()
        .find(|e| e.id == employer_id)
        .unwrap()
        .plan_posts_remaining
}

#[test]
fn post_quota_counts_down_and_then_rejects() {
    let (_, mut store) = open_store();
    store
        .insert_employer(employer_with_plan("E1", Some(2), None))
        .unwrap();
    let seeded_jobs = store.jobs().len();

    store.create_job(draft("Welder"), "E1").unwrap();
    assert_eq!(posts_remaining(&store, "E1"), Some(1));

    store.create_job(draft("Welder"), "E1").unwrap();
    assert_eq!(posts_remaining(&store, "E1"), Some(0));

    let err = store.create_job(draft("Welder"), "E1").unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { .. }));
    assert_eq!(posts_remaining(&store, "E1"), Some(0));
    assert_eq!(store.jobs().len(), seeded_jobs + 2);
}

#[test]
fn unlimited_and_planless_employers_are_never_quota_gated() {
    let (_, mut store) = open_store();
    store
        .insert_employer(employer_with_plan("E1", None, None))
        .unwrap();

    for _ in 0..5 {
        store.create_job(draft("Millwright"), "E1").unwrap();
    }
    assert_eq!(posts_remaining(&store, "E1"), None);

    // No employer record at all: the job is still created, with no
    // bookkeeping to update.
    let job = store.create_job(draft("Scaffolder"), "ghost").unwrap();
    assert_eq!(job.posted_by, "ghost");
}

#[test]
fn create_application_bumps_the_job_counter_atomically() {
    let (_, mut store) = open_store();
    let job = store.jobs()[0].clone();

    let app = store.create_application(&job.id, "cand_1").unwrap();
    assert_eq!(app.job_id, job.id);
    assert_eq!(app.employer_id, job.posted_by);
    assert_eq!(store.applications().len(), 1);
    assert_eq!(
        store.jobs().iter().find(|j| j.id == job.id).unwrap().applications_count,
        1
    );
}

#[test]
fn create_application_for_missing_job_changes_nothing() {
    let (_, mut store) = open_store();
    let jobs_before: Vec<_> = store.jobs().to_vec();

    let err = store.create_application("job_nope", "cand_1").unwrap_err();
    assert!(matches!(err, StoreError::JobNotFound(_)));
    assert!(store.applications().is_empty());
    assert_eq!(store.jobs().len(), jobs_before.len());
}

#[test]
fn views_count_once_per_session_and_consume_view_quota() {
    let (_, mut store) = open_store();
    store
        .insert_employer(employer_with_plan("E1", Some(5), Some(3)))
        .unwrap();
    let job = store.create_job(draft("Boilermaker"), "E1").unwrap();

    assert!(store.increment_job_views(&job.id, "E1").unwrap());
    assert!(!store.increment_job_views(&job.id, "E1").unwrap());

    let job = store.jobs().iter().find(|j| j.id == job.id).unwrap();
    assert_eq!(job.views, 1);
    let views = store
        .employers()
        .iter()
        .find(|e| e.id == "E1")
        .unwrap()
        .plan_views_remaining;
    assert_eq!(views, Some(2));
}

#[test]
fn exhausted_view_quota_still_counts_the_view() {
    let (_, mut store) = open_store();
    store
        .insert_employer(employer_with_plan("E1", Some(5), Some(0)))
        .unwrap();
    let job = store.create_job(draft("Glazier"), "E1").unwrap();

    assert!(store.increment_job_views(&job.id, "E1").unwrap());
    assert_eq!(
        store.jobs().iter().find(|j| j.id == job.id).unwrap().views,
        1
    );
    let views = store
        .employers()
        .iter()
        .find(|e| e.id == "E1")
        .unwrap()
        .plan_views_remaining;
    assert_eq!(views, Some(0));
}

#[test]
fn reload_round_trips_every_collection() {
    let (backend, mut store) = open_store();
    store
        .insert_employer(employer_with_plan("E1", Some(2), Some(10)))
        .unwrap();
    let job = store.create_job(draft("Ironworker"), "E1").unwrap();
    store.create_application(&job.id, "cand_1").unwrap();
    store
        .create_blog(BlogDraft {
            title: "Trade shortages in 2026".to_string(),
            ..Default::default()
        })
        .unwrap();

    // Fresh session against the same persisted blobs.
    let reloaded = MarketStore::open(Box::new(backend)).unwrap();
    assert!(!reloaded.seeded());

    let as_json = |s: &MarketStore| {
        (
            serde_json::to_value(s.jobs()).unwrap(),
            serde_json::to_value(s.applications()).unwrap(),
            serde_json::to_value(s.employers()).unwrap(),
            serde_json::to_value(s.blogs()).unwrap(),
        )
    };
    assert_eq!(as_json(&store), as_json(&reloaded));
}

#[test]
fn a_fresh_session_counts_the_same_view_again() {
    let (backend, mut store) = open_store();
    let job_id = store.jobs()[0].id.clone();
    assert!(store.increment_job_views(&job_id, "seed_employer").unwrap());

    // The viewed set is per-instance, so a reload may double-count. This is
    // the documented scope limit, not a bug.
    let mut second = MarketStore::open(Box::new(backend)).unwrap();
    assert!(second.increment_job_views(&job_id, "seed_employer").unwrap());
    assert_eq!(
        second.jobs().iter().find(|j| j.id == job_id).unwrap().views,
        2
    );
}

#[test]
fn same_title_blogs_get_distinct_slugs() {
    let (_, mut store) = open_store();
    let first = store
        .create_blog(BlogDraft {
            title: "Winter shutdown season".to_string(),
            ..Default::default()
        })
        .unwrap();
    let second = store
        .create_blog(BlogDraft {
            title: "Winter shutdown season".to_string(),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(first.slug, "winter-shutdown-season");
    assert_eq!(second.slug, "winter-shutdown-season-2");
    assert_ne!(first.id, second.id);
}

#[test]
fn update_job_touches_only_patched_fields() {
    let (_, mut store) = open_store();
    let job_id = store.jobs()[0].id.clone();
    store.create_application(&job_id, "cand_1").unwrap();
    store.increment_job_views(&job_id, "seed_employer").unwrap();
    let before = store.jobs()[0].clone();

    store
        .update_job(
            &job_id,
            JobPatch {
                status: Some(JobStatus::Closed),
                ..Default::default()
            },
        )
        .unwrap();

    let after = store.jobs().iter().find(|j| j.id == job_id).unwrap();
    assert_eq!(after.status, JobStatus::Closed);
    assert_eq!(after.title, before.title);
    assert_eq!(after.company, before.company);
    assert_eq!(after.views, before.views);
    assert_eq!(after.applications_count, before.applications_count);
    assert_eq!(after.posted_at, before.posted_at);
}

#[test]
fn update_on_unknown_ids_is_a_no_op() {
    let (_, mut store) = open_store();
    let jobs_before = serde_json::to_value(store.jobs()).unwrap();

    store
        .update_job(
            "job_nope",
            JobPatch {
                status: Some(JobStatus::Closed),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(serde_json::to_value(store.jobs()).unwrap(), jobs_before);
}

#[test]
fn employer_patch_can_reset_counters_and_clear_the_plan() {
    let (_, mut store) = open_store();
    store
        .insert_employer(employer_with_plan("E1", Some(0), Some(5)))
        .unwrap();

    // Back to unlimited posts; the plan and other fields stay put.
    store
        .update_employer(
            "E1",
            EmployerPatch {
                plan_posts_remaining: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    let employer = store.employers().iter().find(|e| e.id == "E1").unwrap();
    assert_eq!(employer.plan_posts_remaining, None);
    assert_eq!(employer.plan_views_remaining, Some(5));
    assert_eq!(employer.plan.as_deref(), Some("starter"));

    // An exhausted allotment blocked posting; unlimited does not.
    store.create_job(draft("Rigger"), "E1").unwrap();

    store
        .update_employer(
            "E1",
            EmployerPatch {
                plan: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    let employer = store.employers().iter().find(|e| e.id == "E1").unwrap();
    assert_eq!(employer.plan, None);
}

#[test]
fn failed_persist_leaves_memory_and_storage_untouched() {
    let (backend, mut store) = open_store();
    store
        .insert_employer(employer_with_plan("E1", Some(2), None))
        .unwrap();
    let jobs_blob = backend.blob("ct_jobs").unwrap();

    backend.fail_next_writes(&[true]);
    let err = store.create_job(draft("Welder"), "E1").unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)));

    assert_eq!(posts_remaining(&store, "E1"), Some(2));
    assert_eq!(backend.blob("ct_jobs").unwrap(), jobs_blob);
}

#[test]
fn half_failed_application_write_is_rolled_back() {
    let (backend, mut store) = open_store();
    let job_id = store.jobs()[0].id.clone();
    let apps_blob = backend.blob("ct_applications").unwrap();
    let jobs_blob = backend.blob("ct_jobs").unwrap();

    // First write (applications) succeeds, second (jobs) fails; the
    // applications blob must be restored.
    backend.fail_next_writes(&[false, true]);
    let err = store.create_application(&job_id, "cand_1").unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)));

    assert!(store.applications().is_empty());
    assert_eq!(store.jobs()[0].applications_count, 0);
    assert_eq!(backend.blob("ct_applications").unwrap(), apps_blob);
    assert_eq!(backend.blob("ct_jobs").unwrap(), jobs_blob);
}

#[test]
fn delete_job_leaves_applications_orphaned() {
    let (_, mut store) = open_store();
    let job_id = store.jobs()[0].id.clone();
    store.create_application(&job_id, "cand_1").unwrap();

    store.delete_job(&job_id).unwrap();
    assert!(store.jobs().iter().all(|j| j.id != job_id));
    assert_eq!(store.applications().len(), 1);
    assert_eq!(store.applications()[0].job_id, job_id);
}

#[test]
fn first_open_seeds_jobs_and_blogs() {
    let (backend, store) = open_store();
    assert!(store.seeded());
    assert_eq!(store.jobs().len(), 3);
    assert_eq!(store.blogs().len(), 4);
    assert!(store.applications().is_empty());
    assert!(store.employers().is_empty());

    // Seeds are persisted under the fixed keys immediately.
    for key in ["ct_jobs", "ct_applications", "ct_employers", "ct_blogs"] {
        assert!(backend.blob(key).is_some(), "missing blob for {key}");
    }
}
