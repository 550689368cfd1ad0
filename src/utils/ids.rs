use uuid::Uuid;

/// Prefixed record id, e.g. `job_6f9a…`. The prefix keeps ids readable in
/// logs and in the persisted blobs.
pub fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
