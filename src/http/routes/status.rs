use crate::middleware::api_key::api_key_auth;
use crate::state::AppState;
use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct StatusResponse {
    jobs: usize,
    applications: usize,
    employers: usize,
    blogs: usize,
    seeded: bool,
}

/// Operational snapshot of the store: collection sizes and whether this
/// process wrote seed data on startup.
async fn handle_status(State(app_state): State<AppState>) -> impl IntoResponse {
    let store = app_state.store.lock().await;
    Json(StatusResponse {
        jobs: store.jobs().len(),
        applications: store.applications().len(),
        employers: store.employers().len(),
        blogs: store.blogs().len(),
        seeded: store.seeded(),
    })
}

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/v1/status", get(handle_status))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            api_key_auth,
        ))
        .with_state(app_state)
}
