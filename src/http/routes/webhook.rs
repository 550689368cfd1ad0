use crate::models::payment::PaymentEvent;
use crate::services::payments::process_payment_event;
use crate::state::AppState;
use crate::utils::signature::verify_signature;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, warn};

const SIGNATURE_HEADER: &str = "x-payment-signature";

/// Payment-provider webhook. The signature covers the raw body, so the
/// handler takes `Bytes` and parses only after verification.
pub async fn payment_webhook_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !verify_signature(&app_state.config.payments.signing_secret, &body, signature) {
        warn!("rejected payment webhook with bad signature");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid signature" })),
        )
            .into_response();
    }

    let event: PaymentEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!("unparseable payment event: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid payload" })),
            )
                .into_response();
        }
    };

    info!("payment webhook called: kind = {}", event.kind);

    let mut store = app_state.store.lock().await;
    match process_payment_event(&app_state.config, &mut store, event) {
        Ok(outcome) => {
            info!("payment event processed: {:?}", outcome);
            Json(json!({ "received": true })).into_response()
        }
        Err(e) => {
            error!("payment event failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "store unavailable" })),
            )
                .into_response()
        }
    }
}

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/webhook/payments", post(payment_webhook_handler))
        .with_state(app_state)
}
