use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use fuzzyrec_core::Recommender;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    recommender: Arc<Recommender>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub items: usize,
    pub profiles: usize,
    pub checked_at: String,
}

pub fn router(recommender: Arc<Recommender>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { recommender })
}

/// The snapshot is loaded before the listener starts, so a responding process
/// is a ready process; the payload carries the snapshot dimensions for
/// operability.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let snapshot = state.recommender.snapshot();

    let payload = HealthResponse {
        status: "ready",
        items: snapshot.items().len(),
        profiles: snapshot.profiles().len(),
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}
