//! The recommendation endpoint.
//!
//! - `POST /recommend` — score every catalog item against the visited list.
//!
//! Request: `{ "urls": ["<item>", ...] }`. Response: `{ "recommendation":
//! { "<item>": <score>, ... } }`, with an `error` field instead when the
//! payload cannot be decoded. Once a snapshot is loaded the pipeline itself
//! cannot fail, so an undecodable payload is the only per-request error.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use fuzzyrec_core::Recommender;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone)]
pub struct RecommendState {
    recommender: Arc<Recommender>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendation: BTreeMap<String, f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn router(recommender: Arc<Recommender>) -> Router {
    Router::new().route("/recommend", post(recommend)).with_state(RecommendState { recommender })
}

pub async fn recommend(
    State(state): State<RecommendState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> (StatusCode, Json<RecommendResponse>) {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(
                event_name = "request.recommend.malformed",
                error = %rejection,
                "recommend payload could not be decoded"
            );
            return (
                StatusCode::BAD_REQUEST,
                Json(RecommendResponse {
                    recommendation: BTreeMap::new(),
                    error: Some(rejection.body_text()),
                }),
            );
        }
    };

    let recommendation = state.recommender.recommend(&request.urls);
    (StatusCode::OK, Json(RecommendResponse { recommendation, error: None }))
}
