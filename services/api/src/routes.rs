use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use career_hub::workflows::feed::feed_page;
use career_hub::workflows::jobs::{job_router, JobPostingService, JobRepository};
use career_hub::workflows::talent::{talent_router, CandidateRepository, TalentSearchService};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct FeedQuery {
    pub(crate) q: String,
    pub(crate) page: Option<usize>,
    pub(crate) page_size: Option<usize>,
}

pub(crate) fn with_career_routes<C, J>(
    talent: Arc<TalentSearchService<C>>,
    jobs: Arc<JobPostingService<J, C>>,
) -> axum::Router
where
    C: CandidateRepository + 'static,
    J: JobRepository + 'static,
{
    talent_router(talent)
        .merge(job_router(jobs))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/feed", axum::routing::get(feed_endpoint))
        .route("/api/v1/dashboard", axum::routing::get(dashboard_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// News and videos, newest first, filtered by `q` and paginated.
pub(crate) async fn feed_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<FeedQuery>,
) -> impl IntoResponse {
    let items = state.feed.items();
    let page = feed_page(
        &items,
        &query.q,
        query.page_size.unwrap_or(state.page_size),
        query.page.unwrap_or(1),
    );
    (StatusCode::OK, Json(page))
}

pub(crate) async fn dashboard_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let snapshot = state.dashboard.load(Local::now().date_naive()).await;
    (StatusCode::OK, Json(snapshot))
}
