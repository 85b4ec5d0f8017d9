use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::CandidateId;
use super::repository::{CandidateRepository, RepositoryError};
use super::service::{TalentSearchRequest, TalentSearchService, TalentServiceError};

/// Router builder exposing the talent search endpoints.
pub fn talent_router<R>(service: Arc<TalentSearchService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route("/api/v1/talent/search", post(search_handler::<R>))
        .route(
            "/api/v1/talent/:candidate_id/completion",
            get(completion_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<TalentSearchService<R>>>,
    axum::Json(request): axum::Json<TalentSearchRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let today = Local::now().date_naive();
    let page = service.search(&request, today);
    (StatusCode::OK, axum::Json(page)).into_response()
}

pub(crate) async fn completion_handler<R>(
    State(service): State<Arc<TalentSearchService<R>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let id = CandidateId(candidate_id);
    match service.completion(&id) {
        Ok(completion) => (
            StatusCode::OK,
            axum::Json(json!({
                "candidateId": id.0,
                "percentage": completion.percentage,
                "missingSections": completion.missing_labels(),
            })),
        )
            .into_response(),
        Err(TalentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("candidate {} not found", id.0),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
