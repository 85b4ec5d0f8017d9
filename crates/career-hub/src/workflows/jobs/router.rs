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

use super::domain::{JobDraft, JobId};
use super::repository::JobRepository;
use super::service::{JobPostingService, JobSearchRequest, JobServiceError};
use crate::workflows::talent::{CandidateRepository, RepositoryError};

/// Router builder exposing job creation and the job board.
pub fn job_router<J, C>(service: Arc<JobPostingService<J, C>>) -> Router
where
    J: JobRepository + 'static,
    C: CandidateRepository + 'static,
{
    Router::new()
        .route("/api/v1/jobs", post(create_handler::<J, C>))
        .route("/api/v1/jobs/search", post(search_handler::<J, C>))
        .route("/api/v1/jobs/:job_id", get(fetch_handler::<J, C>))
        .with_state(service)
}

/// Responds 201 as soon as the posting is stored; the student notification is not awaited.
pub(crate) async fn create_handler<J, C>(
    State(service): State<Arc<JobPostingService<J, C>>>,
    axum::Json(draft): axum::Json<JobDraft>,
) -> Response
where
    J: JobRepository + 'static,
    C: CandidateRepository + 'static,
{
    match service.create_job(draft, Local::now().date_naive()) {
        Ok(created) => (StatusCode::CREATED, axum::Json(created.job)).into_response(),
        Err(JobServiceError::Validation(reason)) => {
            let payload = json!({ "error": reason });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(err @ JobServiceError::UnknownCompany(_)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(JobServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "job already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn search_handler<J, C>(
    State(service): State<Arc<JobPostingService<J, C>>>,
    axum::Json(request): axum::Json<JobSearchRequest>,
) -> Response
where
    J: JobRepository + 'static,
    C: CandidateRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.search(&request))).into_response()
}

pub(crate) async fn fetch_handler<J, C>(
    State(service): State<Arc<JobPostingService<J, C>>>,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    C: CandidateRepository + 'static,
{
    let id = JobId(job_id);
    match service.get(&id) {
        Ok(job) => (StatusCode::OK, axum::Json(job)).into_response(),
        Err(JobServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": format!("job {} not found", id.0) });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
