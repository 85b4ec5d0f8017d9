use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::talent::router::completion_handler;
use crate::workflows::talent::{talent_router, TalentSearchService};

#[tokio::test]
async fn search_route_filters_and_paginates() {
    let router = talent_router(Arc::new(build_service(roster())));

    let body = json!({
        "searchText": "",
        "statusFilter": "Student",
        "jobTypeFilter": "All",
        "page": 1,
        "pageSize": 1
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/talent/search")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_status(&response, StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["totalItems"], json!(2));
    assert_eq!(payload["totalPages"], json!(2));
    assert_eq!(payload["rosterSize"], json!(4));
    assert_eq!(payload["items"][0]["id"], json!("stu-101"));
    assert_eq!(payload["items"][0]["studentStatus"], json!("Student"));
}

#[tokio::test]
async fn completion_handler_returns_percentage() {
    let service = Arc::new(build_service(roster()));
    let response = completion_handler::<MemoryCandidates>(
        State(service),
        Path("stu-101".to_string()),
    )
    .await;

    assert_status(&response, StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["candidateId"], json!("stu-101"));
    assert_eq!(payload["percentage"], json!(100));
    assert_eq!(payload["missingSections"], json!([]));
}

#[tokio::test]
async fn completion_handler_maps_missing_candidate_to_not_found() {
    let service = Arc::new(build_service(Vec::new()));
    let response =
        completion_handler::<MemoryCandidates>(State(service), Path("ghost".to_string())).await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn completion_handler_maps_outage_to_internal_error() {
    let service = Arc::new(TalentSearchService::new(Arc::new(UnavailableCandidates), 10));
    let response =
        completion_handler::<UnavailableCandidates>(State(service), Path("stu-1".to_string()))
            .await;
    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
}
