use super::common::*;
use crate::workflows::talent::domain::CandidateId;
use crate::workflows::talent::repository::RepositoryError;
use crate::workflows::talent::{
    FilterCriteria, Selection, TalentSearchRequest, TalentSearchService, TalentServiceError,
};
use std::sync::Arc;

#[test]
fn search_paginates_filtered_roster() {
    let mut candidates = experience_ladder();
    candidates.extend(roster());
    let service = TalentSearchService::new(Arc::new(MemoryCandidates::new(candidates)), 2);

    let request = TalentSearchRequest {
        criteria: FilterCriteria {
            search_text: "lakeside".to_string(),
            ..FilterCriteria::default()
        },
        page: Some(3),
        page_size: None,
    };
    let result = service.search(&request, today());

    assert_eq!(result.roster_size, 9);
    assert_eq!(result.page.total_items, 7);
    assert_eq!(result.page.total_pages, 4);
    assert_eq!(result.page.page_number, 3);
    let names: Vec<&str> = result.page.items.iter().map(|view| view.name.as_str()).collect();
    assert_eq!(names, vec!["Ingrid Solberg", "Lucia Romano"]);
}

#[test]
fn page_beyond_results_is_empty_not_an_error() {
    let service = build_service(experience_ladder());
    let request = TalentSearchRequest {
        criteria: FilterCriteria {
            experience: Selection::only("5+ years"),
            ..FilterCriteria::default()
        },
        page: Some(4),
        page_size: Some(10),
    };

    let result = service.search(&request, today());
    assert!(result.page.items.is_empty());
    assert_eq!(result.page.total_items, 1);
    assert_eq!(result.page.total_pages, 1);
}

#[test]
fn unavailable_repository_degrades_to_empty_results() {
    let service = TalentSearchService::new(Arc::new(UnavailableCandidates), 10);
    let result = service.search(&TalentSearchRequest::default(), today());

    assert_eq!(result.roster_size, 0);
    assert!(result.page.items.is_empty());
    assert_eq!(result.page.total_pages, 1);
}

#[test]
fn completion_reports_missing_sections() {
    let mut candidate = candidate("stu-200", "Hana Kim", 0);
    candidate.job_type = None;
    let service = build_service(vec![candidate]);

    let completion = service
        .completion(&CandidateId("stu-200".to_string()))
        .expect("completion computed");

    assert_eq!(completion.percentage, 70);
    assert_eq!(
        completion.missing_labels(),
        vec!["Work experience", "Preferred job type"]
    );
}

#[test]
fn completion_propagates_not_found() {
    let service = build_service(Vec::new());
    match service.completion(&CandidateId("missing".to_string())) {
        Err(TalentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}
