use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::talent::domain::{
    Candidate, CandidateId, EducationEntry, ExperienceEntry, JobType, StudentStatus,
};
use crate::workflows::talent::repository::{CandidateRepository, RepositoryError};
use crate::workflows::talent::{CandidateProfile, TalentSearchService};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn months_ago(months: u32) -> NaiveDate {
    today()
        .checked_sub_months(chrono::Months::new(months))
        .expect("valid date")
}

/// Candidate with a single finished role lasting exactly `months`.
pub(super) fn candidate(id: &str, name: &str, months: u32) -> Candidate {
    let experience = if months == 0 {
        Vec::new()
    } else {
        vec![ExperienceEntry {
            title: "Operations Assistant".to_string(),
            company: "Cedar Freight".to_string(),
            start_date: Some(months_ago(months)),
            end_date: Some(today()),
            is_current: false,
        }]
    };

    Candidate {
        id: CandidateId(id.to_string()),
        name: name.to_string(),
        email: format!("{id}@example.edu"),
        skills: vec!["Excel".to_string(), "Customer Service".to_string()],
        education: vec![EducationEntry {
            school: "Lakeside University".to_string(),
            degree: "Bachelor of Science".to_string(),
            field_of_study: "Business Analytics".to_string(),
            graduation_year: Some(2024),
            is_current: false,
        }],
        experience,
        student_status: None,
        specialization: None,
        job_type: Some(JobType::FullTime),
    }
}

/// Five candidates whose experience totals 0, 8, 20, 40 and 70 months.
pub(super) fn experience_ladder() -> Vec<Candidate> {
    vec![
        candidate("stu-000", "Noor Haddad", 0),
        candidate("stu-008", "Tomasz Nowak", 8),
        candidate("stu-020", "Keisha Grant", 20),
        candidate("stu-040", "Mateo Ruiz", 40),
        candidate("stu-070", "Ingrid Solberg", 70),
    ]
}

/// Mixed roster covering every filter dimension.
pub(super) fn roster() -> Vec<Candidate> {
    let mut engineer = candidate("stu-101", "Aiko Tanaka", 30);
    engineer.skills = vec!["Rust".to_string(), "PostgreSQL".to_string()];
    engineer.education = vec![EducationEntry {
        school: "Riverside Institute of Technology".to_string(),
        degree: "Master of Engineering".to_string(),
        field_of_study: "Computer Science".to_string(),
        graduation_year: None,
        is_current: true,
    }];
    engineer.job_type = Some(JobType::Internship);

    let mut designer = candidate("stu-102", "Samuel Osei", 4);
    designer.education = vec![EducationEntry {
        school: "Harbor Arts College".to_string(),
        degree: "Diploma of Graphic Design".to_string(),
        field_of_study: "Visual Communication".to_string(),
        graduation_year: Some(2023),
        is_current: false,
    }];
    designer.job_type = None;

    let mut analyst = candidate("stu-103", "Lucia Romano", 48);
    analyst.student_status = Some(StudentStatus::Alumni);
    analyst.specialization = Some("Data Science".to_string());
    analyst.job_type = Some(JobType::Contract);

    let mut researcher = candidate("stu-104", "Femi Adeyemi", 80);
    researcher.education.push(EducationEntry {
        school: "Lakeside University".to_string(),
        degree: "PhD".to_string(),
        field_of_study: "Computer Science".to_string(),
        graduation_year: None,
        is_current: true,
    });
    researcher.skills.push("Rust".to_string());
    researcher.job_type = Some(JobType::PartTime);

    vec![engineer, designer, analyst, researcher]
}

pub(super) fn profiles(candidates: Vec<Candidate>) -> Vec<CandidateProfile> {
    CandidateProfile::resolve_all(candidates, today())
}

pub(super) fn ids(profiles: &[CandidateProfile]) -> Vec<&str> {
    profiles.iter().map(|profile| profile.id().0.as_str()).collect()
}

pub(super) fn build_service(candidates: Vec<Candidate>) -> TalentSearchService<MemoryCandidates> {
    TalentSearchService::new(Arc::new(MemoryCandidates::new(candidates)), 10)
}

#[derive(Default, Clone)]
pub(super) struct MemoryCandidates {
    pub(super) records: Arc<Mutex<Vec<Candidate>>>,
}

impl MemoryCandidates {
    pub(super) fn new(records: Vec<Candidate>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl CandidateRepository for MemoryCandidates {
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|candidate| &candidate.id == id).cloned())
    }
}

pub(super) struct UnavailableCandidates;

impl CandidateRepository for UnavailableCandidates {
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection reset".to_string()))
    }

    fn fetch(&self, _id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection reset".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status code");
}
