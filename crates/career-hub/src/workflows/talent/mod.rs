//! Talent search: candidate snapshots, experience and education derivation, the conjunctive
//! filter engine and the search service used by the employer and admin dashboards.

pub mod domain;
pub mod education;
pub mod experience;
pub mod filter;
pub mod profile;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateId, CandidateProfile, CandidateSummaryView, EducationEntry,
    ExperienceEntry, JobType, StudentStatus,
};
pub use education::{resolve_education_level, EducationLevel};
pub use experience::{bucket_experience, months_between, total_experience_months, ExperienceBucket};
pub use filter::{filter_candidates, FilterCriteria, Selection};
pub use profile::{profile_completion, ProfileCompletion, ProfileSection};
pub use repository::{CandidateRepository, RepositoryError};
pub use router::talent_router;
pub use service::{TalentSearchPage, TalentSearchRequest, TalentSearchService, TalentServiceError};
