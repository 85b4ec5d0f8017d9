use super::domain::{Candidate, CandidateId};

/// Read access to the student collection held by the persistence API.
pub trait CandidateRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError>;
    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
