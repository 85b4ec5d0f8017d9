use super::domain::{Company, CompanyId, Job, JobId};
use crate::workflows::talent::RepositoryError;

/// Storage abstraction for postings and the employers that own them.
pub trait JobRepository: Send + Sync {
    fn insert(&self, job: Job) -> Result<Job, RepositoryError>;
    fn list(&self) -> Result<Vec<Job>, RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError>;
}
