use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use super::domain::{Job, JobDraft, JobId};
use super::listing::{filter_jobs, sort_newest_first, JobFilterCriteria};
use super::notification::{spawn_roster_fan_out, NotificationDispatcher, NotificationHandle};
use super::repository::JobRepository;
use crate::workflows::pagination::{paginate, Page};
use crate::workflows::sources::or_empty;
use crate::workflows::talent::{CandidateRepository, RepositoryError};

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Ids already taken in the repository (seeded postings, another process) are skipped; this
/// bounds how many in a row.
const MAX_ID_ATTEMPTS: usize = 64;

fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:06}"))
}

/// Listing request for the job board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSearchRequest {
    #[serde(flatten)]
    pub criteria: JobFilterCriteria,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Result of a job creation: the stored posting plus the detached notification.
#[derive(Debug)]
pub struct JobCreated {
    pub job: Job,
    pub notification: NotificationHandle,
}

/// Service composing job storage, the student roster and the notification dispatcher.
pub struct JobPostingService<J, C> {
    jobs: Arc<J>,
    candidates: Arc<C>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    notifications_enabled: bool,
    default_page_size: usize,
}

impl<J, C> JobPostingService<J, C>
where
    J: JobRepository + 'static,
    C: CandidateRepository + 'static,
{
    pub fn new(
        jobs: Arc<J>,
        candidates: Arc<C>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        default_page_size: usize,
    ) -> Self {
        Self {
            jobs,
            candidates,
            dispatcher,
            notifications_enabled: true,
            default_page_size: default_page_size.max(1),
        }
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    /// Store a new posting and fan the announcement out to every student.
    ///
    /// Only validation and storage errors are returned; the notification runs detached and its
    /// outcome is available through [`JobCreated::notification`].
    pub fn create_job(
        &self,
        draft: JobDraft,
        today: NaiveDate,
    ) -> Result<JobCreated, JobServiceError> {
        if draft.title.trim().is_empty() {
            return Err(JobServiceError::Validation("title is required"));
        }
        if draft.company_id.0.trim().is_empty() {
            return Err(JobServiceError::Validation("company is required"));
        }

        let company = self
            .jobs
            .company(&draft.company_id)?
            .ok_or_else(|| JobServiceError::UnknownCompany(draft.company_id.0.clone()))?;

        let job = self.insert_with_fresh_id(draft.into_job(next_job_id(), today))?;
        info!(job_id = %job.id, company = %company.name, "job posted");

        let notification = self.notify_students(&job, company.name, today);
        Ok(JobCreated { job, notification })
    }

    fn insert_with_fresh_id(&self, mut job: Job) -> Result<Job, RepositoryError> {
        for _ in 1..MAX_ID_ATTEMPTS {
            match self.jobs.insert(job.clone()) {
                Err(RepositoryError::Conflict) => {
                    debug!(job_id = %job.id, "job id already taken; advancing sequence");
                    job.id = next_job_id();
                }
                other => return other,
            }
        }
        self.jobs.insert(job)
    }

    fn notify_students(&self, job: &Job, company_name: String, today: NaiveDate) -> NotificationHandle {
        if !self.notifications_enabled {
            return NotificationHandle::skipped("notifications disabled");
        }

        spawn_roster_fan_out(
            Arc::clone(&self.candidates),
            Arc::clone(&self.dispatcher),
            job.clone(),
            company_name,
            today,
        )
    }

    pub fn get(&self, id: &JobId) -> Result<Job, JobServiceError> {
        let job = self.jobs.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(job)
    }

    /// Filter and paginate the board, newest postings first. A failed fetch yields an empty
    /// board.
    pub fn search(&self, request: &JobSearchRequest) -> Page<Job> {
        let mut jobs = or_empty(self.jobs.list(), "jobs");
        sort_newest_first(&mut jobs);
        let matches = filter_jobs(&jobs, &request.criteria);
        paginate(
            &matches,
            request.page_size.unwrap_or(self.default_page_size),
            request.page.unwrap_or(1),
        )
    }
}

/// Error raised by the job posting service.
#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("invalid job posting: {0}")]
    Validation(&'static str),
    #[error("unknown company '{0}'")]
    UnknownCompany(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
