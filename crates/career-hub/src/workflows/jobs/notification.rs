//! New-job fan-out to the student roster.
//!
//! Delivery is best effort: one attempt, on a detached thread, with failures logged and
//! swallowed. Nothing here can fail the job creation that triggered it. The roster fetch and
//! payload build run on that same thread, so a slow student API never holds up the caller.

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{Job, JobId};
use crate::workflows::talent::{
    CandidateProfile, CandidateRepository, EducationLevel, ExperienceBucket, JobType,
};

/// Job summary carried by the notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub salary_range: Option<String>,
}

/// Denormalized student record for the mail template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecipient {
    pub name: String,
    pub email: String,
    pub education_level: EducationLevel,
    pub experience_range: ExperienceBucket,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub job: JobSummary,
    pub recipients: Vec<NotificationRecipient>,
}

/// One payload for the whole roster. Every student is a recipient; relevance is not judged here.
pub fn build_notification_payload(
    job: &Job,
    company_name: &str,
    students: &[CandidateProfile],
) -> NotificationPayload {
    let recipients = students
        .iter()
        .map(|student| NotificationRecipient {
            name: student.name().to_string(),
            email: student.email().to_string(),
            education_level: student.education_level(),
            experience_range: student.experience_bucket(),
            skills: student.skills().to_vec(),
        })
        .collect();

    NotificationPayload {
        job: JobSummary {
            id: job.id.clone(),
            title: job.title.clone(),
            company_name: company_name.to_string(),
            location: job.location.clone(),
            job_type: job.job_type,
            salary_range: job.salary_range.clone(),
        },
        recipients,
    }
}

/// Outbound seam to the external mail API.
pub trait NotificationDispatcher: Send + Sync {
    fn dispatch(&self, payload: &NotificationPayload) -> Result<(), DispatchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Final state of a fan-out attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered { recipients: usize },
    Skipped { reason: &'static str },
    Failed { reason: String },
}

/// Handle on a detached fan-out. Dropping it leaves the delivery running in the background.
#[derive(Debug)]
pub struct NotificationHandle {
    inner: HandleState,
}

#[derive(Debug)]
enum HandleState {
    Running(thread::JoinHandle<DeliveryStatus>),
    Finished(DeliveryStatus),
}

impl NotificationHandle {
    pub fn skipped(reason: &'static str) -> Self {
        Self {
            inner: HandleState::Finished(DeliveryStatus::Skipped { reason }),
        }
    }

    /// Block until the attempt finishes. Meant for tests and the CLI.
    pub fn wait(self) -> DeliveryStatus {
        match self.inner {
            HandleState::Finished(status) => status,
            HandleState::Running(handle) => handle.join().unwrap_or_else(|_| DeliveryStatus::Failed {
                reason: "notification worker panicked".to_string(),
            }),
        }
    }
}

/// Deliver `payload` once on a background thread.
pub fn spawn_fan_out(
    dispatcher: Arc<dyn NotificationDispatcher>,
    payload: NotificationPayload,
) -> NotificationHandle {
    if payload.recipients.is_empty() {
        info!(job_id = %payload.job.id, "no students to notify");
        return NotificationHandle::skipped("no recipients");
    }

    let job_id = payload.job.id.clone();
    spawn_worker(&job_id, move || deliver(dispatcher.as_ref(), &payload))
}

/// Announce `job` to the whole roster. Loading the students, resolving their profiles and
/// building the payload all happen on the worker thread; this returns immediately.
pub fn spawn_roster_fan_out<C>(
    candidates: Arc<C>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    job: Job,
    company_name: String,
    today: NaiveDate,
) -> NotificationHandle
where
    C: CandidateRepository + 'static,
{
    let job_id = job.id.clone();
    spawn_worker(&job_id, move || {
        let students = match candidates.list() {
            Ok(students) => CandidateProfile::resolve_all(students, today),
            Err(err) => {
                warn!(job_id = %job.id, error = %err, "unable to load students for job notification");
                return DeliveryStatus::Skipped {
                    reason: "student roster unavailable",
                };
            }
        };

        let payload = build_notification_payload(&job, &company_name, &students);
        if payload.recipients.is_empty() {
            info!(job_id = %job.id, "no students to notify");
            return DeliveryStatus::Skipped {
                reason: "no recipients",
            };
        }
        deliver(dispatcher.as_ref(), &payload)
    })
}

fn spawn_worker<F>(job_id: &JobId, work: F) -> NotificationHandle
where
    F: FnOnce() -> DeliveryStatus + Send + 'static,
{
    let spawned = thread::Builder::new()
        .name(format!("notify-{job_id}"))
        .spawn(work);

    match spawned {
        Ok(handle) => NotificationHandle {
            inner: HandleState::Running(handle),
        },
        Err(err) => {
            warn!(%job_id, error = %err, "unable to start notification worker");
            NotificationHandle {
                inner: HandleState::Finished(DeliveryStatus::Failed {
                    reason: err.to_string(),
                }),
            }
        }
    }
}

fn deliver(dispatcher: &dyn NotificationDispatcher, payload: &NotificationPayload) -> DeliveryStatus {
    let recipients = payload.recipients.len();
    match dispatcher.dispatch(payload) {
        Ok(()) => {
            info!(job_id = %payload.job.id, recipients, "job notification delivered");
            DeliveryStatus::Delivered { recipients }
        }
        Err(err) => {
            warn!(job_id = %payload.job.id, recipients, error = %err, "job notification failed");
            DeliveryStatus::Failed {
                reason: err.to_string(),
            }
        }
    }
}
