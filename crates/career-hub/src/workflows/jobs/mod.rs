//! Job postings: the job board filter, posting creation and the new-job notification fan-out.

pub mod domain;
pub mod listing;
pub mod notification;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{Company, CompanyId, Job, JobDraft, JobId};
pub use listing::{filter_jobs, JobFilterCriteria};
pub use notification::{
    build_notification_payload, spawn_fan_out, spawn_roster_fan_out, DeliveryStatus,
    DispatchError, JobSummary, NotificationDispatcher, NotificationHandle, NotificationPayload,
    NotificationRecipient,
};
pub use repository::JobRepository;
pub use router::job_router;
pub use service::{JobCreated, JobPostingService, JobSearchRequest, JobServiceError};
