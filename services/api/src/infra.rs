use career_hub::error::AppError;
use career_hub::workflows::dashboard::DashboardLoader;
use career_hub::workflows::feed::{normalize_feed, FeedItem, FeedSource};
use career_hub::workflows::jobs::{
    Company, CompanyId, DispatchError, Job, JobId, JobRepository, NotificationDispatcher,
    NotificationPayload,
};
use career_hub::workflows::sources::decode_collection;
use career_hub::workflows::talent::{Candidate, CandidateId, CandidateRepository, RepositoryError};
use chrono::{Months, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

pub(crate) type Dashboard =
    DashboardLoader<InMemoryCandidateRepository, InMemoryJobRepository, InMemoryFeedSource>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dashboard: Arc<Dashboard>,
    pub(crate) feed: Arc<InMemoryFeedSource>,
    pub(crate) page_size: usize,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRepository {
    records: Arc<Mutex<Vec<Candidate>>>,
}

impl InMemoryCandidateRepository {
    pub(crate) fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            records: Arc::new(Mutex::new(candidates)),
        }
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("candidate mutex poisoned");
        Ok(guard.clone())
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("candidate mutex poisoned");
        Ok(guard.iter().find(|candidate| &candidate.id == id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryJobRepository {
    jobs: Arc<Mutex<BTreeMap<JobId, Job>>>,
    companies: Arc<Vec<Company>>,
}

impl InMemoryJobRepository {
    pub(crate) fn new(companies: Vec<Company>, jobs: Vec<Job>) -> Self {
        let jobs = jobs.into_iter().map(|job| (job.id.clone(), job)).collect();
        Self {
            jobs: Arc::new(Mutex::new(jobs)),
            companies: Arc::new(companies),
        }
    }
}

impl JobRepository for InMemoryJobRepository {
    fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut guard = self.jobs.lock().expect("job mutex poisoned");
        if guard.contains_key(&job.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(job.id.clone(), job.clone());
        Ok(job)
    }

    fn list(&self) -> Result<Vec<Job>, RepositoryError> {
        let guard = self.jobs.lock().expect("job mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let guard = self.jobs.lock().expect("job mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
        Ok(self.companies.iter().find(|company| &company.id == id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFeedSource {
    news: Value,
    videos: Value,
}

impl InMemoryFeedSource {
    pub(crate) fn new(news: Value, videos: Value) -> Self {
        Self { news, videos }
    }

    pub(crate) fn items(&self) -> Vec<FeedItem> {
        normalize_feed(self.news.clone(), self.videos.clone())
    }
}

impl FeedSource for InMemoryFeedSource {
    fn news(&self) -> Result<Value, RepositoryError> {
        Ok(self.news.clone())
    }

    fn videos(&self) -> Result<Value, RepositoryError> {
        Ok(self.videos.clone())
    }
}

/// Stand-in for the email relay: logs each announcement and keeps it for inspection.
#[derive(Default, Clone)]
pub(crate) struct LoggingNotificationDispatcher {
    sent: Arc<Mutex<Vec<NotificationPayload>>>,
}

impl NotificationDispatcher for LoggingNotificationDispatcher {
    fn dispatch(&self, payload: &NotificationPayload) -> Result<(), DispatchError> {
        info!(
            job_id = %payload.job.id,
            company = %payload.job.company_name,
            recipients = payload.recipients.len(),
            "new job announcement relayed"
        );
        let mut guard = self.sent.lock().expect("dispatcher mutex poisoned");
        guard.push(payload.clone());
        Ok(())
    }
}

impl LoggingNotificationDispatcher {
    pub(crate) fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.lock().expect("dispatcher mutex poisoned").clone()
    }
}

/// Collections used to hydrate the in-memory adapters.
#[derive(Debug, Clone, Default)]
pub(crate) struct Seed {
    pub(crate) students: Vec<Candidate>,
    pub(crate) companies: Vec<Company>,
    pub(crate) jobs: Vec<Job>,
    pub(crate) news: Value,
    pub(crate) videos: Value,
}

impl Seed {
    /// Accepts either a seed object keyed by collection or a bare array of students.
    pub(crate) fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => {
                let mut take = |key: &str| map.remove(key).unwrap_or(Value::Null);
                Self {
                    students: decode_collection(take("students"), &["students"]),
                    companies: decode_collection(take("companies"), &["companies"]),
                    jobs: decode_collection(take("jobs"), &["jobs"]),
                    news: take("news"),
                    videos: take("videos"),
                }
            }
            other => Self {
                students: decode_collection(other, &["students"]),
                ..Self::default()
            },
        }
    }

    pub(crate) fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw)?;
        Ok(Self::from_value(value))
    }

    /// Built-in sample data. Experience dates are relative to `today` so buckets stay stable.
    pub(crate) fn sample(today: NaiveDate) -> Self {
        let months_ago = |months: u32| {
            today
                .checked_sub_months(Months::new(months))
                .unwrap_or(today)
                .format("%Y-%m-%d")
                .to_string()
        };
        let today_label = today.format("%Y-%m-%d").to_string();

        Self::from_value(json!({
            "students": [
                {
                    "id": "stu-001",
                    "name": "Aroha Ngata",
                    "email": "aroha.ngata@example.edu",
                    "skills": "Excel, SQL",
                    "education": [{ "school": "Harbour University", "degree": "Bachelor of Commerce",
                                    "fieldOfStudy": "Accounting", "isCurrent": true }],
                    "experience": [],
                    "jobType": "Internship"
                },
                {
                    "id": "stu-002",
                    "name": "Ben Okafor",
                    "email": "ben.okafor@example.edu",
                    "skills": ["Python", "Tableau"],
                    "education": [{ "school": "Harbour University", "degree": "Diploma in Data Analytics",
                                    "fieldOfStudy": "Data Analytics" }],
                    "experience": [{ "title": "Data intern", "company": "Kea Insights",
                                     "startDate": months_ago(8), "endDate": today_label }],
                    "jobType": "Part-time"
                },
                {
                    "id": "stu-003",
                    "name": "Chen Wei",
                    "email": "chen.wei@example.edu",
                    "skills": ["Java", "Kotlin"],
                    "education": [{ "school": "Southern Institute of Technology",
                                    "degree": "Bachelor of Engineering", "fieldOfStudy": "Software Engineering" }],
                    "experience": [{ "title": "Junior developer", "company": "Fern Apps",
                                     "startDate": months_ago(20), "isCurrent": true }],
                    "jobType": "Full-time"
                },
                {
                    "id": "stu-004",
                    "name": "Dana Murphy",
                    "email": "dana.murphy@example.edu",
                    "skills": ["Rust", "Kubernetes"],
                    "education": [{ "school": "Harbour University", "degree": "Master of Science",
                                    "fieldOfStudy": "Computer Science" }],
                    "experience": [{ "title": "Platform engineer", "company": "Tui Systems",
                                     "startDate": months_ago(40), "isCurrent": true }],
                    "jobType": "Full-time"
                },
                {
                    "id": "stu-005",
                    "name": "Eru Walker",
                    "email": "eru.walker@example.edu",
                    "skills": ["Statistics", "R"],
                    "education": [{ "school": "Harbour University", "degree": "PhD in Statistics",
                                    "fieldOfStudy": "Statistics" }],
                    "experience": [{ "title": "Research fellow", "company": "Harbour University",
                                     "startDate": months_ago(70), "isCurrent": true }],
                    "jobType": "Contract"
                }
            ],
            "companies": [
                { "id": "co-001", "name": "Tui Systems" },
                { "id": "co-002", "name": "Kea Insights" }
            ],
            "jobs": [
                { "id": "job-seed-1", "title": "Graduate Platform Engineer", "type": "Full-time",
                  "location": "Wellington", "officeType": "Hybrid", "companyId": "co-001",
                  "skills": ["Rust", "Linux"], "createdAt": months_ago(1) }
            ],
            "news": [
                { "id": "news-1", "title": "Career fair registrations open",
                  "content": "Meet over 40 employers on campus.", "createdAt": months_ago(0) }
            ],
            "videos": [
                { "id": "vid-1", "title": "Interview preparation in 10 minutes",
                  "videoUrl": "https://media.example.edu/interview-prep", "createdAt": months_ago(2) }
            ]
        }))
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
