//! Initial dashboard load.
//!
//! The student, job and feed collections are independent, so they are fetched concurrently on
//! the blocking pool. A failed fetch never fails the load; that collection is simply empty.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tokio::task::{spawn_blocking, JoinError};
use tracing::{info, warn};

use crate::workflows::feed::{normalize_feed, FeedItem, FeedSource};
use crate::workflows::jobs::listing::sort_newest_first;
use crate::workflows::jobs::{Job, JobRepository};
use crate::workflows::sources::or_empty;
use crate::workflows::talent::{CandidateProfile, CandidateRepository, RepositoryError};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub candidates: Vec<CandidateProfile>,
    pub jobs: Vec<Job>,
    pub feed: Vec<FeedItem>,
}

pub struct DashboardLoader<C, J, F> {
    candidates: Arc<C>,
    jobs: Arc<J>,
    feed: Arc<F>,
}

impl<C, J, F> DashboardLoader<C, J, F>
where
    C: CandidateRepository + 'static,
    J: JobRepository + 'static,
    F: FeedSource + 'static,
{
    pub fn new(candidates: Arc<C>, jobs: Arc<J>, feed: Arc<F>) -> Self {
        Self {
            candidates,
            jobs,
            feed,
        }
    }

    /// Resolves once every fetch has finished, successfully or not.
    pub async fn load(&self, today: NaiveDate) -> DashboardSnapshot {
        let candidates = Arc::clone(&self.candidates);
        let jobs = Arc::clone(&self.jobs);
        let feed = Arc::clone(&self.feed);

        let (candidates, jobs, feed) = tokio::join!(
            spawn_blocking(move || candidates.list()),
            spawn_blocking(move || jobs.list()),
            spawn_blocking(move || load_feed(&*feed)),
        );

        let candidates = CandidateProfile::resolve_all(
            or_empty(flatten(candidates), "candidates"),
            today,
        );
        let mut jobs = or_empty(flatten(jobs), "jobs");
        sort_newest_first(&mut jobs);
        let feed = feed.unwrap_or_else(|err| {
            warn!(error = %err, "feed task did not complete");
            Vec::new()
        });

        info!(
            candidates = candidates.len(),
            jobs = jobs.len(),
            feed = feed.len(),
            "dashboard loaded"
        );

        DashboardSnapshot {
            candidates,
            jobs,
            feed,
        }
    }
}

fn flatten<T>(
    joined: Result<Result<Vec<T>, RepositoryError>, JoinError>,
) -> Result<Vec<T>, RepositoryError> {
    joined.unwrap_or_else(|err| Err(RepositoryError::Unavailable(err.to_string())))
}

fn load_feed<F: FeedSource + ?Sized>(source: &F) -> Vec<FeedItem> {
    let news = source.news().unwrap_or_else(|err| {
        warn!(collection = "news", error = %err, "collection fetch failed; continuing with empty list");
        Value::Null
    });
    let videos = source.videos().unwrap_or_else(|err| {
        warn!(collection = "videos", error = %err, "collection fetch failed; continuing with empty list");
        Value::Null
    });
    normalize_feed(news, videos)
}
