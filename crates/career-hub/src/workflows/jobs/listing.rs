use serde::{Deserialize, Serialize};

use super::domain::Job;
use crate::workflows::talent::Selection;

/// Selections on the job listings board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilterCriteria {
    pub search_text: String,
    #[serde(alias = "jobTypeFilter", alias = "type")]
    pub job_type: Selection,
    #[serde(alias = "officeTypeFilter")]
    pub office_type: Selection,
    #[serde(alias = "locationFilter")]
    pub location: Selection,
}

impl JobFilterCriteria {
    pub fn matches(&self, job: &Job) -> bool {
        self.matches_search(job)
            && self.job_type.accepts(job.job_type.map(|job_type| job_type.label()))
            && self.office_type.accepts(job.office_type.as_deref())
            && self.location.accepts(Some(job.location.as_str()))
    }

    fn matches_search(&self, job: &Job) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        contains(&job.title)
            || contains(&job.description)
            || contains(&job.location)
            || job.skills.iter().any(|skill| contains(skill))
    }
}

/// Stable filter over postings; newest first ordering is left to the caller.
pub fn filter_jobs(jobs: &[Job], criteria: &JobFilterCriteria) -> Vec<Job> {
    jobs.iter()
        .filter(|job| criteria.matches(job))
        .cloned()
        .collect()
}

/// Newest postings first; undated postings sink to the end. Ties keep their input order.
pub fn sort_newest_first(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
