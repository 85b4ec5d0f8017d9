use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::workflows::sources::{empty_string_as_none, lenient_date, string_or_list};
use crate::workflows::talent::JobType;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub String);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employer record; only the fields the job views need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    #[serde(default)]
    pub name: String,
}

/// Published job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub office_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub salary_range: Option<String>,
    #[serde(
        default,
        rename = "type",
        alias = "jobType",
        deserialize_with = "JobType::deserialize_lenient"
    )]
    pub job_type: Option<JobType>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub qualifications: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub benefits: Option<String>,
    pub company_id: CompanyId,
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<NaiveDate>,
}

/// Employer input for a new posting; the id and creation date are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub office_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub salary_range: Option<String>,
    #[serde(
        default,
        rename = "type",
        alias = "jobType",
        deserialize_with = "JobType::deserialize_lenient"
    )]
    pub job_type: Option<JobType>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub qualifications: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub benefits: Option<String>,
    pub company_id: CompanyId,
}

impl JobDraft {
    pub fn into_job(self, id: JobId, created_at: NaiveDate) -> Job {
        Job {
            id,
            title: self.title.trim().to_string(),
            description: self.description,
            location: self.location.trim().to_string(),
            office_type: self.office_type,
            salary_range: self.salary_range,
            job_type: self.job_type,
            qualifications: self.qualifications,
            skills: self.skills,
            benefits: self.benefits,
            company_id: self.company_id,
            created_at: Some(created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_posting_with_type_field_and_comma_skills() {
        let job: Job = serde_json::from_value(json!({
            "id": "job-7",
            "title": "Junior Data Analyst",
            "location": "Remote",
            "type": "Part time",
            "skills": "SQL, Tableau",
            "salaryRange": "",
            "companyId": "co-3",
            "createdAt": "2025-05-20T08:00:00Z"
        }))
        .expect("job decodes");

        assert_eq!(job.job_type, Some(JobType::PartTime));
        assert_eq!(job.skills, vec!["SQL".to_string(), "Tableau".to_string()]);
        assert_eq!(job.salary_range, None);
        assert_eq!(job.created_at, NaiveDate::from_ymd_opt(2025, 5, 20));
    }

    #[test]
    fn draft_conversion_trims_and_stamps() {
        let draft: JobDraft = serde_json::from_value(json!({
            "title": "  Graduate Engineer ",
            "companyId": "co-1"
        }))
        .expect("draft decodes");
        let created = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid");

        let job = draft.into_job(JobId("job-1".to_string()), created);
        assert_eq!(job.title, "Graduate Engineer");
        assert_eq!(job.created_at, Some(created));
        assert_eq!(job.job_type, None);
    }
}
