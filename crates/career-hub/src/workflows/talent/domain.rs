use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::education::{resolve_education_level, EducationLevel};
use super::experience::{bucket_for_months, total_experience_months, ExperienceBucket};
use crate::workflows::sources::{empty_string_as_none, lenient_date, lenient_list, string_or_list};

/// Identifier wrapper for student / job-seeker records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Student record as returned by the persistence API.
///
/// Sub-collections default to empty and malformed dates decode to `None`, so a partially filled
/// profile never fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(
        default,
        alias = "status",
        deserialize_with = "StudentStatus::deserialize_lenient"
    )]
    pub student_status: Option<StudentStatus>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub specialization: Option<String>,
    #[serde(
        default,
        alias = "preferredJobType",
        deserialize_with = "JobType::deserialize_lenient"
    )]
    pub job_type: Option<JobType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, alias = "university")]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default, alias = "specialization")]
    pub field_of_study: String,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    /// Ignored when `is_current` is set.
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentStatus {
    Student,
    Alumni,
}

impl StudentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            StudentStatus::Student => "Student",
            StudentStatus::Alumni => "Alumni",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" | "current" => Some(Self::Student),
            "alumni" | "alumnus" | "alumna" | "graduate" => Some(Self::Alumni),
            _ => None,
        }
    }

    fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = empty_string_as_none(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse))
    }
}

/// Employment arrangement a student is looking for, or a job is offered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    Internship,
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::Internship,
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            JobType::Internship => "Internship",
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "internship" | "intern" => Some(Self::Internship),
            "fulltime" => Some(Self::FullTime),
            "parttime" => Some(Self::PartTime),
            "contract" | "contractor" => Some(Self::Contract),
            _ => None,
        }
    }

    pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = empty_string_as_none(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse))
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable snapshot of a candidate with every derived attribute resolved for a given day.
///
/// Derived values are only reachable through accessors; changing education or experience means
/// resolving a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    candidate: Candidate,
    student_status: StudentStatus,
    education_level: EducationLevel,
    experience_months: u32,
    experience_bucket: ExperienceBucket,
    specialization: Option<String>,
    university: Option<String>,
}

impl CandidateProfile {
    pub fn resolve(candidate: Candidate, today: NaiveDate) -> Self {
        let student_status = candidate.student_status.unwrap_or_else(|| {
            if candidate.education.iter().any(|entry| entry.is_current) {
                StudentStatus::Student
            } else {
                StudentStatus::Alumni
            }
        });
        let education_level = resolve_education_level(&candidate.education);
        let experience_months = total_experience_months(&candidate.experience, today);
        let experience_bucket = bucket_for_months(experience_months);

        let primary_education = candidate
            .education
            .iter()
            .find(|entry| entry.is_current)
            .or_else(|| candidate.education.first());
        let specialization = candidate.specialization.clone().or_else(|| {
            primary_education
                .map(|entry| entry.field_of_study.trim().to_string())
                .filter(|field| !field.is_empty())
        });
        let university = primary_education
            .map(|entry| entry.school.trim().to_string())
            .filter(|school| !school.is_empty());

        Self {
            candidate,
            student_status,
            education_level,
            experience_months,
            experience_bucket,
            specialization,
            university,
        }
    }

    pub fn resolve_all(candidates: Vec<Candidate>, today: NaiveDate) -> Vec<Self> {
        candidates
            .into_iter()
            .map(|candidate| Self::resolve(candidate, today))
            .collect()
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn id(&self) -> &CandidateId {
        &self.candidate.id
    }

    pub fn name(&self) -> &str {
        &self.candidate.name
    }

    pub fn email(&self) -> &str {
        &self.candidate.email
    }

    pub fn skills(&self) -> &[String] {
        &self.candidate.skills
    }

    pub fn job_type(&self) -> Option<JobType> {
        self.candidate.job_type
    }

    pub fn student_status(&self) -> StudentStatus {
        self.student_status
    }

    pub fn education_level(&self) -> EducationLevel {
        self.education_level
    }

    pub fn experience_months(&self) -> u32 {
        self.experience_months
    }

    pub fn experience_bucket(&self) -> ExperienceBucket {
        self.experience_bucket
    }

    pub fn specialization(&self) -> Option<&str> {
        self.specialization.as_deref()
    }

    pub fn university(&self) -> Option<&str> {
        self.university.as_deref()
    }

    /// Every field of study and school on record, for free-text search.
    pub(crate) fn education_terms(&self) -> impl Iterator<Item = &str> {
        self.candidate
            .education
            .iter()
            .flat_map(|entry| [entry.field_of_study.as_str(), entry.school.as_str()])
            .chain(self.specialization.as_deref())
    }

    pub fn summary_view(&self) -> CandidateSummaryView {
        CandidateSummaryView {
            id: self.candidate.id.clone(),
            name: self.candidate.name.clone(),
            email: self.candidate.email.clone(),
            skills: self.candidate.skills.clone(),
            student_status: self.student_status.label(),
            education_level: self.education_level.label(),
            experience_range: self.experience_bucket.label(),
            specialization: self.specialization.clone(),
            university: self.university.clone(),
            job_type: self.candidate.job_type.map(JobType::label),
        }
    }
}

/// Row shown in the talent search table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummaryView {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub student_status: &'static str,
    pub education_level: &'static str,
    pub experience_range: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<&'static str>,
}
