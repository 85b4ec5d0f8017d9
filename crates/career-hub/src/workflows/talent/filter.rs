use serde::{Deserialize, Serialize};

use super::domain::CandidateProfile;

/// A single dropdown selection: either the "All" sentinel or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// `All` accepts anything, including a missing value. A concrete selection rejects a missing
    /// value and otherwise compares case-insensitively.
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => {
                value.is_some_and(|value| value.trim().eq_ignore_ascii_case(expected))
            }
        }
    }

    /// Exact, case-sensitive comparison for fixed label sets.
    pub fn accepts_exact(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => value == expected,
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(trimmed.to_string())
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Option<String>> for Selection {
    fn from(value: Option<String>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => "All".to_string(),
            Selection::Only(value) => value,
        }
    }
}

/// Transient filter selections held by the talent search view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_text: String,
    #[serde(alias = "statusFilter")]
    pub status: Selection,
    #[serde(alias = "experienceFilter")]
    pub experience: Selection,
    #[serde(alias = "specializationFilter")]
    pub specialization: Selection,
    #[serde(alias = "educationLevelFilter")]
    pub education_level: Selection,
    #[serde(alias = "jobTypeFilter")]
    pub job_type: Selection,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.status.is_all()
            && self.experience.is_all()
            && self.specialization.is_all()
            && self.education_level.is_all()
            && self.job_type.is_all()
    }

    pub fn matches(&self, profile: &CandidateProfile) -> bool {
        self.matches_search(profile)
            && self.status.accepts(Some(profile.student_status().label()))
            && self
                .experience
                .accepts_exact(profile.experience_bucket().label())
            && self.specialization.accepts(profile.specialization())
            && self
                .education_level
                .accepts(Some(profile.education_level().label()))
            && self
                .job_type
                .accepts(profile.job_type().map(|job_type| job_type.label()))
    }

    fn matches_search(&self, profile: &CandidateProfile) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        contains(profile.name())
            || profile.education_terms().any(contains)
            || profile.university().is_some_and(contains)
            || profile.skills().iter().any(|skill| contains(skill))
    }
}

/// Keep the candidates satisfying every active criterion, preserving input order.
pub fn filter_candidates(
    candidates: &[CandidateProfile],
    criteria: &FilterCriteria,
) -> Vec<CandidateProfile> {
    candidates
        .iter()
        .filter(|profile| criteria.matches(profile))
        .cloned()
        .collect()
}
