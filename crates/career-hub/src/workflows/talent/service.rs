use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{CandidateId, CandidateProfile, CandidateSummaryView};
use super::filter::{filter_candidates, FilterCriteria};
use super::profile::{profile_completion, ProfileCompletion};
use super::repository::{CandidateRepository, RepositoryError};
use crate::workflows::pagination::{paginate, Page};
use crate::workflows::sources::or_empty;

/// Criteria plus the page the caller is currently on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentSearchRequest {
    #[serde(flatten)]
    pub criteria: FilterCriteria,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentSearchPage {
    #[serde(flatten)]
    pub page: Page<CandidateSummaryView>,
    /// Size of the unfiltered roster the page was drawn from.
    pub roster_size: usize,
}

/// Service behind the talent search and applicant views.
pub struct TalentSearchService<R> {
    repository: Arc<R>,
    default_page_size: usize,
}

impl<R> TalentSearchService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>, default_page_size: usize) -> Self {
        Self {
            repository,
            default_page_size: default_page_size.max(1),
        }
    }

    /// Current roster resolved for `today`. A failed fetch yields an empty roster.
    pub fn roster(&self, today: NaiveDate) -> Vec<CandidateProfile> {
        let candidates = or_empty(self.repository.list(), "candidates");
        CandidateProfile::resolve_all(candidates, today)
    }

    pub fn search(&self, request: &TalentSearchRequest, today: NaiveDate) -> TalentSearchPage {
        let roster = self.roster(today);
        let matches = filter_candidates(&roster, &request.criteria);
        let page_size = request.page_size.unwrap_or(self.default_page_size);
        let page = paginate(&matches, page_size, request.page.unwrap_or(1));

        debug!(
            roster = roster.len(),
            matches = matches.len(),
            page = page.page_number,
            "talent search evaluated"
        );

        TalentSearchPage {
            page: page.map(|profile| profile.summary_view()),
            roster_size: roster.len(),
        }
    }

    pub fn completion(&self, id: &CandidateId) -> Result<ProfileCompletion, TalentServiceError> {
        let candidate = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(profile_completion(&candidate))
    }
}

/// Error raised by the talent search service.
#[derive(Debug, thiserror::Error)]
pub enum TalentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
