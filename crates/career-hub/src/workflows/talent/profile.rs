use serde::Serialize;

use super::domain::Candidate;

/// Weighted sections of a student profile. Weights sum to 100.
const SECTION_WEIGHTS: &[(ProfileSection, u32)] = &[
    (ProfileSection::Contact, 20),
    (ProfileSection::Education, 20),
    (ProfileSection::Experience, 20),
    (ProfileSection::Skills, 20),
    (ProfileSection::Specialization, 10),
    (ProfileSection::JobType, 10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    Contact,
    Education,
    Experience,
    Skills,
    Specialization,
    JobType,
}

impl ProfileSection {
    pub const fn label(self) -> &'static str {
        match self {
            ProfileSection::Contact => "Contact details",
            ProfileSection::Education => "Education",
            ProfileSection::Experience => "Work experience",
            ProfileSection::Skills => "Skills",
            ProfileSection::Specialization => "Specialization",
            ProfileSection::JobType => "Preferred job type",
        }
    }

    fn is_complete(self, candidate: &Candidate) -> bool {
        match self {
            ProfileSection::Contact => {
                !candidate.name.trim().is_empty() && candidate.email.contains('@')
            }
            ProfileSection::Education => candidate
                .education
                .iter()
                .any(|entry| !entry.school.trim().is_empty() && !entry.degree.trim().is_empty()),
            ProfileSection::Experience => candidate
                .experience
                .iter()
                .any(|entry| entry.start_date.is_some()),
            ProfileSection::Skills => !candidate.skills.is_empty(),
            ProfileSection::Specialization => {
                candidate.specialization.is_some()
                    || candidate
                        .education
                        .iter()
                        .any(|entry| !entry.field_of_study.trim().is_empty())
            }
            ProfileSection::JobType => candidate.job_type.is_some(),
        }
    }
}

/// How much of a student profile has been filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCompletion {
    pub percentage: u8,
    pub missing_sections: Vec<ProfileSection>,
}

impl ProfileCompletion {
    pub fn is_complete(&self) -> bool {
        self.missing_sections.is_empty()
    }

    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing_sections
            .iter()
            .map(|section| section.label())
            .collect()
    }
}

pub fn profile_completion(candidate: &Candidate) -> ProfileCompletion {
    let total: u32 = SECTION_WEIGHTS.iter().map(|(_, weight)| weight).sum();
    let mut earned = 0u32;
    let mut missing_sections = Vec::new();

    for (section, weight) in SECTION_WEIGHTS {
        if section.is_complete(candidate) {
            earned += weight;
        } else {
            missing_sections.push(*section);
        }
    }

    let percentage = ((earned * 100 + total / 2) / total.max(1)).min(100) as u8;

    ProfileCompletion {
        percentage,
        missing_sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_profile_lists_every_section() {
        let candidate: Candidate =
            serde_json::from_value(json!({ "id": "stu-10" })).expect("decodes");
        let completion = profile_completion(&candidate);
        assert_eq!(completion.percentage, 0);
        assert_eq!(completion.missing_sections.len(), SECTION_WEIGHTS.len());
    }

    #[test]
    fn partially_filled_profile_is_weighted() {
        let candidate: Candidate = serde_json::from_value(json!({
            "id": "stu-11",
            "name": "Priya Raman",
            "email": "priya@example.edu",
            "skills": ["Excel"],
            "education": [{ "school": "Eastgate University", "degree": "Bachelor of Commerce", "fieldOfStudy": "Finance" }]
        }))
        .expect("decodes");

        let completion = profile_completion(&candidate);
        assert_eq!(completion.percentage, 70);
        assert_eq!(
            completion.missing_sections,
            vec![ProfileSection::Experience, ProfileSection::JobType]
        );
        assert_eq!(
            completion.missing_labels(),
            vec!["Work experience", "Preferred job type"]
        );
        assert!(!completion.is_complete());
    }
}
