use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::EducationEntry;

/// Highest credential attained. Variant order is rank order, lowest first, so `max` picks the
/// highest level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EducationLevel {
    #[default]
    NotSpecified,
    Certificate,
    Diploma,
    Bachelors,
    Masters,
    Phd,
}

/// Keyword table checked from the highest rank down. A keyword matches the start of a word,
/// with dots removed first, so "bs" covers "BS", "BSc" and "B.Sc.".
const DEGREE_KEYWORDS: &[(EducationLevel, &[&str])] = &[
    (EducationLevel::Phd, &["phd", "doctor"]),
    (EducationLevel::Masters, &["master"]),
    (EducationLevel::Bachelors, &["bachelor", "bs"]),
    (EducationLevel::Diploma, &["diploma"]),
    (EducationLevel::Certificate, &["certificate"]),
];

impl EducationLevel {
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::Phd,
        EducationLevel::Masters,
        EducationLevel::Bachelors,
        EducationLevel::Diploma,
        EducationLevel::Certificate,
        EducationLevel::NotSpecified,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::Phd => "PhD",
            EducationLevel::Masters => "Master's",
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Certificate => "Certificate",
            EducationLevel::NotSpecified => "Not specified",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value))
    }

    /// Classify a free-text degree name.
    pub fn from_degree(degree: &str) -> Self {
        let degree = degree.to_lowercase();
        let words: Vec<String> = degree
            .split(|c: char| !c.is_alphanumeric() && c != '.')
            .map(|word| word.replace('.', ""))
            .filter(|word| !word.is_empty())
            .collect();
        DEGREE_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| words.iter().any(|word| word.starts_with(keyword)))
            })
            .map(|(level, _)| *level)
            .unwrap_or(EducationLevel::NotSpecified)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for EducationLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for EducationLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_label(&raw).unwrap_or_else(|| Self::from_degree(&raw)))
    }
}

pub fn resolve_education_level(entries: &[EducationEntry]) -> EducationLevel {
    entries
        .iter()
        .map(|entry| EducationLevel::from_degree(&entry.degree))
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(degree: &str) -> EducationEntry {
        EducationEntry {
            school: "Westbrook College".to_string(),
            degree: degree.to_string(),
            field_of_study: "Accounting".to_string(),
            graduation_year: Some(2022),
            is_current: false,
        }
    }

    #[test]
    fn highest_level_wins_regardless_of_order() {
        let entries = [entry("Certificate"), entry("PhD"), entry("Diploma")];
        assert_eq!(resolve_education_level(&entries), EducationLevel::Phd);
    }

    #[test]
    fn keywords_match_case_insensitively() {
        assert_eq!(
            EducationLevel::from_degree("Doctor of Philosophy"),
            EducationLevel::Phd
        );
        assert_eq!(
            EducationLevel::from_degree("MASTER OF SCIENCE"),
            EducationLevel::Masters
        );
        assert_eq!(
            EducationLevel::from_degree("B.Sc. Chemistry"),
            EducationLevel::Bachelors
        );
        assert_eq!(EducationLevel::from_degree("BS Nursing"), EducationLevel::Bachelors);
        assert_eq!(
            EducationLevel::from_degree("Advanced Diploma"),
            EducationLevel::Diploma
        );
        assert_eq!(
            EducationLevel::from_degree("Certificate IV"),
            EducationLevel::Certificate
        );
        assert_eq!(
            EducationLevel::from_degree("High School"),
            EducationLevel::NotSpecified
        );
    }

    #[test]
    fn keywords_only_match_at_word_start() {
        assert_eq!(
            EducationLevel::from_degree("Jobs Readiness Certificate"),
            EducationLevel::Certificate
        );
        assert_eq!(
            EducationLevel::from_degree("Graduate Diploma in Labs Management"),
            EducationLevel::Diploma
        );
        assert_eq!(
            EducationLevel::from_degree("B.Sc. Physics"),
            EducationLevel::Bachelors
        );
        assert_eq!(EducationLevel::from_degree("Ph.D."), EducationLevel::Phd);
        assert_eq!(
            EducationLevel::from_degree("Masters (Research)"),
            EducationLevel::Masters
        );
    }

    #[test]
    fn empty_input_is_not_specified() {
        assert_eq!(resolve_education_level(&[]), EducationLevel::NotSpecified);
        assert_eq!(
            resolve_education_level(&[entry("")]),
            EducationLevel::NotSpecified
        );
    }

    #[test]
    fn ranking_follows_declared_order() {
        assert!(EducationLevel::Phd > EducationLevel::Masters);
        assert!(EducationLevel::Masters > EducationLevel::Bachelors);
        assert!(EducationLevel::Bachelors > EducationLevel::Diploma);
        assert!(EducationLevel::Diploma > EducationLevel::Certificate);
        assert!(EducationLevel::Certificate > EducationLevel::NotSpecified);
    }
}
