use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::ExperienceEntry;

/// Coarse work-experience range used by the talent filters.
///
/// Ordered from least to most experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExperienceBucket {
    LessThanOneYear,
    OneToTwoYears,
    ThreeToFiveYears,
    FivePlusYears,
}

impl ExperienceBucket {
    pub const ALL: [ExperienceBucket; 4] = [
        ExperienceBucket::LessThanOneYear,
        ExperienceBucket::OneToTwoYears,
        ExperienceBucket::ThreeToFiveYears,
        ExperienceBucket::FivePlusYears,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceBucket::LessThanOneYear => "Less than 1 year",
            ExperienceBucket::OneToTwoYears => "1-2 years",
            ExperienceBucket::ThreeToFiveYears => "3-5 years",
            ExperienceBucket::FivePlusYears => "5+ years",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for ExperienceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ExperienceBucket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ExperienceBucket {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_label(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown experience range '{raw}'")))
    }
}

/// Whole calendar months elapsed from `start` to `end`, never negative.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Months contributed by one entry. Current roles run until `today`; entries with a missing
/// start, or a missing end on a finished role, contribute nothing.
pub fn entry_months(entry: &ExperienceEntry, today: NaiveDate) -> u32 {
    let Some(start) = entry.start_date else {
        return 0;
    };
    let end = if entry.is_current {
        today
    } else {
        match entry.end_date {
            Some(end) => end,
            None => return 0,
        }
    };
    months_between(start, end)
}

/// Sum of every entry's months. Overlapping periods are counted once per entry.
pub fn total_experience_months(entries: &[ExperienceEntry], today: NaiveDate) -> u32 {
    entries
        .iter()
        .map(|entry| entry_months(entry, today))
        .fold(0u32, u32::saturating_add)
}

pub fn bucket_for_months(total_months: u32) -> ExperienceBucket {
    match total_months {
        0..=11 => ExperienceBucket::LessThanOneYear,
        12..=35 => ExperienceBucket::OneToTwoYears,
        36..=60 => ExperienceBucket::ThreeToFiveYears,
        _ => ExperienceBucket::FivePlusYears,
    }
}

pub fn bucket_experience(entries: &[ExperienceEntry], today: NaiveDate) -> ExperienceBucket {
    bucket_for_months(total_experience_months(entries, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn finished(start: NaiveDate, end: NaiveDate) -> ExperienceEntry {
        ExperienceEntry {
            title: "Analyst".to_string(),
            company: "Harbor Logistics".to_string(),
            start_date: Some(start),
            end_date: Some(end),
            is_current: false,
        }
    }

    #[test]
    fn empty_history_is_less_than_one_year() {
        assert_eq!(
            bucket_experience(&[], date(2025, 1, 1)),
            ExperienceBucket::LessThanOneYear
        );
    }

    #[test]
    fn months_respect_day_of_month() {
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 3, 14)), 1);
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 3, 15)), 2);
        assert_eq!(months_between(date(2022, 11, 1), date(2024, 2, 1)), 15);
    }

    #[test]
    fn future_or_inverted_ranges_contribute_zero() {
        let inverted = finished(date(2025, 5, 1), date(2024, 5, 1));
        assert_eq!(entry_months(&inverted, date(2025, 6, 1)), 0);

        let future_current = ExperienceEntry {
            start_date: Some(date(2026, 1, 1)),
            end_date: None,
            is_current: true,
            ..inverted
        };
        assert_eq!(entry_months(&future_current, date(2025, 6, 1)), 0);
    }

    #[test]
    fn current_role_counts_until_today_and_ignores_end_date() {
        let entry = ExperienceEntry {
            title: "Support Engineer".to_string(),
            company: "Brightline".to_string(),
            start_date: Some(date(2021, 6, 1)),
            end_date: Some(date(2021, 7, 1)),
            is_current: true,
        };
        assert_eq!(entry_months(&entry, date(2025, 6, 1)), 48);
        assert_eq!(
            bucket_experience(&[entry], date(2025, 6, 1)),
            ExperienceBucket::ThreeToFiveYears
        );
    }

    #[test]
    fn missing_dates_degrade_to_zero() {
        let no_start = ExperienceEntry {
            title: String::new(),
            company: String::new(),
            start_date: None,
            end_date: Some(date(2024, 1, 1)),
            is_current: false,
        };
        let no_end = ExperienceEntry {
            start_date: Some(date(2020, 1, 1)),
            end_date: None,
            ..no_start.clone()
        };
        assert_eq!(total_experience_months(&[no_start, no_end], date(2025, 1, 1)), 0);
    }

    #[test]
    fn overlapping_roles_are_summed() {
        let first = finished(date(2023, 1, 1), date(2024, 1, 1));
        let second = finished(date(2023, 1, 1), date(2024, 1, 1));
        assert_eq!(total_experience_months(&[first, second], date(2025, 1, 1)), 24);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(bucket_for_months(11), ExperienceBucket::LessThanOneYear);
        assert_eq!(bucket_for_months(12), ExperienceBucket::OneToTwoYears);
        assert_eq!(bucket_for_months(35), ExperienceBucket::OneToTwoYears);
        assert_eq!(bucket_for_months(36), ExperienceBucket::ThreeToFiveYears);
        assert_eq!(bucket_for_months(60), ExperienceBucket::ThreeToFiveYears);
        assert_eq!(bucket_for_months(61), ExperienceBucket::FivePlusYears);
    }

    #[test]
    fn labels_round_trip_case_insensitively() {
        for bucket in ExperienceBucket::ALL {
            assert_eq!(
                ExperienceBucket::from_label(&bucket.label().to_uppercase()),
                Some(bucket)
            );
        }
        assert_eq!(ExperienceBucket::from_label("1 year"), None);
    }
}
