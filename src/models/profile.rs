// src/models/profile.rs

use serde::{Deserialize, Serialize};

/// The single user profile captured by the onboarding wizard.
/// Persisted under the `user-profile` key; mutated only by re-running
/// onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,

    /// ISO `YYYY-MM-DD`.
    pub date_of_birth: String,

    /// Region code of the user's state or territory (e.g., "DL").
    pub state: String,

    pub has_aadhaar: bool,
    pub has_pan: bool,
    pub has_voter_id: bool,

    /// False until the wizard's final step commits.
    pub completed_onboarding: bool,
}

impl UserProfile {
    /// Age derived from the stored date of birth; `None` when the date does
    /// not parse or lies in the future.
    pub fn age_in_years(&self, today: chrono::NaiveDate) -> Option<u32> {
        let dob = chrono::NaiveDate::parse_from_str(&self.date_of_birth, "%Y-%m-%d").ok()?;
        today.years_since(dob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_born(date_of_birth: &str) -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            date_of_birth: date_of_birth.to_string(),
            state: "DL".to_string(),
            has_aadhaar: false,
            has_pan: false,
            has_voter_id: false,
            completed_onboarding: true,
        }
    }

    #[test]
    fn age_counts_completed_years() {
        let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(profile_born("2000-01-15").age_in_years(today), Some(26));
        // Birthday not yet reached this year.
        assert_eq!(profile_born("2000-12-31").age_in_years(today), Some(25));
    }

    #[test]
    fn age_is_none_for_unparseable_or_future_dates() {
        let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(profile_born("not-a-date").age_in_years(today), None);
        assert_eq!(profile_born("2030-01-01").age_in_years(today), None);
    }
}
