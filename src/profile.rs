use crate::{
    core::{
        LexiloopError,
        UserProfile,
        UserProgress,
    },
    persistence::{
        load_json,
        save_json,
        Storage,
    },
};

pub const PROFILE_KEY: &str = "lexiloop_profile";
pub const PROGRESS_KEY: &str = "lexiloop_progress";

pub fn save_profile(storage: &impl Storage, profile: &UserProfile) -> Result<(), LexiloopError> {
    save_json(storage, PROFILE_KEY, profile)
}

/// None until onboarding has completed once.
pub fn load_profile(storage: &impl Storage) -> Result<Option<UserProfile>, LexiloopError> {
    load_json(storage, PROFILE_KEY)
}

pub fn save_progress(storage: &impl Storage, progress: &UserProgress) -> Result<(), LexiloopError> {
    save_json(storage, PROGRESS_KEY, progress)
}

pub fn load_progress(storage: &impl Storage) -> Result<UserProgress, LexiloopError> {
    Ok(load_json(storage, PROGRESS_KEY)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use chrono::{
        Duration,
        TimeZone,
        Utc,
    };

    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn progress_defaults_when_absent() {
        let storage = MemoryStorage::new();
        let progress = load_progress(&storage).unwrap();
        assert_eq!(progress.streak, 0);
        assert_eq!(progress.cards_known, 0);
    }

    #[test]
    fn profile_round_trip() {
        let storage = MemoryStorage::new();
        assert!(load_profile(&storage).unwrap().is_none());

        let profile = UserProfile {
            name: "Theo".to_string(),
            age: 15,
            languages: vec!["spanish".to_string(), "german".to_string()],
            joined_date: Utc::now(),
        };
        save_profile(&storage, &profile).unwrap();

        let loaded = load_profile(&storage).unwrap().unwrap();
        assert_eq!(loaded.name, "Theo");
        assert_eq!(loaded.languages, profile.languages);
    }

    #[test]
    fn streak_extends_on_consecutive_days_and_resets_after_a_gap() {
        let mut progress = UserProgress::default();
        let day_one = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();

        progress.last_study_date = day_one;
        progress.streak = 1;

        // Same day: nothing changes.
        progress.record_study(day_one + Duration::hours(2));
        assert_eq!(progress.streak, 1);

        // Next day: streak grows.
        progress.record_study(day_one + Duration::days(1));
        assert_eq!(progress.streak, 2);

        // Long gap: streak restarts.
        progress.record_study(day_one + Duration::days(5));
        assert_eq!(progress.streak, 1);
    }
}
