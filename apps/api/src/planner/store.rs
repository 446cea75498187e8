//! Weekly schedule store: the in-memory schedule plus the JSON file backing it.
//!
//! A single store instance is the only writer of its file. Every mutation is
//! persisted before it is applied in memory, so a failed write leaves the
//! store unchanged.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::info;

use crate::planner::schedule::{normalize_days, select_schedule, Weekday, WeeklySchedule};
use crate::storage::{load_json, save_json, StorageError};

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("No scheduled post for {0}")]
    NotFound(Weekday),

    #[error("Post frequency exceeds number of preferred days.")]
    FrequencyExceedsDays { frequency: usize, available: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct ScheduleStore {
    path: PathBuf,
    schedule: WeeklySchedule,
    rng: StdRng,
}

impl ScheduleStore {
    /// Loads the schedule at `path` (empty if the file does not exist).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScheduleError> {
        Self::open_with_rng(path, StdRng::from_os_rng())
    }

    /// Like `open`, with an explicit random source for day/template selection.
    pub fn open_with_rng(path: impl Into<PathBuf>, rng: StdRng) -> Result<Self, ScheduleError> {
        let path = path.into();
        let schedule: WeeklySchedule = load_json(&path)?;
        info!(
            "Loaded weekly schedule from {} ({} posts)",
            path.display(),
            schedule.len()
        );
        Ok(Self {
            path,
            schedule,
            rng,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the whole schedule with `post_frequency` randomly chosen
    /// preferred days, each paired with a distinct built-in template.
    pub fn generate<S: AsRef<str>>(
        &mut self,
        post_frequency: usize,
        preferred_days: &[S],
    ) -> Result<&WeeklySchedule, ScheduleError> {
        let days = normalize_days(preferred_days);
        let schedule = select_schedule(&mut self.rng, post_frequency, &days).map_err(|e| {
            ScheduleError::FrequencyExceedsDays {
                frequency: e.frequency,
                available: e.available,
            }
        })?;

        self.commit(schedule)?;
        info!(
            "Generated weekly schedule: {}",
            self.schedule
                .days()
                .map(Weekday::code)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(&self.schedule)
    }

    pub fn get(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Overwrites the message of an already scheduled day.
    pub fn update(
        &mut self,
        day: Weekday,
        content: impl Into<String>,
    ) -> Result<&WeeklySchedule, ScheduleError> {
        if !self.schedule.contains(day) {
            return Err(ScheduleError::NotFound(day));
        }
        let mut next = self.schedule.clone();
        next.insert(day, content);
        self.commit(next)?;
        Ok(&self.schedule)
    }

    pub fn delete(&mut self, day: Weekday) -> Result<&WeeklySchedule, ScheduleError> {
        if !self.schedule.contains(day) {
            return Err(ScheduleError::NotFound(day));
        }
        let mut next = self.schedule.clone();
        next.remove(day);
        self.commit(next)?;
        Ok(&self.schedule)
    }

    /// Clears every entry and persists the empty schedule.
    pub fn reset(&mut self) -> Result<(), ScheduleError> {
        self.commit(WeeklySchedule::new())?;
        info!("Weekly schedule reset");
        Ok(())
    }

    fn commit(&mut self, next: WeeklySchedule) -> Result<(), ScheduleError> {
        save_json(&self.path, &next)?;
        self.schedule = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> ScheduleStore {
        ScheduleStore::open_with_rng(
            dir.path().join("weekly_schedule.json"),
            StdRng::seed_from_u64(11),
        )
        .unwrap()
    }

    #[test]
    fn test_open_without_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.get().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_generate_picks_requested_number_of_preferred_days() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let schedule = store.generate(2, &["Mon", "Wed", "Fri"]).unwrap();
        let keys: Vec<Weekday> = schedule.days().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys
            .iter()
            .all(|d| [Weekday::Mon, Weekday::Wed, Weekday::Fri].contains(d)));
        assert!(keys[0] < keys[1]);
    }

    #[test]
    fn test_generate_rejects_frequency_above_valid_days() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let err = store.generate(3, &["Mon", "Mon", "Someday"]).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::FrequencyExceedsDays {
                frequency: 3,
                available: 1
            }
        ));
        assert!(!store.path().exists(), "failed generate must not persist");
    }

    #[test]
    fn test_generate_replaces_previous_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.generate(3, &["Mon", "Tue", "Wed"]).unwrap();
        let schedule = store.generate(1, &["Sun"]).unwrap();
        assert_eq!(schedule.days().collect::<Vec<_>>(), vec![Weekday::Sun]);
    }

    #[test]
    fn test_schedule_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let generated = {
            let mut store = store_in(&dir);
            store.generate(4, &Weekday::ALL.map(Weekday::code)).unwrap().clone()
        };

        let reopened = store_in(&dir);
        assert_eq!(reopened.get(), &generated);
    }

    #[test]
    fn test_update_missing_day_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.generate(1, &["Tue"]).unwrap();

        let err = store.update(Weekday::Mon, "x").unwrap_err();
        assert!(matches!(err, ScheduleError::NotFound(Weekday::Mon)));
    }

    #[test]
    fn test_update_changes_only_that_day() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let before = store.generate(3, &["Mon", "Wed", "Fri"]).unwrap().clone();

        let after = store.update(Weekday::Mon, "x").unwrap().clone();
        assert_eq!(after.get(Weekday::Mon), Some("x"));
        assert_eq!(after.get(Weekday::Wed), before.get(Weekday::Wed));
        assert_eq!(after.get(Weekday::Fri), before.get(Weekday::Fri));
        assert_eq!(after.len(), 3);

        let reopened = store_in(&dir);
        assert_eq!(reopened.get().get(Weekday::Mon), Some("x"));
    }

    #[test]
    fn test_delete_removes_entry_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.generate(2, &["Sat", "Sun"]).unwrap();

        let schedule = store.delete(Weekday::Sat).unwrap();
        assert!(!schedule.contains(Weekday::Sat));
        assert!(schedule.contains(Weekday::Sun));

        let err = store.delete(Weekday::Sat).unwrap_err();
        assert!(matches!(err, ScheduleError::NotFound(Weekday::Sat)));

        assert_eq!(
            store_in(&dir).get().days().collect::<Vec<_>>(),
            vec![Weekday::Sun]
        );
    }

    #[test]
    fn test_reset_then_get_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.generate(2, &["Mon", "Tue"]).unwrap();

        store.reset().unwrap();
        assert!(store.get().is_empty());
        assert!(store_in(&dir).get().is_empty());
    }

    #[test]
    fn test_failed_write_leaves_schedule_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ScheduleStore::open_with_rng(
            dir.path().join("missing-dir").join("schedule.json"),
            StdRng::seed_from_u64(3),
        )
        .unwrap();

        let err = store.generate(1, &["Mon"]).unwrap_err();
        assert!(matches!(err, ScheduleError::Storage(_)));
        assert!(store.get().is_empty());
    }
}
