use std::collections::HashMap;

use crate::types::{Day, Week};

/// Completion bookkeeping for the routine view.
///
/// Three independent mappings: per-exercise flags plus explicit day/week
/// overrides. A day or week with no override derives its status bottom-up
/// from its children; an override, once recorded by a day/week toggle,
/// wins until the next day/week toggle replaces it. Created empty when the
/// view mounts and thrown away on unmount; nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompletionState {
    exercises: HashMap<(u32, u32, usize), bool>,
    day_overrides: HashMap<(u32, u32), bool>,
    week_overrides: HashMap<u32, bool>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exercise_complete(&self, week: u32, day: u32, idx: usize) -> bool {
        self.exercises.get(&(week, day, idx)).copied().unwrap_or(false)
    }

    /// Effective day status: the override if one exists, otherwise the AND
    /// of the day's exercise flags.
    pub fn is_day_complete(&self, week: u32, day: &Day) -> bool {
        if let Some(&forced) = self.day_overrides.get(&(week, day.day_number)) {
            return forced;
        }
        day.exercises
            .iter()
            .enumerate()
            .all(|(idx, _)| self.is_exercise_complete(week, day.day_number, idx))
    }

    /// Effective week status: the override if one exists, otherwise the AND
    /// of the effective day statuses.
    pub fn is_week_complete(&self, week: &Week) -> bool {
        if let Some(&forced) = self.week_overrides.get(&week.week_number) {
            return forced;
        }
        week.days
            .iter()
            .all(|day| self.is_day_complete(week.week_number, day))
    }

    /// Flips a single exercise flag. Deliberately leaves day/week overrides
    /// alone: after "Completar día" the day keeps reading complete even if
    /// one exercise inside it is un-ticked.
    pub fn toggle_exercise(&mut self, week: u32, day: u32, idx: usize) {
        let flag = self.exercises.entry((week, day, idx)).or_insert(false);
        *flag = !*flag;
    }

    /// Sets every exercise of the day and records a day override.
    pub fn set_day_state(&mut self, week: u32, day: &Day, done: bool) {
        for idx in 0..day.exercises.len() {
            self.exercises.insert((week, day.day_number, idx), done);
        }
        self.day_overrides.insert((week, day.day_number), done);
    }

    /// Cascades to every day (and so every exercise) of the week and
    /// records a week override.
    pub fn set_week_state(&mut self, week: &Week, done: bool) {
        for day in &week.days {
            self.set_day_state(week.week_number, day, done);
        }
        self.week_overrides.insert(week.week_number, done);
    }

    /// (completed, total) exercises of a day, for the day badge.
    pub fn day_progress(&self, week: u32, day: &Day) -> (usize, usize) {
        let done = day
            .exercises
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.is_exercise_complete(week, day.day_number, *idx))
            .count();
        (done, day.exercises.len())
    }

    /// (effectively complete, total) days of a week, for the week badge.
    pub fn week_progress(&self, week: &Week) -> (usize, usize) {
        let done = week
            .days
            .iter()
            .filter(|day| self.is_day_complete(week.week_number, day))
            .count();
        (done, week.days.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::assigned_program;
    use crate::types::{Day, Exercise, Program, Week};

    // Smallest program that still exercises every roll-up path.
    fn mini_program() -> Program {
        Program {
            name: "Mini".to_string(),
            phase: "Test".to_string(),
            load: "Test".to_string(),
            weeks: vec![Week {
                week_number: 1,
                days: vec![Day {
                    day_number: 1,
                    focus: "Full body".to_string(),
                    exercises: vec![
                        Exercise::new("Sentadilla", "3", "10", "60 s"),
                        Exercise::new("Press de banca", "3", "10", "60 s"),
                    ],
                }],
            }],
        }
    }

    #[test]
    fn fresh_state_is_all_incomplete() {
        let program = mini_program();
        let state = CompletionState::new();
        let week = &program.weeks[0];
        let day = &week.days[0];

        assert!(!state.is_exercise_complete(1, 1, 0));
        assert!(!state.is_day_complete(1, day));
        assert!(!state.is_week_complete(week));
        assert_eq!(state.day_progress(1, day), (0, 2));
    }

    #[test]
    fn toggle_exercise_flips_exactly_one() {
        let mut state = CompletionState::new();
        state.toggle_exercise(1, 1, 0);
        assert!(state.is_exercise_complete(1, 1, 0));
        assert!(!state.is_exercise_complete(1, 1, 1));

        state.toggle_exercise(1, 1, 0);
        assert!(!state.is_exercise_complete(1, 1, 0));
    }

    #[test]
    fn day_status_derives_from_exercises() {
        let program = mini_program();
        let day = &program.weeks[0].days[0];
        let mut state = CompletionState::new();

        state.toggle_exercise(1, 1, 0);
        assert!(!state.is_day_complete(1, day));

        state.toggle_exercise(1, 1, 1);
        assert!(state.is_day_complete(1, day));
        assert_eq!(state.day_progress(1, day), (2, 2));
    }

    #[test]
    fn day_toggle_cascades_to_every_exercise() {
        let program = mini_program();
        let day = &program.weeks[0].days[0];
        let mut state = CompletionState::new();

        state.set_day_state(1, day, true);
        assert!(state.is_exercise_complete(1, 1, 0));
        assert!(state.is_exercise_complete(1, 1, 1));
        assert!(state.is_day_complete(1, day));

        state.set_day_state(1, day, false);
        assert!(!state.is_exercise_complete(1, 1, 0));
        assert!(!state.is_exercise_complete(1, 1, 1));
        assert!(!state.is_day_complete(1, day));
    }

    #[test]
    fn day_override_survives_single_exercise_toggle() {
        let program = mini_program();
        let day = &program.weeks[0].days[0];
        let mut state = CompletionState::new();

        state.set_day_state(1, day, true);
        state.toggle_exercise(1, 1, 0);

        // The override wins even though exercise 0 is now un-ticked.
        assert!(!state.is_exercise_complete(1, 1, 0));
        assert!(state.is_day_complete(1, day));
    }

    #[test]
    fn week_status_derives_from_days() {
        let program = assigned_program();
        let week = &program.weeks[0];
        let mut state = CompletionState::new();

        for day in &week.days {
            state.set_day_state(week.week_number, day, true);
        }
        assert!(state.is_week_complete(week));
        assert_eq!(state.week_progress(week), (week.days.len(), week.days.len()));

        state.set_day_state(week.week_number, &week.days[0], false);
        assert!(!state.is_week_complete(week));
    }

    #[test]
    fn week_toggle_cascades_true_everywhere() {
        let program = assigned_program();
        let week = &program.weeks[0];
        let mut state = CompletionState::new();

        state.set_week_state(week, true);
        assert!(state.is_week_complete(week));
        for day in &week.days {
            assert!(state.is_day_complete(week.week_number, day));
            for idx in 0..day.exercises.len() {
                assert!(state.is_exercise_complete(week.week_number, day.day_number, idx));
            }
        }
    }

    #[test]
    fn week_toggle_cascades_false_everywhere() {
        let program = assigned_program();
        let week = &program.weeks[0];
        let mut state = CompletionState::new();

        state.set_week_state(week, true);
        state.set_week_state(week, false);
        assert!(!state.is_week_complete(week));
        for day in &week.days {
            assert!(!state.is_day_complete(week.week_number, day));
            for idx in 0..day.exercises.len() {
                assert!(!state.is_exercise_complete(week.week_number, day.day_number, idx));
            }
        }
    }

    #[test]
    fn weeks_track_completion_independently() {
        let program = assigned_program();
        let mut state = CompletionState::new();

        state.set_week_state(&program.weeks[0], true);
        assert!(state.is_week_complete(&program.weeks[0]));
        assert!(!state.is_week_complete(&program.weeks[1]));
    }
}
