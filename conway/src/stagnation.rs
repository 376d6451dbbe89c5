// stagnation.rs - Decides when a run has played out and the world should be reseeded

use core::fmt;

use crate::config::Config;
use crate::engine::GenerationStats;
use crate::simulation::SimulationState;

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResetReason {
    /// The change statistic repeated for too many generations: a still life or cycle.
    Stable,
    /// No live cells remain.
    Extinction,
    /// The generation cap was exceeded.
    GenerationLimit,
}

impl fmt::Display for ResetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResetReason::Stable => "stable or cyclic pattern",
            ResetReason::Extinction => "extinction",
            ResetReason::GenerationLimit => "generation limit",
        })
    }
}

/// Consecutive generations whose change count matched the one before.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StagnationState {
    pub streak: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagnationDetector {
    identical_limit: u32,
    generation_cap: u64,
}

impl StagnationDetector {
    #[must_use]
    pub fn new(identical_limit: u32, generation_cap: u64) -> Self {
        Self {
            identical_limit,
            generation_cap,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.identical_limit, config.generation_cap)
    }

    /// Updates the streak from the latest stats and raises the reset flag if the run is over.
    ///
    /// Call exactly once per generation, after the step. Conditions are tried in
    /// order (stable, extinction, generation limit); the first match is recorded.
    /// A flag that is already raised is left alone. Returns whether the flag is raised.
    pub fn check_reset(&self, state: &mut SimulationState) -> bool {
        if state.reset.is_some() {
            return true;
        }

        let stats = &state.stats;
        state.stagnation.streak = if stats.changed_count_repeated() {
            state.stagnation.streak.saturating_add(1)
        } else {
            0
        };

        state.reset = self.reason(stats, &state.stagnation);
        state.reset.is_some()
    }

    fn reason(&self, stats: &GenerationStats, stagnation: &StagnationState) -> Option<ResetReason> {
        if stagnation.streak > self.identical_limit {
            Some(ResetReason::Stable)
        } else if stats.cells_alive == 0 {
            Some(ResetReason::Extinction)
        } else if stats.generation > self.generation_cap {
            Some(ResetReason::GenerationLimit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::WorldGrid;

    fn state_with(stats: GenerationStats, streak: u32) -> SimulationState {
        let mut state = SimulationState::new(WorldGrid::new(4, 4).unwrap());
        state.stats = stats;
        state.stagnation.streak = streak;
        state
    }

    fn stats(generation: u64, cells_alive: usize, changed: usize, previous: usize) -> GenerationStats {
        GenerationStats {
            generation,
            cells_alive,
            changed_count: changed,
            previous_changed_count: previous,
        }
    }

    #[test]
    fn streak_grows_on_repeats_and_resets_on_change() {
        let detector = StagnationDetector::new(10, 1000);
        let mut state = state_with(stats(5, 3, 7, 7), 2);
        assert!(!detector.check_reset(&mut state));
        assert_eq!(state.stagnation.streak, 3);

        state.stats = stats(6, 3, 8, 7);
        assert!(!detector.check_reset(&mut state));
        assert_eq!(state.stagnation.streak, 0);
    }

    #[test]
    fn stable_fires_only_past_the_limit() {
        let detector = StagnationDetector::new(3, 1000);
        let mut state = state_with(stats(5, 4, 12, 12), 2);
        assert!(!detector.check_reset(&mut state), "streak 3 equals the limit");
        assert!(detector.check_reset(&mut state), "streak 4 exceeds it");
        assert_eq!(state.reset, Some(ResetReason::Stable));
    }

    #[test]
    fn extinction_fires_immediately() {
        let detector = StagnationDetector::new(3, 1000);
        let mut state = state_with(stats(1, 0, 15, 0), 0);
        assert!(detector.check_reset(&mut state));
        assert_eq!(state.reset, Some(ResetReason::Extinction));
    }

    #[test]
    fn generation_cap_is_exclusive() {
        let detector = StagnationDetector::new(3, 50);
        let mut state = state_with(stats(50, 4, 1, 2), 0);
        assert!(!detector.check_reset(&mut state));
        state.stats = stats(51, 4, 2, 1);
        assert!(detector.check_reset(&mut state));
        assert_eq!(state.reset, Some(ResetReason::GenerationLimit));
    }

    #[test]
    fn stable_wins_over_extinction_and_cap() {
        let detector = StagnationDetector::new(0, 1);
        let mut state = state_with(stats(2, 0, 16, 16), 0);
        assert!(detector.check_reset(&mut state));
        assert_eq!(state.reset, Some(ResetReason::Stable));
    }

    #[test]
    fn extinction_wins_over_cap() {
        let detector = StagnationDetector::new(5, 1);
        let mut state = state_with(stats(2, 0, 3, 16), 0);
        assert!(detector.check_reset(&mut state));
        assert_eq!(state.reset, Some(ResetReason::Extinction));
    }

    #[test]
    fn raised_flag_is_sticky() {
        let detector = StagnationDetector::new(5, 1000);
        let mut state = state_with(stats(2, 0, 3, 16), 0);
        assert!(detector.check_reset(&mut state));
        state.stats = stats(3, 9, 4, 3);
        assert!(detector.check_reset(&mut state));
        assert_eq!(state.reset, Some(ResetReason::Extinction));
    }

    #[test]
    fn reasons_display() {
        assert_eq!(ResetReason::Stable.to_string(), "stable or cyclic pattern");
        assert_eq!(ResetReason::GenerationLimit.to_string(), "generation limit");
    }
}
