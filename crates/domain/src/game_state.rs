//! Per-session kingdom statistics.

use serde::{Deserialize, Serialize};

pub const HAPPINESS_MIN: i32 = 0;
pub const HAPPINESS_MAX: i32 = 100;

/// Snapshot of a kingdom's four headline statistics.
///
/// Only `happiness` is bounded. Finance, population and military can
/// go negative after enough unlucky turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub finance: i64,
    pub population: i64,
    pub happiness: i32,
    pub military: i64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            finance: 10_000,
            population: 500_000,
            happiness: 70,
            military: 25_000,
        }
    }
}

impl GameState {
    /// Returns a new state with `delta` added to every stat, clamping happiness.
    pub fn apply(&self, delta: &StatDelta) -> GameState {
        GameState {
            finance: self.finance + i64::from(delta.finance),
            population: self.population + i64::from(delta.population),
            happiness: (self.happiness + delta.happiness).clamp(HAPPINESS_MIN, HAPPINESS_MAX),
            military: self.military + i64::from(delta.military),
        }
    }

    /// Combined national score shown next to the stats.
    ///
    /// Divisions floor toward negative infinity so a negative treasury
    /// lowers the score rather than rounding toward zero.
    pub fn total_score(&self) -> i64 {
        self.finance.div_euclid(100)
            + self.population.div_euclid(1_000)
            + i64::from(self.happiness) * 10
            + self.military.div_euclid(10)
    }
}

/// Signed change applied to a [`GameState`] by one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDelta {
    pub finance: i32,
    pub population: i32,
    pub happiness: i32,
    pub military: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new_session_values() {
        let state = GameState::default();
        assert_eq!(state.finance, 10_000);
        assert_eq!(state.population, 500_000);
        assert_eq!(state.happiness, 70);
        assert_eq!(state.military, 25_000);
    }

    #[test]
    fn apply_clamps_happiness_only() {
        let state = GameState {
            finance: 100,
            population: 100,
            happiness: 95,
            military: 100,
        };
        let delta = StatDelta {
            finance: -1_000,
            population: -5_000,
            happiness: 9,
            military: -1_000,
        };

        let next = state.apply(&delta);
        assert_eq!(next.happiness, 100);
        assert_eq!(next.finance, -900);
        assert_eq!(next.population, -4_900);
        assert_eq!(next.military, -900);

        let low = GameState { happiness: 3, ..state }.apply(&StatDelta {
            happiness: -10,
            ..StatDelta::default()
        });
        assert_eq!(low.happiness, 0);
    }

    #[test]
    fn total_score_for_default_state() {
        // 100 + 500 + 700 + 2500
        assert_eq!(GameState::default().total_score(), 3_800);
    }

    #[test]
    fn total_score_floors_negative_values() {
        let state = GameState {
            finance: -150,
            population: -1,
            happiness: 0,
            military: -5,
        };
        assert_eq!(state.total_score(), -2 + -1 + 0 + -1);
    }
}
