//! Turn resolution.
//!
//! A player command is answered with one of a fixed set of narrative
//! responses and a random signed change to every stat. The reducer here is
//! pure: the caller supplies the timestamp and a `roll(min, max)` closure that
//! returns an integer in the inclusive range, so tests can script every draw.
//!
//! Draw order is fixed: response index, finance, population, happiness,
//! military.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_state::{GameState, StatDelta};

/// Canned narrative responses. One is picked uniformly per command.
pub const COMMAND_RESPONSES: [&str; 4] = [
    "명령을 수행했습니다. 군사력이 증가했습니다.",
    "외교 사절을 파견했습니다. 다음 턴에 결과가 나올 것입니다.",
    "내정을 정비하여 백성들의 행복도가 상승했습니다.",
    "세금을 조정하여 재정이 변동되었습니다.",
];

/// Inclusive delta ranges per stat.
pub const FINANCE_DELTA: (i32, i32) = (-1_000, 999);
pub const POPULATION_DELTA: (i32, i32) = (-5_000, 9_999);
pub const HAPPINESS_DELTA: (i32, i32) = (-10, 9);
pub const MILITARY_DELTA: (i32, i32) = (-1_000, 999);

// =============================================================================
// Turn Number
// =============================================================================

/// Discrete round of play. Starts at 1 and advances by one per resolved command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnNumber(u32);

impl TurnNumber {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for TurnNumber {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for TurnNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Command Log
// =============================================================================

/// One answered command. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLogEntry {
    /// Milliseconds since the epoch, unique within a session.
    pub id: i64,
    pub command: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Everything one command produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResolution {
    pub entry: CommandLogEntry,
    pub delta: StatDelta,
    pub state: GameState,
    pub turn: TurnNumber,
}

impl TurnResolution {
    /// Treasury increase for this turn, or 0 when finance did not grow.
    pub fn finance_gain(&self) -> i64 {
        i64::from(self.delta.finance.max(0))
    }
}

/// Whether a command is empty after trimming and should be ignored.
pub fn is_blank_command(command: &str) -> bool {
    command.trim().is_empty()
}

/// Resolve one command against `state`.
///
/// Returns `None` for blank commands; nothing is drawn from `roll` in that case.
pub fn resolve_command(
    state: &GameState,
    turn: TurnNumber,
    command: &str,
    entry_id: i64,
    now: DateTime<Utc>,
    mut roll: impl FnMut(i32, i32) -> i32,
) -> Option<TurnResolution> {
    if is_blank_command(command) {
        return None;
    }

    let last = COMMAND_RESPONSES.len() as i32 - 1;
    let index = draw(&mut roll, (0, last)) as usize;
    let response = COMMAND_RESPONSES[index];

    let delta = StatDelta {
        finance: draw(&mut roll, FINANCE_DELTA),
        population: draw(&mut roll, POPULATION_DELTA),
        happiness: draw(&mut roll, HAPPINESS_DELTA),
        military: draw(&mut roll, MILITARY_DELTA),
    };

    Some(TurnResolution {
        entry: CommandLogEntry {
            id: entry_id,
            command: command.to_string(),
            response: response.to_string(),
            timestamp: now,
        },
        delta,
        state: state.apply(&delta),
        turn: turn.next(),
    })
}

// Out-of-range rolls are pulled back into range.
fn draw(roll: &mut impl FnMut(i32, i32) -> i32, (min, max): (i32, i32)) -> i32 {
    roll(min, max).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::HAPPINESS_MAX;

    fn scripted(values: Vec<i32>) -> impl FnMut(i32, i32) -> i32 {
        let mut values = values.into_iter();
        move |min, _max| values.next().unwrap_or(min)
    }

    #[test]
    fn blank_command_is_ignored_without_drawing() {
        let mut draws = 0;
        let result = resolve_command(
            &GameState::default(),
            TurnNumber::first(),
            "   \t",
            1,
            Utc::now(),
            |min, _| {
                draws += 1;
                min
            },
        );
        assert!(result.is_none());
        assert_eq!(draws, 0);
    }

    #[test]
    fn resolves_command_with_scripted_draws() {
        let now = Utc::now();
        let state = GameState::default();

        let resolution = resolve_command(
            &state,
            TurnNumber::first(),
            "강화",
            42,
            now,
            scripted(vec![2, 500, -5_000, 9, -1_000]),
        )
        .expect("non-blank command resolves");

        assert_eq!(resolution.turn, TurnNumber::new(2));
        assert_eq!(resolution.entry.id, 42);
        assert_eq!(resolution.entry.command, "강화");
        assert_eq!(resolution.entry.response, COMMAND_RESPONSES[2]);
        assert_eq!(resolution.entry.timestamp, now);
        assert_eq!(resolution.state.finance, 10_500);
        assert_eq!(resolution.state.population, 495_000);
        assert_eq!(resolution.state.happiness, 79);
        assert_eq!(resolution.state.military, 24_000);
        assert_eq!(resolution.finance_gain(), 500);
    }

    #[test]
    fn finance_gain_is_zero_when_treasury_shrinks() {
        let resolution = resolve_command(
            &GameState::default(),
            TurnNumber::first(),
            "세금 인하",
            1,
            Utc::now(),
            scripted(vec![3, -300, 0, 0, 0]),
        )
        .expect("resolves");
        assert_eq!(resolution.finance_gain(), 0);
    }

    #[test]
    fn out_of_range_rolls_are_clamped() {
        let resolution = resolve_command(
            &GameState {
                happiness: HAPPINESS_MAX,
                ..GameState::default()
            },
            TurnNumber::first(),
            "축제",
            1,
            Utc::now(),
            |_, _| i32::MAX,
        )
        .expect("resolves");

        assert_eq!(resolution.entry.response, COMMAND_RESPONSES[3]);
        assert_eq!(resolution.delta.finance, FINANCE_DELTA.1);
        assert_eq!(resolution.delta.population, POPULATION_DELTA.1);
        assert_eq!(resolution.delta.happiness, HAPPINESS_DELTA.1);
        assert_eq!(resolution.state.happiness, HAPPINESS_MAX);
    }

    #[test]
    fn draws_are_requested_with_documented_ranges() {
        let mut ranges = Vec::new();
        resolve_command(
            &GameState::default(),
            TurnNumber::first(),
            "정벌",
            1,
            Utc::now(),
            |min, max| {
                ranges.push((min, max));
                min
            },
        )
        .expect("resolves");

        assert_eq!(
            ranges,
            vec![
                (0, 3),
                FINANCE_DELTA,
                POPULATION_DELTA,
                HAPPINESS_DELTA,
                MILITARY_DELTA,
            ]
        );
    }

    #[test]
    fn command_text_is_kept_as_entered() {
        let resolution = resolve_command(
            &GameState::default(),
            TurnNumber::first(),
            "  병력 증강 ",
            1,
            Utc::now(),
            scripted(vec![]),
        )
        .expect("resolves");
        assert_eq!(resolution.entry.command, "  병력 증강 ");
    }
}
