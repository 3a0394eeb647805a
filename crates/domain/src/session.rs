//! A single player's game session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::game_state::GameState;
use crate::nation::Nation;
use crate::turn::{resolve_command, CommandLogEntry, TurnNumber, TurnResolution};

/// Everything one player has done this session. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    nation: Option<Nation>,
    state: GameState,
    turn: TurnNumber,
    log: Vec<CommandLogEntry>,
}

impl GameSession {
    pub fn new(nation: Option<Nation>) -> Self {
        Self {
            nation,
            state: GameState::default(),
            turn: TurnNumber::first(),
            log: Vec::new(),
        }
    }

    pub fn nation(&self) -> Option<Nation> {
        self.nation
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn(&self) -> TurnNumber {
        self.turn
    }

    pub fn log(&self) -> &[CommandLogEntry] {
        &self.log
    }

    /// Log entry id for a command answered at `now`.
    ///
    /// Ids are millisecond timestamps, bumped past the previous entry when
    /// two commands land in the same millisecond.
    pub fn next_entry_id(&self, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis();
        match self.log.last() {
            Some(last) if millis <= last.id => last.id + 1,
            _ => millis,
        }
    }

    /// Resolve `command` and commit the result. Blank commands change nothing.
    pub fn resolve(
        &mut self,
        command: &str,
        now: DateTime<Utc>,
        roll: impl FnMut(i32, i32) -> i32,
    ) -> Option<TurnResolution> {
        let entry_id = self.next_entry_id(now);
        let resolution = resolve_command(&self.state, self.turn, command, entry_id, now, roll)?;

        self.state = resolution.state;
        self.turn = resolution.turn;
        self.log.push(resolution.entry.clone());

        Some(resolution)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(None)
    }
}
