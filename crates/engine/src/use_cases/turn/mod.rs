//! Turn use cases.
//!
//! Answers a player's command after a fixed "processing" delay. While one
//! command is resolving, further commands for the same session are rejected,
//! not queued.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use samguk_domain::{is_blank_command, TurnResolution};

use crate::infrastructure::ports::{ClockPort, RandomPort};
use crate::use_cases::session::SessionRegistry;

/// Container for turn use cases.
pub struct TurnUseCases {
    pub submit: Arc<SubmitCommand>,
}

impl TurnUseCases {
    pub fn new(submit: Arc<SubmitCommand>) -> Self {
        Self { submit }
    }
}

/// Result of submitting a command.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The command was answered and the session advanced one turn.
    Resolved(TurnResolution),
    /// Blank command, nothing happened.
    Ignored,
    /// Another command is still resolving, nothing happened.
    Busy,
}

pub struct SubmitCommand {
    sessions: Arc<SessionRegistry>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    latency: Duration,
}

impl SubmitCommand {
    pub fn new(
        sessions: Arc<SessionRegistry>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        latency: Duration,
    ) -> Self {
        Self {
            sessions,
            clock,
            random,
            latency,
        }
    }

    pub async fn execute(
        &self,
        session_id: Uuid,
        command: String,
    ) -> Result<CommandOutcome, TurnError> {
        let handle = self
            .sessions
            .get(session_id)
            .ok_or(TurnError::SessionNotFound(session_id))?;

        if is_blank_command(&command) {
            return Ok(CommandOutcome::Ignored);
        }

        let Some(guard) = handle.try_begin() else {
            tracing::debug!(session_id = %session_id, "Command rejected, session busy");
            return Ok(CommandOutcome::Busy);
        };

        let clock = self.clock.clone();
        let random = self.random.clone();
        let latency = self.latency;

        // Runs to completion even if the caller goes away.
        let resolution = tokio::spawn(async move {
            let _guard = guard;
            tokio::time::sleep(latency).await;

            let mut session = handle.session().write().await;
            session.resolve(&command, clock.now(), |min, max| random.gen_range(min, max))
        })
        .await
        .map_err(|e| TurnError::Interrupted(e.to_string()))?;

        match resolution {
            Some(resolution) => {
                tracing::info!(
                    session_id = %session_id,
                    turn = %resolution.turn,
                    finance_delta = resolution.delta.finance,
                    population_delta = resolution.delta.population,
                    happiness_delta = resolution.delta.happiness,
                    military_delta = resolution.delta.military,
                    "Command resolved"
                );
                Ok(CommandOutcome::Resolved(resolution))
            }
            None => Ok(CommandOutcome::Ignored),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),
    #[error("Command resolution was interrupted: {0}")]
    Interrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use samguk_domain::{GameSession, GameState, TurnNumber, COMMAND_RESPONSES};

    use crate::infrastructure::clock::{FixedClock, MidpointRandom, SystemRandom};
    use crate::infrastructure::ports::MockClockPort;
    use crate::use_cases::session::SessionHandle;

    const LATENCY: Duration = Duration::from_millis(1500);

    fn setup(random: Arc<dyn RandomPort>) -> (Arc<SessionHandle>, SubmitCommand) {
        let sessions = Arc::new(SessionRegistry::new());
        let handle = Arc::new(SessionHandle::new(Uuid::new_v4(), GameSession::default()));
        sessions.insert(handle.clone());

        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().expect("valid date");
        let submit = SubmitCommand::new(sessions, Arc::new(FixedClock(now)), random, LATENCY);
        (handle, submit)
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_scenario_command() {
        let (handle, submit) = setup(Arc::new(SystemRandom));

        let outcome = submit
            .execute(handle.id(), "강화".to_string())
            .await
            .expect("submit");

        let CommandOutcome::Resolved(resolution) = outcome else {
            panic!("expected Resolved");
        };
        assert_eq!(resolution.turn, TurnNumber::new(2));
        assert_eq!(resolution.entry.command, "강화");
        assert!(COMMAND_RESPONSES.contains(&resolution.entry.response.as_str()));

        let session = handle.session().read().await;
        assert_eq!(session.turn(), TurnNumber::new(2));
        assert_eq!(session.log().len(), 1);
        assert!((60..=79).contains(&session.state().happiness));
        assert!(!handle.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_configured_latency() {
        let (handle, submit) = setup(Arc::new(MidpointRandom));
        let started = tokio::time::Instant::now();

        submit
            .execute(handle.id(), "순행".to_string())
            .await
            .expect("submit");

        assert!(started.elapsed() >= LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_command_changes_nothing() {
        let (handle, submit) = setup(Arc::new(MidpointRandom));

        let outcome = submit
            .execute(handle.id(), "  \n".to_string())
            .await
            .expect("submit");

        assert!(matches!(outcome, CommandOutcome::Ignored));
        let session = handle.session().read().await;
        assert_eq!(*session, GameSession::default());
    }

    #[tokio::test(start_paused = true)]
    async fn second_command_while_resolving_is_rejected() {
        let (handle, submit) = setup(Arc::new(MidpointRandom));

        let (first, second) = tokio::join!(
            submit.execute(handle.id(), "출병".to_string()),
            submit.execute(handle.id(), "퇴각".to_string()),
        );

        assert!(matches!(first.expect("first"), CommandOutcome::Resolved(_)));
        assert!(matches!(second.expect("second"), CommandOutcome::Busy));

        let session = handle.session().read().await;
        assert_eq!(session.turn(), TurnNumber::new(2));
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log()[0].command, "출병");
    }

    #[tokio::test(start_paused = true)]
    async fn session_accepts_commands_again_after_resolution() {
        let (handle, submit) = setup(Arc::new(MidpointRandom));

        for command in ["농업 장려", "병력 모집"] {
            let outcome = submit
                .execute(handle.id(), command.to_string())
                .await
                .expect("submit");
            assert!(matches!(outcome, CommandOutcome::Resolved(_)));
        }

        let session = handle.session().read().await;
        assert_eq!(session.turn(), TurnNumber::new(3));
        assert_eq!(session.log().len(), 2);
        assert!(session.log()[0].id < session.log()[1].id);
    }

    #[tokio::test(start_paused = true)]
    async fn timestamps_come_from_clock() {
        let sessions = Arc::new(SessionRegistry::new());
        let handle = Arc::new(SessionHandle::new(Uuid::new_v4(), GameSession::default()));
        sessions.insert(handle.clone());

        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("valid date");
        let mut clock = MockClockPort::new();
        clock.expect_now().times(1).return_const(now);

        let submit = SubmitCommand::new(
            sessions,
            Arc::new(clock),
            Arc::new(MidpointRandom),
            Duration::ZERO,
        );
        let outcome = submit
            .execute(handle.id(), "사신 파견".to_string())
            .await
            .expect("submit");

        let CommandOutcome::Resolved(resolution) = outcome else {
            panic!("expected Resolved");
        };
        assert_eq!(resolution.entry.timestamp, now);
        assert_eq!(resolution.entry.id, now.timestamp_millis());
        assert_eq!(resolution.state.happiness, GameState::default().happiness - 1);
    }

    #[tokio::test]
    async fn unknown_session_is_an_error() {
        let (_, submit) = setup(Arc::new(MidpointRandom));
        let err = submit
            .execute(Uuid::new_v4(), "강화".to_string())
            .await
            .expect_err("missing session");
        assert!(matches!(err, TurnError::SessionNotFound(_)));
    }
}
