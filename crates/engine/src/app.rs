//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    config::EngineConfig,
    ports::{ClockPort, RandomPort, TrainingResultSink, TrainingServerPort},
};
use crate::use_cases;
use crate::use_cases::kingdom::KingdomStatus;
use crate::use_cases::session::SessionRegistry;

/// Main application state.
///
/// Holds all use cases; the session registry is shared between them.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub session: use_cases::SessionUseCases,
    pub turn: use_cases::TurnUseCases,
    pub training: use_cases::TrainingUseCases,
    pub kingdom: use_cases::KingdomUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        config: EngineConfig,
        training_server: Arc<dyn TrainingServerPort>,
        result_sink: Arc<dyn TrainingResultSink>,
    ) -> Self {
        Self::with_ports(
            config,
            training_server,
            result_sink,
            Arc::new(SystemClock),
            Arc::new(SystemRandom),
        )
    }

    /// Same as [`App::new`] with explicit clock and random sources.
    pub fn with_ports(
        config: EngineConfig,
        training_server: Arc<dyn TrainingServerPort>,
        result_sink: Arc<dyn TrainingResultSink>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let sessions = Arc::new(SessionRegistry::new());

        let session = use_cases::SessionUseCases::new(
            Arc::new(use_cases::session::CreateSession::new(
                sessions.clone(),
                random.clone(),
            )),
            Arc::new(use_cases::session::GetSession::new(sessions.clone())),
            Arc::new(use_cases::session::EndSession::new(sessions.clone())),
        );

        let turn = use_cases::TurnUseCases::new(Arc::new(use_cases::turn::SubmitCommand::new(
            sessions,
            clock.clone(),
            random,
            config.turn_latency,
        )));

        let training = use_cases::TrainingUseCases::new(
            Arc::new(use_cases::training::RequestTraining::new(
                training_server,
                clock,
                config.training_webhook_url,
            )),
            Arc::new(use_cases::training::ReceiveTrainingResult::new(result_sink)),
        );

        let kingdom = use_cases::KingdomUseCases::new(Arc::new(KingdomStatus::seeded()));

        Self {
            use_cases: UseCases {
                session,
                turn,
                training,
                kingdom,
            },
        }
    }
}
