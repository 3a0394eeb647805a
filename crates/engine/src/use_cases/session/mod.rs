//! Session use cases.
//!
//! Game sessions live in memory for as long as the engine runs. Each session
//! carries a busy flag so at most one command resolves at a time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use samguk_domain::{CommandLogEntry, GameSession, GameState, Nation, TurnNumber};

use crate::infrastructure::ports::RandomPort;

/// Container for session use cases.
pub struct SessionUseCases {
    pub create: Arc<CreateSession>,
    pub get: Arc<GetSession>,
    pub end: Arc<EndSession>,
}

impl SessionUseCases {
    pub fn new(create: Arc<CreateSession>, get: Arc<GetSession>, end: Arc<EndSession>) -> Self {
        Self { create, get, end }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// One live session plus its single-flight flag.
pub struct SessionHandle {
    id: Uuid,
    busy: AtomicBool,
    session: RwLock<GameSession>,
}

impl SessionHandle {
    pub fn new(id: Uuid, session: GameSession) -> Self {
        Self {
            id,
            busy: AtomicBool::new(false),
            session: RwLock::new(session),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the session for one resolution. Returns `None` if another
    /// resolution already holds it.
    pub fn try_begin(self: &Arc<Self>) -> Option<BusyGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard {
                handle: Arc::clone(self),
            })
    }

    pub fn session(&self) -> &RwLock<GameSession> {
        &self.session
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.read().await;
        SessionSnapshot::new(self.id, self.is_busy(), &session)
    }
}

/// Releases the busy flag when dropped.
pub struct BusyGuard {
    handle: Arc<SessionHandle>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.handle.busy.store(false, Ordering::Release);
    }
}

/// All live sessions, keyed by id.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, Arc<SessionHandle>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, handle: Arc<SessionHandle>) {
        self.sessions.insert(handle.id(), handle);
    }

    pub fn get(&self, id: Uuid) -> Option<Arc<SessionHandle>> {
        self.sessions.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop a session. Its state is gone once the last in-flight command
    /// holding the handle finishes.
    pub fn remove(&self, id: Uuid) -> Option<Arc<SessionHandle>> {
        self.sessions.remove(&id).map(|(_, handle)| handle)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// What clients see of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub nation: Option<Nation>,
    pub nation_name: Option<&'static str>,
    pub turn: TurnNumber,
    /// A command is still being resolved; new commands will be rejected.
    pub resolving: bool,
    pub stats: GameState,
    pub total_score: i64,
    pub log: Vec<CommandLogEntry>,
}

impl SessionSnapshot {
    pub fn new(id: Uuid, resolving: bool, session: &GameSession) -> Self {
        Self {
            id,
            nation: session.nation(),
            nation_name: session.nation().map(|n| n.display_name()),
            turn: session.turn(),
            resolving,
            stats: *session.state(),
            total_score: session.state().total_score(),
            log: session.log().to_vec(),
        }
    }
}

// =============================================================================
// Use Cases
// =============================================================================

pub struct CreateSession {
    sessions: Arc<SessionRegistry>,
    random: Arc<dyn RandomPort>,
}

impl CreateSession {
    pub fn new(sessions: Arc<SessionRegistry>, random: Arc<dyn RandomPort>) -> Self {
        Self { sessions, random }
    }

    /// Start a fresh session with default stats at turn 1.
    ///
    /// `nation` accepts an id ("goguryeo") or a Korean name ("고구려").
    pub async fn execute(&self, nation: Option<&str>) -> Result<SessionSnapshot, SessionError> {
        let nation = nation
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<Nation>)
            .transpose()
            .map_err(|e| SessionError::InvalidNation(e.to_string()))?;

        let handle = Arc::new(SessionHandle::new(
            self.random.gen_uuid(),
            GameSession::new(nation),
        ));
        self.sessions.insert(Arc::clone(&handle));

        tracing::info!(
            session_id = %handle.id(),
            nation = ?nation,
            active_sessions = self.sessions.len(),
            "Game session created"
        );

        Ok(handle.snapshot().await)
    }
}

pub struct GetSession {
    sessions: Arc<SessionRegistry>,
}

impl GetSession {
    pub fn new(sessions: Arc<SessionRegistry>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, id: Uuid) -> Result<SessionSnapshot, SessionError> {
        let handle = self.sessions.get(id).ok_or(SessionError::NotFound(id))?;
        Ok(handle.snapshot().await)
    }
}

pub struct EndSession {
    sessions: Arc<SessionRegistry>,
}

impl EndSession {
    pub fn new(sessions: Arc<SessionRegistry>) -> Self {
        Self { sessions }
    }

    /// Forget a session. A command already resolving still completes, but
    /// its result is discarded with the session.
    pub fn execute(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions.remove(id).ok_or(SessionError::NotFound(id))?;
        tracing::info!(
            session_id = %id,
            active_sessions = self.sessions.len(),
            "Game session ended"
        );
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),
    #[error("Invalid nation: {0}")]
    InvalidNation(String),
}
