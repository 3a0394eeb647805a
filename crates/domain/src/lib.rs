//! Samguk domain types.
//!
//! Pure game rules with no I/O: kingdom statistics, the turn reducer,
//! nations and the seeded kingdom records. Time and randomness are passed in
//! by the caller.

pub mod error;
pub mod game_state;
pub mod kingdom;
pub mod nation;
pub mod session;
pub mod turn;

pub use error::DomainError;
pub use game_state::{GameState, StatDelta, HAPPINESS_MAX, HAPPINESS_MIN};
pub use kingdom::{Kingdom, DEFAULT_KINGDOM_HAPPINESS};
pub use nation::{Nation, NationProfile};
pub use session::GameSession;
pub use turn::{
    is_blank_command, resolve_command, CommandLogEntry, TurnNumber, TurnResolution,
    COMMAND_RESPONSES, FINANCE_DELTA, HAPPINESS_DELTA, MILITARY_DELTA, POPULATION_DELTA,
};
