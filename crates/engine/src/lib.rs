//! Samguk Engine library.
//!
//! Server side of the Three Kingdoms unification simulator.
//!
//! ## Structure
//!
//! - `use_cases/` - Sessions, turn resolution, training relay, kingdom status
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
