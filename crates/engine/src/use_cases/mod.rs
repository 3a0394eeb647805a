//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod kingdom;
pub mod session;
pub mod training;
pub mod turn;

pub use kingdom::KingdomUseCases;
pub use session::SessionUseCases;
pub use training::TrainingUseCases;
pub use turn::TurnUseCases;
