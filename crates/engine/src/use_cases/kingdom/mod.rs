//! Kingdom status use cases.

use std::sync::Arc;

use serde::Serialize;

use samguk_domain::{Kingdom, Nation};

/// Container for kingdom use cases.
pub struct KingdomUseCases {
    pub status: Arc<KingdomStatus>,
}

impl KingdomUseCases {
    pub fn new(status: Arc<KingdomStatus>) -> Self {
        Self { status }
    }
}

/// Public view of a kingdom. The nation is implied by `name` and not echoed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KingdomStatusReport {
    pub id: u32,
    pub name: String,
    pub gold: i64,
    pub population: i64,
    pub happiness: i32,
    pub military: i64,
    pub total_score: f64,
}

impl From<&Kingdom> for KingdomStatusReport {
    fn from(kingdom: &Kingdom) -> Self {
        Self {
            id: kingdom.id,
            name: kingdom.name.clone(),
            gold: kingdom.gold,
            population: kingdom.population,
            happiness: kingdom.happiness,
            military: kingdom.military,
            total_score: kingdom.total_score(),
        }
    }
}

/// Looks up the seeded kingdoms by name.
pub struct KingdomStatus {
    kingdoms: Vec<Kingdom>,
}

impl KingdomStatus {
    pub fn new(kingdoms: Vec<Kingdom>) -> Self {
        Self { kingdoms }
    }

    pub fn seeded() -> Self {
        Self::new(Kingdom::seeded())
    }

    /// `name` is the Korean name ("백제") or the nation id ("baekje").
    pub fn execute(&self, name: &str) -> Result<KingdomStatusReport, KingdomError> {
        let nation = name.parse::<Nation>().ok();
        self.kingdoms
            .iter()
            .find(|k| k.name == name || Some(k.nation) == nation)
            .map(KingdomStatusReport::from)
            .ok_or_else(|| KingdomError::NotFound(name.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KingdomError {
    #[error("Kingdom not found: {0}")]
    NotFound(String),
}
