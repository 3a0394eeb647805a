//! Seeded kingdom records served by the status endpoint.

use serde::{Deserialize, Serialize};

use crate::nation::Nation;

/// Happiness a kingdom starts with when none is given.
pub const DEFAULT_KINGDOM_HAPPINESS: i32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kingdom {
    pub id: u32,
    pub nation: Nation,
    pub name: String,
    pub gold: i64,
    pub population: i64,
    pub happiness: i32,
    pub military: i64,
}

impl Kingdom {
    pub fn new(id: u32, nation: Nation, gold: i64, population: i64, military: i64) -> Self {
        Self {
            id,
            nation,
            name: nation.display_name().to_string(),
            gold,
            population,
            happiness: DEFAULT_KINGDOM_HAPPINESS,
            military,
        }
    }

    /// The three kingdoms as they stand at the start of a campaign.
    pub fn seeded() -> Vec<Kingdom> {
        vec![
            Kingdom::new(1, Nation::Goguryeo, 15_000, 80_000, 15),
            Kingdom::new(2, Nation::Baekje, 18_000, 60_000, 10),
            Kingdom::new(3, Nation::Silla, 12_000, 40_000, 12),
        ]
    }

    pub fn total_score(&self) -> f64 {
        self.gold as f64 / 10_000.0
            + self.population as f64 / 10_000.0
            + f64::from(self.happiness) / 10.0
            + self.military as f64 / 10.0
    }
}
