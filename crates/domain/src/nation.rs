//! The three playable kingdoms and how players name them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// =============================================================================
// Nation
// =============================================================================

/// One of the three playable kingdoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nation {
    Goguryeo,
    Baekje,
    Silla,
}

impl Nation {
    /// Stable identifier used in URLs and JSON.
    pub fn id(&self) -> &'static str {
        match self {
            Nation::Goguryeo => "goguryeo",
            Nation::Baekje => "baekje",
            Nation::Silla => "silla",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Nation::Goguryeo => "고구려",
            Nation::Baekje => "백제",
            Nation::Silla => "신라",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Nation::Goguryeo => "북방의 맹주",
            Nation::Baekje => "해상 무역의 강국",
            Nation::Silla => "화랑도의 정신",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Nation::Goguryeo => {
                "강력한 군사력과 광활한 영토를 자랑하는 북방의 패자. 철기병과 산성 전술로 유명하다."
            }
            Nation::Baekje => {
                "해상 무역과 문화 예술이 발달한 서남부의 강국. 일본, 중국과의 교류가 활발하다."
            }
            Nation::Silla => {
                "화랑도의 정신과 단결력으로 무장한 동남부의 신흥 강국. 금관가야를 흡수하며 성장 중이다."
            }
        }
    }

    /// Returns all nations in selection order.
    pub fn all() -> [Nation; 3] {
        [Nation::Goguryeo, Nation::Baekje, Nation::Silla]
    }

    pub fn profile(&self) -> NationProfile {
        NationProfile {
            nation: *self,
            id: self.id(),
            name: self.display_name(),
            title: self.title(),
            description: self.description(),
        }
    }
}

impl fmt::Display for Nation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Nation {
    type Err = DomainError;

    /// Accepts either the identifier ("silla") or the Korean name ("신라").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Nation::all()
            .into_iter()
            .find(|n| n.id().eq_ignore_ascii_case(trimmed) || n.display_name() == trimmed)
            .ok_or_else(|| DomainError::parse(format!("Unknown nation: {}", trimmed)))
    }
}

/// Descriptive data shown on the nation selection screen.
#[derive(Debug, Clone, Serialize)]
pub struct NationProfile {
    pub nation: Nation,
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_and_korean_name() {
        assert_eq!("goguryeo".parse::<Nation>(), Ok(Nation::Goguryeo));
        assert_eq!(" Baekje ".parse::<Nation>(), Ok(Nation::Baekje));
        assert_eq!("신라".parse::<Nation>(), Ok(Nation::Silla));
    }

    #[test]
    fn rejects_unknown_nation() {
        let err = "가야".parse::<Nation>().expect_err("가야 is not playable");
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn serializes_as_snake_case_id() {
        let json = serde_json::to_string(&Nation::Goguryeo).expect("serialize");
        assert_eq!(json, "\"goguryeo\"");
    }
}
