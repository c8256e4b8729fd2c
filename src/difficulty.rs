use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::{HeuristicKind, Minimax};
use crate::error::ConfigError;

/// Named strength of the automated opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Amateur,
    #[default]
    Expert,
}

/// What a difficulty resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultyConfig {
    pub depth: u8,
    pub heuristic: HeuristicKind,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Amateur, Self::Expert];

    /// Search depth and heuristic for this difficulty.
    pub fn config(self) -> DifficultyConfig {
        match self {
            Self::Beginner => DifficultyConfig {
                depth: 2,
                heuristic: HeuristicKind::ScoreDifference,
            },
            Self::Amateur => DifficultyConfig {
                depth: 4,
                heuristic: HeuristicKind::Reach,
            },
            Self::Expert => DifficultyConfig {
                depth: 6,
                heuristic: HeuristicKind::Reach,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Amateur => "amateur",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// Builds the search engine for a difficulty, with alpha-beta pruning on.
pub fn create_search(difficulty: Difficulty) -> Minimax {
    let DifficultyConfig { depth, heuristic } = difficulty.config();
    Minimax::from_boxed(heuristic.build(), depth).with_pruning(true)
}
