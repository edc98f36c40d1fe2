//! Concrete take-away variants.
//!
//! - `race`: race to 21, adding 1-3 to a shared count; reaching 21 wins
//! - `crawler`: a caterpillar eats 1-2 of 12 leaves per turn; the last
//!   leaf wins
//!
//! Both are `SubtractionRules` with different parameters; the builders fix
//! the defaults and agent presets each game ships with.

pub mod crawler;
pub mod race;

use serde::{Deserialize, Serialize};

use crate::player::AgentConfig;

/// Agent strength presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Shallow search, frequently distracted.
    Easy,
    /// Full-depth search, never distracted.
    #[default]
    Hard,
}

impl Difficulty {
    /// Agent preset for the race table.
    pub fn race_agent(self) -> AgentConfig {
        match self {
            Difficulty::Easy => AgentConfig::new(1).with_noise(0.4),
            Difficulty::Hard => AgentConfig::new(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_presets() {
        let easy = Difficulty::Easy.race_agent();
        assert_eq!(easy.depth, 1);
        assert_eq!(easy.noise_probability, 0.4);

        let hard = Difficulty::Hard.race_agent();
        assert_eq!(hard.depth, 12);
        assert_eq!(hard.noise_probability, 0.0);
    }

    #[test]
    fn test_difficulty_serde() {
        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
    }
}
