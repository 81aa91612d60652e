use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Classic board presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Beginner => BoardConfig::new_unchecked(9, 9, 10),
            Self::Intermediate => BoardConfig::new_unchecked(16, 16, 40),
            Self::Expert => BoardConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

impl From<Difficulty> for BoardConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let BoardConfig { rows, cols, mines } = self.config();
        write!(f, "{} ({rows}x{cols}, {mines})", self.label())
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Unknown difficulty, expected one of: beginner, intermediate, expert")]
pub struct ParseDifficultyError;

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.label().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseDifficultyError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn presets_are_valid_configs() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.config().validate(), Ok(()));
        }
        assert_eq!(
            BoardConfig::from(Difficulty::Expert),
            BoardConfig::new(16, 30, 99).unwrap()
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!(" Expert ".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert_eq!("INTERMEDIATE".parse::<Difficulty>(), Ok(Difficulty::Intermediate));
        assert_eq!("nightmare".parse::<Difficulty>(), Err(ParseDifficultyError));
    }

    #[test]
    fn display_includes_dimensions() {
        assert_eq!(Difficulty::Intermediate.to_string(), "Intermediate (16x16, 40)");
    }

    #[test]
    fn deserializes_lowercase_names() {
        let difficulty: Difficulty = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(difficulty, Difficulty::Expert);

        let config: BoardConfig =
            serde_json::from_str(r#"{"rows":9,"cols":9,"mines":10}"#).unwrap();
        assert_eq!(config, Difficulty::Beginner.config());
    }
}
