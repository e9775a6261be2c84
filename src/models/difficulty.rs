use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Accepts the English labels in any case, plus 简单/中等/困难.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "简单" => Ok(Difficulty::Easy),
            "medium" | "中等" => Ok(Difficulty::Medium),
            "hard" | "困难" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("中等".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
