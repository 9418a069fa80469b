//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Negamax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Look-ahead in plies (must be at least 1).
    pub depth: u32,

    /// Bound for the root window `[-win_score, win_score]`.
    /// `None` searches with an unbounded window.
    pub win_score: Option<i64>,

    /// Scale leaf scores by remaining depth so quick wins and slow losses
    /// rank above equal outcomes further away.
    pub prefer_short_wins: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 10,
            win_score: None,
            prefer_short_wins: false,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a bounded root window.
    pub fn with_win_score(mut self, win_score: i64) -> Self {
        self.win_score = Some(win_score);
        self
    }

    /// Create a new config that prefers shorter wins.
    pub fn with_short_wins(mut self, enabled: bool) -> Self {
        self.prefer_short_wins = enabled;
        self
    }

    /// Check the config before it is used.
    pub fn validate(&self) -> Result<()> {
        if self.depth < 1 {
            return Err(Error::Configuration(
                "search depth must be at least 1".into(),
            ));
        }
        if let Some(w) = self.win_score {
            if w <= 0 {
                return Err(Error::Configuration(format!(
                    "win score must be positive, got {w}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 10);
        assert_eq!(config.win_score, None);
        assert!(!config.prefer_short_wins);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(12)
            .with_win_score(100)
            .with_short_wins(true);

        assert_eq!(config.depth, 12);
        assert_eq!(config.win_score, Some(100));
        assert!(config.prefer_short_wins);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = SearchConfig::default().with_depth(0);
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_non_positive_win_score_rejected() {
        let config = SearchConfig::default().with_win_score(0);
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_depth(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
