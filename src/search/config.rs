//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration shared by all tree-search agents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum search depth in full rounds (one move per agent).
    /// 0 scores each root action by its immediate successor only.
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 2 }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_max_depth(4);
        assert_eq!(config.max_depth, 4);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_max_depth(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
