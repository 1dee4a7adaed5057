use std::fs;
use std::path::Path;

use amax_core::{AmaxError, CodeParams, ErrorInfo, DEFAULT_MAX_VECTORS};
use serde::{Deserialize, Serialize};

/// YAML-configurable switches governing a search run.
///
/// Every switch except `symmetry_cut` preserves the answer; they only shrink
/// the tree. `symmetry_cut` is the leading-coordinate short-circuit and may
/// report failure for sizes that exist, so it defaults to off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Leading-coordinate short-circuit of the decision search.
    #[serde(default)]
    pub symmetry_cut: bool,
    /// Try only the all-zero vector as the first word.
    #[serde(default = "default_true")]
    pub fix_origin: bool,
    /// Try only weight representatives as the second word. Needs `fix_origin`.
    #[serde(default = "default_true")]
    pub fix_second_word: bool,
    /// Restrict binary searches with even `d` to even-weight vectors.
    #[serde(default = "default_true")]
    pub even_weight: bool,
    /// Prune with the greedy colouring bound after the size bound.
    #[serde(default = "default_true")]
    pub coloring_bound: bool,
    /// Node budget; the search stops with a node-limit status when spent.
    #[serde(default)]
    pub max_nodes: Option<u64>,
    /// Largest vector space for which a distance table is built.
    #[serde(default = "default_max_vectors")]
    pub max_vectors: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_vectors() -> usize {
    DEFAULT_MAX_VECTORS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            symmetry_cut: false,
            fix_origin: true,
            fix_second_word: true,
            even_weight: true,
            coloring_bound: true,
            max_nodes: None,
            max_vectors: default_max_vectors(),
        }
    }
}

impl SearchConfig {
    /// The bare canonical enumeration: only the size bound prunes.
    pub fn plain() -> Self {
        Self {
            symmetry_cut: false,
            fix_origin: false,
            fix_second_word: false,
            even_weight: false,
            coloring_bound: false,
            max_nodes: None,
            max_vectors: default_max_vectors(),
        }
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml_str(text: &str) -> Result<Self, AmaxError> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|err| AmaxError::Serde(ErrorInfo::new("config-yaml", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, AmaxError> {
        let text = fs::read_to_string(path).map_err(|err| {
            AmaxError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, AmaxError> {
        serde_yaml::to_string(self)
            .map_err(|err| AmaxError::Serde(ErrorInfo::new("config-yaml", err.to_string())))
    }

    /// Rejects budgets that would stop the search before its first node.
    pub fn validate(&self) -> Result<(), AmaxError> {
        if self.max_nodes == Some(0) {
            return Err(AmaxError::parameter(
                "max-nodes-zero",
                "node budget must allow at least one node",
            ));
        }
        if self.max_vectors == 0 {
            return Err(AmaxError::parameter(
                "max-vectors-zero",
                "vector limit must be positive",
            ));
        }
        Ok(())
    }

    /// Whether level 1 is restricted to weight representatives.
    pub fn second_word_fixed(&self) -> bool {
        self.fix_origin && self.fix_second_word
    }

    /// Whether the even-weight restriction is sound for `params`.
    pub fn even_weight_applies(&self, params: &CodeParams) -> bool {
        self.even_weight && params.alphabet() == 2 && params.min_distance() % 2 == 0
    }

    /// Copy with the answer-changing short-circuit turned off.
    pub fn exact(&self) -> Self {
        Self {
            symmetry_cut: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = SearchConfig::from_yaml_str("coloring_bound: false\n").unwrap();
        assert!(!config.coloring_bound);
        assert!(config.fix_origin);
        assert!(!config.symmetry_cut);
        assert_eq!(config.max_vectors, DEFAULT_MAX_VECTORS);
    }

    #[test]
    fn second_word_needs_origin() {
        let config = SearchConfig {
            fix_origin: false,
            ..SearchConfig::default()
        };
        assert!(!config.second_word_fixed());
        assert!(SearchConfig::default().second_word_fixed());
    }

    #[test]
    fn even_weight_only_for_binary_even_distance() {
        let config = SearchConfig::default();
        assert!(config.even_weight_applies(&CodeParams::binary(8, 4).unwrap()));
        assert!(!config.even_weight_applies(&CodeParams::binary(8, 3).unwrap()));
        assert!(!config.even_weight_applies(&CodeParams::new(4, 3, 2).unwrap()));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let err = SearchConfig::from_yaml_str("max_nodes: 0\n").unwrap_err();
        assert_eq!(err.info().code, "max-nodes-zero");
    }

    #[test]
    fn malformed_yaml_is_a_serde_error() {
        let err = SearchConfig::from_yaml_str("fix_origin: [").unwrap_err();
        assert!(matches!(err, AmaxError::Serde(_)));
    }
}
