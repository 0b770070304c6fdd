use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;
use crate::holder::HolderKind;

/// Default words per full round; also the capacity given to
/// the bounded holders.
pub const DEFAULT_NWORDS: usize = 45_392;

/// K runs from 1 to this, each round using K tenths of `nwords`.
pub const MAX_ROUNDS: usize = 10;

// =============================================================================
// Benchmark configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub nwords: usize,
    pub rounds: usize,
    pub holders: Vec<HolderKind>,
    pub color: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            nwords: DEFAULT_NWORDS,
            rounds: MAX_ROUNDS,
            holders: HolderKind::ALL.to_vec(),
            color: true,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, BenchError> {
        let config: BenchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, BenchError> {
        let content = fs::read_to_string(path).map_err(|err| BenchError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.nwords == 0 {
            return Err(BenchError::invalid_config("nwords", "must be greater than 0"));
        }
        if self.rounds == 0 || self.rounds > MAX_ROUNDS {
            return Err(BenchError::invalid_config(
                "rounds",
                format!("must be between 1 and {MAX_ROUNDS}, got {}", self.rounds),
            ));
        }
        if self.holders.is_empty() {
            return Err(BenchError::invalid_config("holders", "at least one holder is required"));
        }
        Ok(())
    }

    /// Parses a comma separated list such as `AS,LQ`.
    pub fn parse_holders(list: &str) -> Result<Vec<HolderKind>, BenchError> {
        list.split(',')
            .filter(|tag| !tag.trim().is_empty())
            .map(|tag| HolderKind::from_tag(tag).ok_or_else(|| BenchError::UnknownHolder(tag.trim().to_string())))
            .collect()
    }
}
