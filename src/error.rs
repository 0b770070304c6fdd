use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Container errors
// =============================================================================

/// Boundary violations reported by the four holders.
///
/// Both variants are caller mistakes: the holder is left exactly as it was
/// before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolderError {
    #[error("Cannot {op} on empty {holder}")]
    EmptyCollection { holder: &'static str, op: &'static str },

    #[error("Cannot {op} on full {holder} (capacity {capacity})")]
    CapacityExceeded {
        holder: &'static str,
        op: &'static str,
        capacity: usize,
    },
}

impl HolderError {
    pub fn empty(holder: &'static str, op: &'static str) -> Self {
        Self::EmptyCollection { holder, op }
    }

    pub fn full(holder: &'static str, op: &'static str, capacity: usize) -> Self {
        Self::CapacityExceeded {
            holder,
            op,
            capacity,
        }
    }

    pub fn is_empty_collection(&self) -> bool {
        matches!(self, Self::EmptyCollection { .. })
    }

    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

// =============================================================================
// Harness errors
// =============================================================================

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Unknown holder tag '{0}' (expected one of AS, LS, AQ, LQ)")]
    UnknownHolder(String),

    #[error(transparent)]
    Holder(#[from] HolderError),
}

impl BenchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = HolderError> = std::result::Result<T, E>;
