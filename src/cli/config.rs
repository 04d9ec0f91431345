//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::packer::Strategy;

/// Common packing configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Shared capacity for every opened box
    pub capacity: f64,

    /// Placement strategy
    pub strategy: Strategy,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            capacity: 10.0,
            strategy: Strategy::FirstFit,
        }
    }
}
