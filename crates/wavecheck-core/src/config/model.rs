use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::config::consts;
use crate::error::{Result, WavecheckError};

/// wavecheck.toml schema - the host-supplied audit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Ordered list of named roots the tools may read from
    pub roots: Vec<RootConfig>,
    /// Base directory for resolving relative root paths (may be "~"-prefixed)
    #[serde(default)]
    pub workspace: Option<String>,
    /// Global exclusion substrings, matched against separator-normalized paths
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Allowed file extensions without the leading dot; empty allows every file
    #[serde(default)]
    pub include_extensions: Vec<String>,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootConfig {
    pub id: String,
    /// Raw path, possibly "~"-prefixed or relative to the workspace base
    pub path: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    #[serde(default = "default_max_hits")]
    pub max_hits: usize,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
            max_hits: default_max_hits(),
            follow_symlinks: false,
        }
    }
}

fn default_max_file_bytes() -> u64 {
    consts::search::MAX_FILE_BYTES
}

fn default_max_hits() -> usize {
    consts::search::MAX_HITS
}

impl AuditConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| WavecheckError::ConfigParse(format!("{}: {}", path.display(), e)))?;
        let config: AuditConfig =
            toml::from_str(&text).map_err(|e| WavecheckError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on misconfiguration: an empty root list or duplicate root ids.
    /// Unreachable root paths are not an error here; existence is probed per
    /// call by the root registry.
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(WavecheckError::NoRoots);
        }
        let mut seen = HashSet::new();
        for root in &self.roots {
            if root.id.trim().is_empty() {
                return Err(WavecheckError::ConfigInvalidValue {
                    field: "roots.id".to_string(),
                    reason: "root id cannot be empty".to_string(),
                });
            }
            if !seen.insert(root.id.as_str()) {
                return Err(WavecheckError::ConfigInvalidValue {
                    field: "roots.id".to_string(),
                    reason: format!("duplicate root id '{}'", root.id),
                });
            }
        }
        Ok(())
    }
}
