use std::path::PathBuf;
use wavecheck_core::config::AuditConfig;

/// Per-server configuration snapshot; no process-wide state.
#[derive(Clone, Debug)]
pub struct McpContext {
    pub config: AuditConfig,
    /// Base directory for resolving relative root paths
    pub workspace_root: PathBuf,
}

impl McpContext {
    pub fn new(config: AuditConfig, workspace_root: PathBuf) -> Self {
        Self {
            config,
            workspace_root,
        }
    }
}
