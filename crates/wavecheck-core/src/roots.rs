//! Root registry: per-call resolution of configured roots.
//!
//! Roots are resolved fresh on every call so configuration or filesystem
//! changes are picked up immediately; there is no persistent cache.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::AuditConfig;
use crate::error::{Result, WavecheckError};
use crate::path;

/// A configured root with its path resolved and existence probed.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRoot {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub path: PathBuf,
    pub exists: bool,
    pub exclude: Vec<String>,
}

/// Resolve every configured root against the workspace base directory.
///
/// A root whose path cannot be probed is reported as `exists: false`, never
/// as an error; only an empty root list fails.
pub fn resolve_roots(config: &AuditConfig, workspace_base: &Path) -> Result<Vec<ResolvedRoot>> {
    if config.roots.is_empty() {
        return Err(WavecheckError::NoRoots);
    }
    Ok(config
        .roots
        .iter()
        .map(|root| {
            let absolute = path::to_absolute(&root.path, Some(workspace_base));
            let exists = std::fs::metadata(&absolute)
                .map(|m| m.is_dir())
                .unwrap_or(false);
            ResolvedRoot {
                id: root.id.clone(),
                kind: root.kind.clone(),
                path: absolute,
                exists,
                exclude: root.exclude.clone(),
            }
        })
        .collect())
}

/// Look up a resolved root by id.
pub fn find_root<'a>(roots: &'a [ResolvedRoot], id: &str) -> Option<&'a ResolvedRoot> {
    roots.iter().find(|root| root.id == id)
}
