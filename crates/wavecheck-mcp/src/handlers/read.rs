//! read handler
//!
//! Validation happens before any filesystem access: an empty, absolute, or
//! parent-traversing rel_path is rejected up front. Containment is then
//! checked against the root's *real* path, and when symlink following is
//! disabled a target whose real path differs from the literal join of real
//! root and rel_path is refused as a policy violation.

use super::types::ReadArgs;
use crate::errors;
use crate::server::WavecheckServer;
use rmcp::{model::*, ErrorData as McpError};
use std::path::{Path, PathBuf};
use wavecheck_core::config::AuditConfig;
use wavecheck_core::{filter, path, read, roots, WavecheckError};

#[derive(Debug, serde::Serialize)]
pub struct ReadOutput {
    pub root_id: String,
    pub abs_path: String,
    pub rel_path: String,
    pub truncated: bool,
    pub text: String,
}

pub(crate) async fn read(
    server: &WavecheckServer,
    args: ReadArgs,
) -> Result<CallToolResult, McpError> {
    let rel = args.rel_path.trim().to_string();
    if rel.is_empty() {
        return Err(errors::invalid_input("rel_path cannot be empty"));
    }
    let requested = Path::new(&rel);
    if path::has_absolute_or_rooted_component(requested) {
        return Err(errors::path_escape("rel_path cannot be absolute or rooted"));
    }
    if path::has_parent_component(requested) {
        return Err(errors::path_escape("rel_path cannot contain .."));
    }

    let config = server.context.config.clone();
    let workspace = server.context.workspace_root.clone();
    let max_bytes = args
        .max_bytes
        .filter(|n| *n > 0)
        .unwrap_or(server.context.config.limits.max_file_bytes);
    let root_id = args.root_id;

    let output = tokio::task::spawn_blocking(move || {
        read_in_root(&config, &workspace, &root_id, &rel, max_bytes)
    })
    .await
    .map_err(|e| errors::internal_error(format!("Read task panicked: {e}")))?
    .map_err(errors::from_core_error)?;

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string(&output).map_err(errors::from_display)?,
    )]))
}

fn read_in_root(
    config: &AuditConfig,
    workspace: &Path,
    root_id: &str,
    rel: &str,
    max_bytes: u64,
) -> wavecheck_core::Result<ReadOutput> {
    let resolved = roots::resolve_roots(config, workspace)?;
    let root = roots::find_root(&resolved, root_id)
        .ok_or_else(|| WavecheckError::UnknownRoot(root_id.to_string()))?;
    if !root.exists {
        return Err(WavecheckError::RootUnavailable {
            id: root.id.clone(),
            path: root.path.clone(),
        });
    }

    let joined = root.path.join(rel);
    if filter::should_exclude(&joined, &config.exclude, &root.exclude) {
        return Err(WavecheckError::PathExcluded(PathBuf::from(rel)));
    }
    if !joined.exists() {
        return Err(WavecheckError::NotFound(format!(
            "'{rel}' not found under root '{root_id}'"
        )));
    }

    let real = path::check_real_containment(&root.path, &joined)?;
    if !config.limits.follow_symlinks {
        let real_root = std::fs::canonicalize(&root.path)?;
        if real != real_root.join(rel) {
            return Err(WavecheckError::SymlinkPolicy(format!(
                "'{rel}' resolves through a symbolic link and following is disabled"
            )));
        }
    }

    let bounded = read::read_file_bounded(&real, max_bytes)?;
    Ok(ReadOutput {
        root_id: root.id.clone(),
        abs_path: real.to_string_lossy().replace('\\', "/"),
        rel_path: rel.to_string(),
        truncated: bounded.truncated,
        text: bounded.text,
    })
}
