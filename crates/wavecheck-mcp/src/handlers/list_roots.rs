//! list_roots handler

use crate::errors;
use crate::server::WavecheckServer;
use rmcp::{model::*, ErrorData as McpError};
use serde_json::json;
use wavecheck_core::roots;

/// Report the configured roots as resolved right now, together with the
/// effective limits and filters. Resolution is fresh per call, so a root
/// created or deleted since the last call shows up immediately.
pub(crate) async fn list_roots(server: &WavecheckServer) -> Result<CallToolResult, McpError> {
    let config = server.context.config.clone();
    let workspace = server.context.workspace_root.clone();

    let resolved = tokio::task::spawn_blocking(move || roots::resolve_roots(&config, &workspace))
        .await
        .map_err(|e| errors::internal_error(format!("Root resolution task panicked: {e}")))?
        .map_err(errors::from_core_error)?;

    let config = &server.context.config;
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string(&json!({
            "roots": resolved,
            "limits": {
                "max_file_bytes": config.limits.max_file_bytes,
                "max_hits": config.limits.max_hits,
                "follow_symlinks": config.limits.follow_symlinks,
            },
            "exclude": config.exclude,
            "include_extensions": config.include_extensions,
        }))
        .map_err(errors::from_display)?,
    )]))
}
