//! search handler

use super::types::SearchArgs;
use crate::errors;
use crate::server::WavecheckServer;
use rmcp::{model::*, ErrorData as McpError};
use serde_json::json;
use wavecheck_core::search::SearchRequest;

pub(crate) async fn search(
    server: &WavecheckServer,
    args: SearchArgs,
) -> Result<CallToolResult, McpError> {
    let query = args.query.trim().to_string();
    if query.is_empty() {
        return Err(errors::invalid_input(
            "Search query cannot be empty or whitespace-only",
        ));
    }

    let request = SearchRequest {
        query,
        root_ids: args.root_ids,
        regex: args.regex.unwrap_or(false),
        case_sensitive: args.case_sensitive.unwrap_or(false),
        max_hits: args.max_hits,
    };

    let config = server.context.config.clone();
    let workspace = server.context.workspace_root.clone();
    let blocking_request = request.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        wavecheck_core::search::search(&config, &workspace, &blocking_request)
    })
    .await
    .map_err(|e| errors::internal_error(format!("Search task panicked: {e}")))?
    .map_err(errors::from_core_error)?;

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string(&json!({
            "query": request.query,
            "root_ids": request.root_ids,
            "hits": outcome.hits,
            "scanned_files": outcome.scanned_files,
            "skipped_large_files": outcome.skipped_large_files,
        }))
        .map_err(errors::from_display)?,
    )]))
}
