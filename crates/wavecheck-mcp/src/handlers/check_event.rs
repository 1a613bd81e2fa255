//! check_event handler
//!
//! Runs the four heuristic sub-searches as independent blocking tasks and
//! joins them best-effort: a branch that fails (or panics) settles as an
//! absent result and never cancels the others. The unscoped fallback runs
//! unconditionally.

use super::types::CheckEventArgs;
use crate::errors;
use crate::server::WavecheckServer;
use rmcp::{model::*, ErrorData as McpError};
use tokio::task::JoinError;
use wavecheck_core::event;
use wavecheck_core::search::{self, SearchOutcome};

pub(crate) async fn check_event(
    server: &WavecheckServer,
    args: CheckEventArgs,
) -> Result<CallToolResult, McpError> {
    let event_name = args.event_name.trim().to_string();
    if event_name.is_empty() {
        return Err(errors::invalid_input(
            "event_name cannot be empty or whitespace-only",
        ));
    }

    let [requirements, wwise, unity, fallback] = event::event_queries(&event_name).map(|request| {
        let config = server.context.config.clone();
        let workspace = server.context.workspace_root.clone();
        tokio::task::spawn_blocking(move || search::search(&config, &workspace, &request))
    });

    let (requirements, wwise, unity, fallback) =
        tokio::join!(requirements, wwise, unity, fallback);

    let report = event::assemble_report(
        &event_name,
        [
            settle(requirements),
            settle(wwise),
            settle(unity),
            settle(fallback),
        ],
    );

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string(&report).map_err(errors::from_display)?,
    )]))
}

fn settle(
    joined: Result<wavecheck_core::Result<SearchOutcome>, JoinError>,
) -> Option<SearchOutcome> {
    match joined {
        Ok(Ok(outcome)) => Some(outcome),
        Ok(Err(err)) => {
            tracing::debug!("event sub-search failed: {err}");
            None
        }
        Err(err) => {
            tracing::debug!("event sub-search panicked: {err}");
            None
        }
    }
}
