use crate::context::McpContext;
use crate::handlers;
use crate::handlers::types::{CheckEventArgs, ReadArgs, SearchArgs};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};

/// MCP server exposing read-only audit tools over the configured roots.
#[derive(Clone)]
pub struct WavecheckServer {
    pub context: McpContext,
    pub tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WavecheckServer {
    pub fn new(context: McpContext) -> Self {
        Self {
            context,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List the configured search roots (resolved paths, existence, exclusions) together with the effective limits and extension filter"
    )]
    pub async fn list_roots(&self) -> Result<CallToolResult, McpError> {
        handlers::list_roots::list_roots(self).await
    }

    #[tool(
        description = "Line-oriented text search across the configured roots. Supports plain substring or regex queries, optional root restriction, and a hit cap with hard early exit"
    )]
    pub async fn search(
        &self,
        Parameters(args): Parameters<SearchArgs>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search::search(self, args).await
    }

    #[tool(
        description = "Read a file from one root, bounded by a byte budget; oversized files are truncated and flagged, never failed"
    )]
    pub async fn read(&self, Parameters(args): Parameters<ReadArgs>) -> Result<CallToolResult, McpError> {
        handlers::read::read(self, args).await
    }

    #[tool(
        description = "Heuristically cross-check whether an audio event is mentioned in requirements, defined in Wwise work units, and referenced in Unity sources"
    )]
    pub async fn check_event(
        &self,
        Parameters(args): Parameters<CheckEventArgs>,
    ) -> Result<CallToolResult, McpError> {
        handlers::check_event::check_event(self, args).await
    }
}

#[tool_handler]
impl ServerHandler for WavecheckServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only audit tools for cross-referenced audio-event artifacts. Use \
                 'list_roots' to discover the configured roots, 'search' for line-oriented text \
                 search, 'read' for bounded single-file reads, and 'check_event' for the \
                 requirements/wwise/unity cross-check."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

impl WavecheckServer {
    /// Serve on stdio until the client disconnects.
    pub async fn run_stdio_server(context: McpContext) -> anyhow::Result<()> {
        let service = Self::new(context).serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }
}
