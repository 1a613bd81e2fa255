//! wavecheck MCP server binary.
//!
//! Usage:
//!   wavecheck-mcp --workspace /path/to/project
//!   wavecheck-mcp --config /path/to/wavecheck.toml
//!
//! Test with the MCP inspector:
//!   npx @modelcontextprotocol/inspector cargo run -p wavecheck-mcp

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use wavecheck_core::config::AuditConfig;
use wavecheck_core::path;
use wavecheck_mcp::{McpContext, WavecheckServer};

/// MCP server for auditing audio-event artifacts across configured roots.
#[derive(Parser, Debug)]
#[command(name = "wavecheck-mcp")]
#[command(version, about)]
struct Args {
    /// Path to wavecheck.toml (defaults to <workspace>/wavecheck.toml)
    #[arg(short, long, env = "WAVECHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Workspace base directory for resolving relative root paths
    #[arg(short, long)]
    workspace: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing goes to stderr; stdout carries the MCP protocol
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;

    let cli_workspace = args
        .workspace
        .map(|dir| path::to_absolute(&dir.to_string_lossy(), Some(&cwd)));
    let config_path = args.config.unwrap_or_else(|| {
        cli_workspace
            .as_deref()
            .unwrap_or(&cwd)
            .join("wavecheck.toml")
    });
    let config = AuditConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    // CLI flag wins over the config's workspace entry; both fall back to cwd
    let workspace_root = cli_workspace.unwrap_or_else(|| {
        config
            .workspace
            .as_deref()
            .map(|dir| path::to_absolute(dir, Some(&cwd)))
            .unwrap_or(cwd)
    });

    tracing::info!(
        roots = config.roots.len(),
        workspace = %workspace_root.display(),
        "starting wavecheck MCP server"
    );
    WavecheckServer::run_stdio_server(McpContext::new(config, workspace_root)).await
}
