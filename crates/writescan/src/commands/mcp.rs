//! MCP command: serve analysis tools over stdio.

use clap::Args;
use rmcp::ServiceExt;
use tracing::{debug, info, instrument};

use crate::server::WritescanServer;

/// Arguments for the `mcp` subcommand.
#[derive(Args, Debug, Default)]
pub struct McpArgs {}

/// Run the MCP server on stdin/stdout until the client disconnects.
#[instrument(name = "cmd_mcp", skip_all)]
pub async fn cmd_mcp(_args: McpArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(?max_input_bytes, "starting MCP server on stdio");

    let server = WritescanServer::new(max_input_bytes);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    info!("MCP server stopped");
    Ok(())
}
