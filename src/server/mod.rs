//! MCP server implementation for the polls application.
//!
//! This module provides the MCP protocol server that exposes the index,
//! detail, results and vote operations through the Model Context Protocol.

pub mod handlers;

pub use handlers::PollsMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the polls MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: PollsMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
