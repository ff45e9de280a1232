//! MCP server command implementation.

use community_core::Config;
use community_mcp::CommunityMcpServer;
use log::info;

use crate::errors::CliError;

/// Start the MCP server on stdio.
pub fn serve(config: Config) -> Result<(), CliError> {
    // Create a tokio runtime for the async MCP server
    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;

    rt.block_on(async {
        let server = CommunityMcpServer::new(config);
        info!("mcp-ghl-community server started");

        // Serve over stdio (blocks until connection closes)
        server.serve_stdio().await.map_err(CliError::from)
    })
}
