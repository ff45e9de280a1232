//! Lists the tools the server exposes without touching the network.

use community_mcp::CommunityMcpServer;

pub fn list_tools() {
    let mut tools = CommunityMcpServer::catalog();
    tools.sort_by(|a, b| a.name.cmp(&b.name));

    for tool in tools {
        let description = tool.description.as_deref().unwrap_or_default();
        println!("{:<26} {}", tool.name, description);
    }
}
