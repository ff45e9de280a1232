//! Core MCP server implementation for GHL communities.

use std::sync::Arc;

use community_core::{Config, RestGateway};
use log::debug;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::wrapper::Parameters,
    model::*, tool, tool_handler, tool_router, transport::stdio,
};

use crate::tools::{
    CreatePostParams, DeletePostParams, GetChannelPinnedPostsParams, GetChannelPostsParams,
    GetHomePinnedPostsParams, GetPostParams, GetPostsByUserParams, GetPublicPostsParams,
    GetUserHomeTimelineParams, MarkPostsReadBulkParams, PinPostParams, TogglePostCommentsParams,
    UpdatePostChannelParams, UpdatePostParams, UpdatePostStatusParams, envelope, feeds, pins,
    posts,
};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server for GHL communities.
///
/// Exposes post, pin and channel operations as MCP tools. Each tool call
/// turns into exactly one request against the communities API.
#[derive(Clone)]
pub struct CommunityMcpServer {
    config: Arc<Config>,
    gateway: RestGateway,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<CommunityMcpServer>,
}

#[tool_router]
impl CommunityMcpServer {
    /// Create a new MCP server from the startup configuration.
    pub fn new(config: Config) -> Self {
        debug!("Creating MCP server: {:?}", config);
        let gateway = RestGateway::new(&config);

        Self {
            config: Arc::new(config),
            gateway,
            tool_router: Self::tool_router(),
        }
    }

    /// Every tool this server exposes, with its description and input schema.
    ///
    /// Needs no configuration, so the catalog can be listed without a token.
    pub fn catalog() -> Vec<Tool> {
        Self::tool_router().list_all()
    }

    #[tool(description = "Get posts from a specific channel")]
    async fn get_channel_posts(
        &self,
        Parameters(params): Parameters<GetChannelPostsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_channel_posts, channel_id={}", params.channel_id);
        Ok(envelope(
            feeds::get_channel_posts(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Get a single post by ID")]
    async fn get_post(
        &self,
        Parameters(params): Parameters<GetPostParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_post, post_id={}", params.post_id);
        Ok(envelope(
            feeds::get_post(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Get public posts for a group")]
    async fn get_public_posts(
        &self,
        Parameters(params): Parameters<GetPublicPostsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_public_posts");
        Ok(envelope(
            feeds::get_public_posts(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Get posts filtered by user")]
    async fn get_posts_by_user(
        &self,
        Parameters(params): Parameters<GetPostsByUserParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_posts_by_user, user_id={:?}", params.user_id);
        Ok(envelope(
            feeds::get_posts_by_user(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Get home timeline for a specific user")]
    async fn get_user_home_timeline(
        &self,
        Parameters(params): Parameters<GetUserHomeTimelineParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_user_home_timeline, user_id={}", params.user_id);
        Ok(envelope(
            feeds::get_user_home_timeline(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Get pinned posts for a specific channel")]
    async fn get_channel_pinned_posts(
        &self,
        Parameters(params): Parameters<GetChannelPinnedPostsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: get_channel_pinned_posts, channel_id={}",
            params.channel_id
        );
        Ok(envelope(
            feeds::get_channel_pinned_posts(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Get pinned posts for the group home feed")]
    async fn get_home_pinned_posts(
        &self,
        Parameters(params): Parameters<GetHomePinnedPostsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_home_pinned_posts");
        Ok(envelope(
            feeds::get_home_pinned_posts(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Create a new post in a channel")]
    async fn create_post(
        &self,
        Parameters(params): Parameters<CreatePostParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: create_post, channel_id={}, body_len={}",
            params.channel_id,
            params.body.len()
        );
        Ok(envelope(
            posts::create_post(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Update an existing post's content")]
    async fn update_post(
        &self,
        Parameters(params): Parameters<UpdatePostParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_post, channel_id={}, post_id={}",
            params.channel_id, params.post_id
        );
        Ok(envelope(
            posts::update_post(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Move a post to a different channel")]
    async fn update_post_channel(
        &self,
        Parameters(params): Parameters<UpdatePostChannelParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_post_channel, post_id={}, new_channel_id={}",
            params.post_id, params.new_channel_id
        );
        Ok(envelope(
            posts::update_post_channel(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Update the live status of a post (e.g. draft, published)")]
    async fn update_post_status(
        &self,
        Parameters(params): Parameters<UpdatePostStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_post_status, post_id={}, status={}",
            params.post_id, params.status
        );
        Ok(envelope(
            posts::update_post_status(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Pin a post to its channel")]
    async fn pin_post_to_channel(
        &self,
        Parameters(params): Parameters<PinPostParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: pin_post_to_channel, post_id={}", params.post_id);
        Ok(envelope(
            pins::pin_post_to_channel(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Pin a post to the group home feed")]
    async fn pin_post_to_home(
        &self,
        Parameters(params): Parameters<PinPostParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: pin_post_to_home, post_id={}", params.post_id);
        Ok(envelope(
            pins::pin_post_to_home(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Unpin a post from its channel")]
    async fn unpin_post_from_channel(
        &self,
        Parameters(params): Parameters<PinPostParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: unpin_post_from_channel, post_id={}", params.post_id);
        Ok(envelope(
            pins::unpin_post_from_channel(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Unpin a post from the group home feed")]
    async fn unpin_post_from_home(
        &self,
        Parameters(params): Parameters<PinPostParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: unpin_post_from_home, post_id={}", params.post_id);
        Ok(envelope(
            pins::unpin_post_from_home(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Enable or disable comments on a post")]
    async fn toggle_post_comments(
        &self,
        Parameters(params): Parameters<TogglePostCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: toggle_post_comments, post_id={}, enable={}",
            params.post_id, params.enable
        );
        Ok(envelope(
            pins::toggle_post_comments(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Delete a post")]
    async fn delete_post(
        &self,
        Parameters(params): Parameters<DeletePostParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: delete_post, post_id={}", params.post_id);
        Ok(envelope(
            posts::delete_post(&self.gateway, &self.config, &params).await,
        ))
    }

    #[tool(description = "Mark multiple posts as read in bulk")]
    async fn mark_posts_read_bulk(
        &self,
        Parameters(params): Parameters<MarkPostsReadBulkParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: mark_posts_read_bulk, count={}", params.post_ids.len());
        Ok(envelope(
            posts::mark_posts_read_bulk(&self.gateway, &self.config, &params).await,
        ))
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for CommunityMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "GHL communities MCP server. Use tools to read feeds and to create, edit, pin \
                 and moderate posts. Every tool accepts optional locationId and groupId; when \
                 omitted they fall back to GHL_LOCATION_ID and GHL_GROUP_ID."
                    .into(),
            ),
        }
    }
}
