//! MCP tool implementations for GHL communities.
//!
//! Each tool declares a typed parameter struct and an async handler that
//! resolves the call's identifiers and makes one
//! [`Gateway`](community_core::Gateway) call. Handlers return a plain
//! `Result`; [`envelope`] turns that
//! into the MCP result once, at the server boundary.

pub mod feeds;
pub mod pins;
pub mod posts;

use community_core::{CallContext, CommunityError, Config, Query, resolve};
use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;
use serde::Deserialize;
use serde_json::Value;

pub use feeds::{
    GetChannelPinnedPostsParams, GetChannelPostsParams, GetHomePinnedPostsParams, GetPostParams,
    GetPostsByUserParams, GetPublicPostsParams, GetUserHomeTimelineParams,
};
pub use pins::{PinPostParams, TogglePostCommentsParams};
pub use posts::{
    CreatePostParams, DeletePostParams, MarkPostsReadBulkParams, PostAction, UpdatePostChannelParams,
    UpdatePostParams, UpdatePostStatusParams,
};

/// Location and group overrides accepted by every tool.
#[derive(Debug, Default, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    /// GHL location ID (falls back to GHL_LOCATION_ID env var)
    #[serde(default)]
    pub location_id: Option<String>,
    /// GHL group ID (falls back to GHL_GROUP_ID env var)
    #[serde(default)]
    pub group_id: Option<String>,
}

impl Scope {
    pub fn new(location_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            location_id: Some(location_id.into()),
            group_id: Some(group_id.into()),
        }
    }

    /// Resolve against the configured defaults.
    pub fn resolve(&self, config: &Config) -> Result<CallContext, CommunityError> {
        resolve(
            self.location_id.as_deref(),
            self.group_id.as_deref(),
            config,
        )
    }
}

/// `limit`/`offset` query pairs, skipping whichever is absent.
fn paging(limit: Option<f64>, offset: Option<f64>) -> Query {
    Query::new()
        .param("limit", limit)
        .param("offset", offset)
}

/// Convert a handler result into the MCP response.
///
/// Success carries the remote JSON pretty-printed; failure carries the error
/// message with the error flag set.
pub fn envelope(result: Result<Value, CommunityError>) -> CallToolResult {
    match result {
        Ok(data) => match serde_json::to_string_pretty(&data) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to format response: {}",
                e
            ))]),
        },
        Err(e) => CallToolResult::error(vec![Content::text(e.to_string())]),
    }
}
