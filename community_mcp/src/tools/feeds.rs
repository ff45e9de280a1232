//! Read-only feed tools: channel posts, single posts, timelines and pinned lists.

use community_core::{CommunityError, Config, Gateway, Query};
use rmcp::schemars;
use serde::Deserialize;
use serde_json::Value;

use super::{Scope, paging};

/// Parameters for the get_channel_posts tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetChannelPostsParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Channel ID to fetch posts from
    pub channel_id: String,
    /// Max number of posts to return
    pub limit: Option<f64>,
    /// Offset for pagination
    pub offset: Option<f64>,
}

/// Parameters for the get_post tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPostParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Post ID to fetch
    pub post_id: String,
}

/// Parameters for the get_public_posts tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPublicPostsParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Max number of posts to return
    pub limit: Option<f64>,
    /// Offset for pagination
    pub offset: Option<f64>,
}

/// Parameters for the get_posts_by_user tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPostsByUserParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// User ID to filter posts by
    pub user_id: Option<String>,
    /// Max number of posts to return
    pub limit: Option<f64>,
    /// Offset for pagination
    pub offset: Option<f64>,
}

/// Parameters for the get_user_home_timeline tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetUserHomeTimelineParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// User ID for the home timeline
    pub user_id: String,
    /// Max number of posts to return
    pub limit: Option<f64>,
    /// Offset for pagination
    pub offset: Option<f64>,
}

/// Parameters for the get_channel_pinned_posts tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetChannelPinnedPostsParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Channel ID
    pub channel_id: String,
}

/// Parameters for the get_home_pinned_posts tool.
/// Only the location and group overrides apply.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetHomePinnedPostsParams {
    #[serde(flatten)]
    pub scope: Scope,
}

pub async fn get_channel_posts<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &GetChannelPostsParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .get(
            &context,
            &["channels", params.channel_id.as_str(), "posts"],
            paging(params.limit, params.offset),
        )
        .await
}

pub async fn get_post<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &GetPostParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .get(&context, &["posts", params.post_id.as_str()], Query::new())
        .await
}

pub async fn get_public_posts<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &GetPublicPostsParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .get(
            &context,
            &["public", "posts"],
            paging(params.limit, params.offset),
        )
        .await
}

pub async fn get_posts_by_user<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &GetPostsByUserParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    let query = Query::new()
        .param("userId", params.user_id.as_deref())
        .param("limit", params.limit)
        .param("offset", params.offset);
    gateway.get(&context, &["posts"], query).await
}

pub async fn get_user_home_timeline<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &GetUserHomeTimelineParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .get(
            &context,
            &[params.user_id.as_str(), "home-timeline"],
            paging(params.limit, params.offset),
        )
        .await
}

pub async fn get_channel_pinned_posts<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &GetChannelPinnedPostsParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .get(
            &context,
            &["channels", params.channel_id.as_str(), "posts", "pinned"],
            Query::new(),
        )
        .await
}

pub async fn get_home_pinned_posts<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &GetHomePinnedPostsParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .get(&context, &["posts", "pinned"], Query::new())
        .await
}
