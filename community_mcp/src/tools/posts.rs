//! Post authoring tools: create, edit, move, publish, delete and mark read.

use community_core::{CommunityError, Config, Gateway};
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::Scope;

/// Actions accepted by the channel post PATCH endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostAction {
    UpdatePost,
    PinToChannel,
    PinToHome,
    UnpinFromChannel,
    UnpinFromHome,
    EnableComments,
    DisableComments,
}

/// Parameters for the create_post tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Channel ID to create the post in
    pub channel_id: String,
    /// Post title
    pub title: Option<String>,
    /// Post body content (HTML supported)
    pub body: String,
    /// Array of media URLs to attach
    pub media_urls: Option<Vec<String>>,
}

/// Parameters for the update_post tool.
///
/// Optional fields are forwarded whenever they are present, even when empty.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Channel ID the post belongs to
    pub channel_id: String,
    /// Post ID to update
    pub post_id: String,
    /// Updated post title
    pub title: Option<String>,
    /// Updated post body content (HTML supported)
    pub body: Option<String>,
    /// Updated media URLs
    pub media_urls: Option<Vec<String>>,
}

/// Parameters for the update_post_channel tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostChannelParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Post ID to move
    pub post_id: String,
    /// Destination channel ID
    pub new_channel_id: String,
}

/// Parameters for the update_post_status tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostStatusParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Post ID
    pub post_id: String,
    /// New status for the post
    pub status: String,
}

/// Parameters for the delete_post tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Post ID to delete
    pub post_id: String,
}

/// Parameters for the mark_posts_read_bulk tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkPostsReadBulkParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Array of post IDs to mark as read
    pub post_ids: Vec<String>,
}

/// JSON body for create_post: `body` always, the rest only when given.
pub fn create_post_body(params: &CreatePostParams) -> Value {
    let mut body = Map::new();
    body.insert("body".into(), json!(params.body));
    if let Some(title) = &params.title {
        body.insert("title".into(), json!(title));
    }
    if let Some(media_urls) = &params.media_urls {
        body.insert("mediaUrls".into(), json!(media_urls));
    }
    Value::Object(body)
}

/// JSON body for update_post: the action plus every field the caller sent.
pub fn update_post_body(params: &UpdatePostParams) -> Value {
    let mut body = Map::new();
    body.insert("action".into(), json!(PostAction::UpdatePost));
    if let Some(title) = &params.title {
        body.insert("title".into(), json!(title));
    }
    if let Some(text) = &params.body {
        body.insert("body".into(), json!(text));
    }
    if let Some(media_urls) = &params.media_urls {
        body.insert("mediaUrls".into(), json!(media_urls));
    }
    Value::Object(body)
}

pub async fn create_post<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &CreatePostParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .post(
            &context,
            &["channels", params.channel_id.as_str(), "posts"],
            Some(create_post_body(params)),
        )
        .await
}

pub async fn update_post<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &UpdatePostParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .patch(
            &context,
            &[
                "channels",
                params.channel_id.as_str(),
                "posts",
                params.post_id.as_str(),
            ],
            Some(update_post_body(params)),
        )
        .await
}

pub async fn update_post_channel<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &UpdatePostChannelParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .post(
            &context,
            &["posts", params.post_id.as_str(), "update-channel"],
            Some(json!({ "channelId": params.new_channel_id })),
        )
        .await
}

pub async fn update_post_status<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &UpdatePostStatusParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .patch(
            &context,
            &["posts", params.post_id.as_str(), "live-status"],
            Some(json!({ "status": params.status })),
        )
        .await
}

pub async fn delete_post<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &DeletePostParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .delete(&context, &["posts", params.post_id.as_str()])
        .await
}

pub async fn mark_posts_read_bulk<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &MarkPostsReadBulkParams,
) -> Result<Value, CommunityError> {
    let context = params.scope.resolve(config)?;
    gateway
        .post(
            &context,
            &["posts", "read-bulk"],
            Some(json!({ "postIds": params.post_ids })),
        )
        .await
}
