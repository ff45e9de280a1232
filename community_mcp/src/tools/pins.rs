//! Pinning and comment moderation tools.
//!
//! All of these PATCH the channel post with a single `action`.

use community_core::{CommunityError, Config, Gateway};
use rmcp::schemars;
use serde::Deserialize;
use serde_json::{Value, json};

use super::posts::PostAction;
use super::Scope;

/// Parameters shared by the pin and unpin tools.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PinPostParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Channel ID the post belongs to
    pub channel_id: String,
    /// Post ID to pin or unpin
    pub post_id: String,
}

/// Parameters for the toggle_post_comments tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TogglePostCommentsParams {
    #[serde(flatten)]
    pub scope: Scope,
    /// Channel ID the post belongs to
    pub channel_id: String,
    /// Post ID
    pub post_id: String,
    /// true to enable comments, false to disable
    pub enable: bool,
}

impl TogglePostCommentsParams {
    pub fn action(&self) -> PostAction {
        if self.enable {
            PostAction::EnableComments
        } else {
            PostAction::DisableComments
        }
    }
}

/// PATCH `/channels/{channelId}/posts/{postId}` with `{ "action": ... }`.
async fn patch_action<G: Gateway>(
    gateway: &G,
    config: &Config,
    scope: &Scope,
    channel_id: &str,
    post_id: &str,
    action: PostAction,
) -> Result<Value, CommunityError> {
    let context = scope.resolve(config)?;
    gateway
        .patch(
            &context,
            &["channels", channel_id, "posts", post_id],
            Some(json!({ "action": action })),
        )
        .await
}

/// Apply a pin or unpin action to a channel post.
pub async fn apply_pin<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &PinPostParams,
    action: PostAction,
) -> Result<Value, CommunityError> {
    patch_action(
        gateway,
        config,
        &params.scope,
        &params.channel_id,
        &params.post_id,
        action,
    )
    .await
}

pub async fn pin_post_to_channel<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &PinPostParams,
) -> Result<Value, CommunityError> {
    apply_pin(gateway, config, params, PostAction::PinToChannel).await
}

pub async fn pin_post_to_home<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &PinPostParams,
) -> Result<Value, CommunityError> {
    apply_pin(gateway, config, params, PostAction::PinToHome).await
}

pub async fn unpin_post_from_channel<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &PinPostParams,
) -> Result<Value, CommunityError> {
    apply_pin(gateway, config, params, PostAction::UnpinFromChannel).await
}

pub async fn unpin_post_from_home<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &PinPostParams,
) -> Result<Value, CommunityError> {
    apply_pin(gateway, config, params, PostAction::UnpinFromHome).await
}

pub async fn toggle_post_comments<G: Gateway>(
    gateway: &G,
    config: &Config,
    params: &TogglePostCommentsParams,
) -> Result<Value, CommunityError> {
    patch_action(
        gateway,
        config,
        &params.scope,
        &params.channel_id,
        &params.post_id,
        params.action(),
    )
    .await
}
