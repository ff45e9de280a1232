mod helpers;

use community_core::{Method, Request};
use serde_json::Value;
use community_mcp::tools::feeds::{
    get_channel_pinned_posts, get_channel_posts, get_home_pinned_posts, get_post,
    get_posts_by_user, get_public_posts, get_user_home_timeline,
};
use community_mcp::tools::{
    GetChannelPinnedPostsParams, GetChannelPostsParams, GetHomePinnedPostsParams, GetPostParams,
    GetPostsByUserParams, GetPublicPostsParams, GetUserHomeTimelineParams, Scope,
};
use helpers::{StubGateway, config_with_defaults, config_without_defaults, default_scope};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_get_channel_posts_request() {
        let gateway = StubGateway::new();
        let params = GetChannelPostsParams {
            scope: default_scope(),
            channel_id: "ch1".to_string(),
            limit: Some(20.0),
            offset: Some(0.0),
        };

        get_channel_posts(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.path(),
            "/loc_default/groups/grp_default/channels/ch1/posts"
        );
        assert_eq!(request.query.pairs(), pairs(&[("limit", "20"), ("offset", "0")]));
        assert_eq!(request.body, None);
        assert_eq!(request.location_id.as_deref(), Some("loc_default"));
    }

    #[tokio::test]
    async fn test_get_channel_posts_omits_absent_paging() {
        let gateway = StubGateway::new();
        let params = GetChannelPostsParams {
            scope: default_scope(),
            channel_id: "ch1".to_string(),
            limit: None,
            offset: None,
        };

        get_channel_posts(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        assert!(gateway.single_request().query.is_empty());
    }

    #[tokio::test]
    async fn test_get_post_request() {
        let gateway = StubGateway::responding(json!({"id": "p1"}));
        let params = GetPostParams {
            scope: default_scope(),
            post_id: "p1".to_string(),
        };

        let result = get_post(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        assert_eq!(result, json!({"id": "p1"}));
        assert_eq!(
            gateway.single_request(),
            Request::new(
                Method::Get,
                ["loc_default", "groups", "grp_default", "posts", "p1"]
            )
            .location("loc_default")
        );
    }

    #[tokio::test]
    async fn test_get_public_posts_request() {
        let gateway = StubGateway::new();
        let params = GetPublicPostsParams {
            scope: default_scope(),
            limit: Some(5.0),
            offset: None,
        };

        get_public_posts(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path(), "/loc_default/groups/grp_default/public/posts");
        assert_eq!(request.query.pairs(), pairs(&[("limit", "5")]));
    }

    #[tokio::test]
    async fn test_get_posts_by_user_request() {
        let gateway = StubGateway::new();
        let params = GetPostsByUserParams {
            scope: default_scope(),
            user_id: Some("u1".to_string()),
            limit: None,
            offset: Some(10.0),
        };

        get_posts_by_user(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.path(), "/loc_default/groups/grp_default/posts");
        assert_eq!(request.query.pairs(), pairs(&[("userId", "u1"), ("offset", "10")]));
    }

    #[tokio::test]
    async fn test_get_posts_by_user_sends_empty_user_id() {
        let gateway = StubGateway::new();
        let params = GetPostsByUserParams {
            scope: default_scope(),
            user_id: Some(String::new()),
            limit: None,
            offset: None,
        };

        get_posts_by_user(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        assert_eq!(gateway.single_request().query.pairs(), pairs(&[("userId", "")]));
    }

    #[tokio::test]
    async fn test_get_user_home_timeline_request() {
        let gateway = StubGateway::new();
        let params = GetUserHomeTimelineParams {
            scope: default_scope(),
            user_id: "u42".to_string(),
            limit: Some(3.0),
            offset: Some(6.0),
        };

        get_user_home_timeline(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.path(),
            "/loc_default/groups/grp_default/u42/home-timeline"
        );
        assert_eq!(request.query.pairs(), pairs(&[("limit", "3"), ("offset", "6")]));
    }

    #[tokio::test]
    async fn test_get_channel_pinned_posts_request() {
        let gateway = StubGateway::new();
        let params = GetChannelPinnedPostsParams {
            scope: default_scope(),
            channel_id: "ch9".to_string(),
        };

        get_channel_pinned_posts(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.path(),
            "/loc_default/groups/grp_default/channels/ch9/posts/pinned"
        );
    }

    #[tokio::test]
    async fn test_get_home_pinned_posts_request() {
        let gateway = StubGateway::new();
        let params = GetHomePinnedPostsParams {
            scope: default_scope(),
        };

        get_home_pinned_posts(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path(), "/loc_default/groups/grp_default/posts/pinned");
    }

    #[tokio::test]
    async fn test_call_scope_overrides_defaults() {
        let gateway = StubGateway::new();
        let params = GetPostParams {
            scope: Scope::new("loc_call", "grp_call"),
            post_id: "p1".to_string(),
        };

        get_post(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.path(), "/loc_call/groups/grp_call/posts/p1");
        // Header follows the resolved location, not the configured default.
        assert_eq!(request.location_id.as_deref(), Some("loc_call"));
    }

    #[tokio::test]
    async fn test_missing_location_skips_network() {
        let gateway = StubGateway::new();
        let params = GetHomePinnedPostsParams {
            scope: default_scope(),
        };

        let error = get_home_pinned_posts(&gateway, &config_without_defaults(), &params)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("locationId"));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_group_skips_network() {
        let gateway = StubGateway::new();
        let params = GetPublicPostsParams {
            scope: Scope {
                location_id: Some("loc_call".to_string()),
                group_id: None,
            },
            limit: None,
            offset: None,
        };

        let error = get_public_posts(&gateway, &config_without_defaults(), &params)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("groupId"));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_identifier_stays_in_one_segment() {
        let gateway = StubGateway::new();
        let params = GetPostParams {
            scope: default_scope(),
            post_id: "../../other/x?admin=1".to_string(),
        };

        get_post(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(
            request.segments,
            vec![
                "loc_default",
                "groups",
                "grp_default",
                "posts",
                "../../other/x?admin=1",
            ]
        );
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_whole_number_paging_from_json() {
        let params: GetChannelPostsParams = serde_json::from_value(json!({
            "channelId": "ch1",
            "limit": 10.0,
            "offset": 0
        }))
        .unwrap();
        let gateway = StubGateway::new();

        get_channel_posts(&gateway, &config_with_defaults(), &params)
            .await
            .unwrap();

        assert_eq!(
            gateway.single_request().query.pairs(),
            pairs(&[("limit", "10"), ("offset", "0")])
        );
    }

    #[test]
    fn test_paging_rejects_non_numbers() {
        let result = serde_json::from_value::<GetPublicPostsParams>(json!({
            "limit": "ten"
        }));
        assert!(result.is_err());

        let params: GetPublicPostsParams =
            serde_json::from_value(Value::Object(Default::default())).unwrap();
        assert_eq!(params.limit, None);
        assert_eq!(params.offset, None);
    }
}
