//! REST gateway for the communities API.
//!
//! Every call is a single attempt: no retries, no timeout beyond the
//! transport default. Non-success statuses are folded into
//! [`CommunityError::RemoteRequestFailed`] with the raw response text.

use std::future::Future;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::Config;
use crate::errors::CommunityError;
use crate::ids::CallContext;
use crate::request::{Method, Query, Request};

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "Token-Id";

/// Header carrying the location a request is scoped to.
pub const LOCATION_HEADER: &str = "x-location-id";

/// Something that can carry a [`Request`] to the communities API.
///
/// `send` is the only required method. The per-verb helpers build the
/// request under a resolved [`CallContext`], so the `x-location-id` header
/// always matches the location in the path.
pub trait Gateway: Send + Sync {
    /// Issue the request and return the parsed JSON response body.
    fn send(&self, request: Request) -> impl Future<Output = Result<Value, CommunityError>> + Send;

    fn get(
        &self,
        context: &CallContext,
        path: &[&str],
        query: Query,
    ) -> impl Future<Output = Result<Value, CommunityError>> + Send {
        self.send(context.request(Method::Get, path).with_query(query))
    }

    fn post(
        &self,
        context: &CallContext,
        path: &[&str],
        body: Option<Value>,
    ) -> impl Future<Output = Result<Value, CommunityError>> + Send {
        let mut request = context.request(Method::Post, path);
        request.body = body;
        self.send(request)
    }

    fn patch(
        &self,
        context: &CallContext,
        path: &[&str],
        body: Option<Value>,
    ) -> impl Future<Output = Result<Value, CommunityError>> + Send {
        let mut request = context.request(Method::Patch, path);
        request.body = body;
        self.send(request)
    }

    fn delete(
        &self,
        context: &CallContext,
        path: &[&str],
    ) -> impl Future<Output = Result<Value, CommunityError>> + Send {
        self.send(context.request(Method::Delete, path))
    }
}

/// Gateway backed by a `reqwest` client.
#[derive(Clone)]
pub struct RestGateway {
    client: Client,
    base_url: String,
    token: String,
}

impl RestGateway {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Build the full URL for a request: base address, one encoded segment
    /// per path element, then any query pairs.
    ///
    /// Empty, `.` and `..` segments are rejected; everything else, including
    /// `/`, `?` and `#`, is percent-encoded inside its own segment.
    pub fn url_for(&self, request: &Request) -> Result<Url, CommunityError> {
        let invalid = |message: String| CommunityError::InvalidUrl {
            path: request.path(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| invalid(format!("base URL {} cannot carry a path", self.base_url)))?;
            path.pop_if_empty();
            for segment in &request.segments {
                if segment.is_empty() || segment == "." || segment == ".." {
                    return Err(invalid(format!("'{}' is not a valid path segment", segment)));
                }
                path.push(segment);
            }
        }

        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in request.query.pairs() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

impl Gateway for RestGateway {
    async fn send(&self, request: Request) -> Result<Value, CommunityError> {
        let url = self.url_for(&request)?;
        let method = request.method;
        debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method.into(), url)
            .header(TOKEN_HEADER, &self.token)
            .header(CONTENT_TYPE, "application/json");

        if let Some(location_id) = &request.location_id {
            builder = builder.header(LOCATION_HEADER, location_id);
        }

        if method.has_body() {
            if let Some(body) = &request.body {
                builder = builder.body(body.to_string());
            }
        }

        let response = builder
            .send()
            .await
            .map_err(|source| transport_error(method, &request.path(), source))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} {} returned {}", method, request.path(), status.as_u16());
            return Err(CommunityError::RemoteRequestFailed {
                method,
                path: request.path(),
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| transport_error(method, &request.path(), source))?;

        serde_json::from_str(&text).map_err(|e| CommunityError::InvalidResponse {
            method,
            path: request.path(),
            message: e.to_string(),
        })
    }
}

fn transport_error(method: Method, path: &str, source: reqwest::Error) -> CommunityError {
    warn!("{} {} transport failure: {}", method, path, source);
    CommunityError::Transport {
        method,
        path: path.to_string(),
        source,
    }
}
