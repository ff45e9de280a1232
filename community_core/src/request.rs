//! Descriptors for outbound calls.

use std::fmt;

use serde_json::Value;

/// HTTP verbs used by the communities API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this verb may carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Query pairs in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter if it has a value.
    ///
    /// `None` is skipped; zero and the empty string are sent.
    pub fn param<V: fmt::Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.0.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One outbound call, built by an operation and consumed by a gateway.
///
/// The path is kept as raw segments. Each one is percent-encoded on its
/// own when the URL is built, so an identifier can never add, remove or
/// escape a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Query,
    pub body: Option<Value>,
    /// Location sent in the `x-location-id` header.
    pub location_id: Option<String>,
}

impl Request {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Query::new(),
            body: None,
            location_id: None,
        }
    }

    /// The path as written in logs and error messages, e.g. `/loc/groups/grp/posts`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }
}
