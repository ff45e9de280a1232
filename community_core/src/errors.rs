//! Error types shared by the configuration, resolver and gateway.

use std::fmt;

use crate::request::Method;

/// The two identifiers every community call is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier {
    Location,
    Group,
}

impl Identifier {
    /// Name of the call argument that supplies this identifier.
    pub fn argument(&self) -> &'static str {
        match self {
            Identifier::Location => "locationId",
            Identifier::Group => "groupId",
        }
    }

    /// Name of the environment variable that supplies the default.
    pub fn env_var(&self) -> &'static str {
        match self {
            Identifier::Location => "GHL_LOCATION_ID",
            Identifier::Group => "GHL_GROUP_ID",
        }
    }
}

/// Defines the errors you might encounter calling the communities API.
#[derive(Debug)]
pub enum CommunityError {
    /// A required setting was absent when the configuration was built.
    ConfigurationMissing(&'static str),
    /// Neither the call nor the configuration supplied the identifier.
    MissingIdentifier(Identifier),
    /// The path and query could not form a valid URL.
    InvalidUrl { path: String, message: String },
    /// The remote service answered with a non-success status.
    RemoteRequestFailed {
        method: Method,
        path: String,
        status: u16,
        body: String,
    },
    /// The request never produced a response (DNS, connection reset, ...).
    Transport {
        method: Method,
        path: String,
        source: reqwest::Error,
    },
    /// The remote service answered with success but the body was not JSON.
    InvalidResponse {
        method: Method,
        path: String,
        message: String,
    },
}

impl fmt::Display for CommunityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommunityError::ConfigurationMissing(setting) => {
                write!(f, "{} environment variable is required", setting)
            }
            CommunityError::MissingIdentifier(identifier) => write!(
                f,
                "{} is required (pass it or set {})",
                identifier.argument(),
                identifier.env_var()
            ),
            CommunityError::InvalidUrl { path, message } => {
                write!(f, "Invalid request URL for {}: {}", path, message)
            }
            CommunityError::RemoteRequestFailed {
                method,
                path,
                status,
                body,
            } => write!(f, "{} {} failed ({}): {}", method, path, status, body),
            CommunityError::Transport {
                method,
                path,
                source,
            } => write!(f, "{} {} request error: {}", method, path, source),
            CommunityError::InvalidResponse {
                method,
                path,
                message,
            } => write!(f, "{} {} returned invalid JSON: {}", method, path, message),
        }
    }
}

impl std::error::Error for CommunityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommunityError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}
