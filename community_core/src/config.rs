//! Process-wide configuration.

use crate::errors::CommunityError;

/// Base address of the communities REST API.
pub const DEFAULT_BASE_URL: &str = "https://services.leadconnectorhq.com/communities";

/// Settings read once at startup and shared read-only afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub default_location_id: Option<String>,
    pub default_group_id: Option<String>,
    pub base_url: String,
}

impl Config {
    /// Build a configuration from raw settings.
    ///
    /// The token is mandatory. Empty identifier defaults count as unset.
    pub fn new(
        token: impl Into<String>,
        default_location_id: Option<String>,
        default_group_id: Option<String>,
    ) -> Result<Self, CommunityError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(CommunityError::ConfigurationMissing("GHL_TOKEN"));
        }

        Ok(Self {
            token,
            default_location_id: non_empty(default_location_id),
            default_group_id: non_empty(default_group_id),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the gateway at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

// Keeps the token out of debug logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("default_location_id", &self.default_location_id)
            .field("default_group_id", &self.default_group_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
