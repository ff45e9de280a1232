//! Resolution of the location and group a call is scoped to.

use crate::config::Config;
use crate::errors::{CommunityError, Identifier};
use crate::request::{Method, Request};

/// Identifiers resolved for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub location_id: String,
    pub group_id: String,
}

/// Pick the effective identifiers for a call.
///
/// A per-call value wins over the configured default. An empty per-call
/// value is treated as not passed.
pub fn resolve(
    location_id: Option<&str>,
    group_id: Option<&str>,
    config: &Config,
) -> Result<CallContext, CommunityError> {
    let location_id = pick(location_id, config.default_location_id.as_deref())
        .ok_or(CommunityError::MissingIdentifier(Identifier::Location))?;
    let group_id = pick(group_id, config.default_group_id.as_deref())
        .ok_or(CommunityError::MissingIdentifier(Identifier::Group))?;

    Ok(CallContext {
        location_id: location_id.to_string(),
        group_id: group_id.to_string(),
    })
}

fn pick<'a>(call: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
    call.filter(|v| !v.is_empty())
        .or(default.filter(|v| !v.is_empty()))
}

impl CallContext {
    /// Path segments under `/{location}/groups/{group}`.
    pub fn segments(&self, rest: &[&str]) -> Vec<String> {
        let mut segments = vec![
            self.location_id.clone(),
            "groups".to_string(),
            self.group_id.clone(),
        ];
        segments.extend(rest.iter().map(|s| s.to_string()));
        segments
    }

    /// A request under this context's group, with the `x-location-id`
    /// header set to the resolved location.
    pub fn request(&self, method: Method, rest: &[&str]) -> Request {
        Request::new(method, self.segments(rest)).location(self.location_id.clone())
    }
}
