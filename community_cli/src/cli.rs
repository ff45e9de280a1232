use clap::{Parser, Subcommand};

use community_core::{Config, DEFAULT_BASE_URL};

use crate::errors::CliError;

/// Defines the top-level interface for the community MCP server with clap.
#[derive(Parser, Debug)]
#[command(name = "ghl-community-mcp")]
#[command(version, about = "MCP server for GHL community posts, pins and channels.")]
pub struct CommunityCli {
    /// API token sent as the Token-Id header.
    #[arg(long, env = "GHL_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Default location ID when a tool call omits locationId.
    #[arg(long, env = "GHL_LOCATION_ID", global = true)]
    pub location_id: Option<String>,

    /// Default group ID when a tool call omits groupId.
    #[arg(long, env = "GHL_GROUP_ID", global = true)]
    pub group_id: Option<String>,

    /// Base address of the communities API.
    #[arg(long, env = "GHL_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CommunityCliCommand>,
}

/// Defines the available subcommands. Without one, the server starts.
#[derive(Subcommand, Debug, Clone, Default, PartialEq)]
pub enum CommunityCliCommand {
    /// Serve MCP over stdio.
    #[default]
    Serve,
    /// Print the name and description of every tool.
    Tools,
}

impl CommunityCli {
    /// Build the startup configuration. Fails when no token was given.
    pub fn config(&self) -> Result<Config, CliError> {
        let config = Config::new(
            self.token.clone().unwrap_or_default(),
            self.location_id.clone(),
            self.group_id.clone(),
        )?;
        Ok(config.with_base_url(self.base_url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_serve() {
        let cli = CommunityCli::try_parse_from(["ghl-community-mcp", "--token", "t"]).unwrap();

        assert_eq!(cli.command, None);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_cli_builds_config() {
        let cli = CommunityCli::try_parse_from([
            "ghl-community-mcp",
            "--token",
            "t",
            "--location-id",
            "loc",
            "--group-id",
            "",
            "--base-url",
            "http://localhost:9000/",
            "tools",
        ])
        .unwrap();

        assert_eq!(cli.command, Some(CommunityCliCommand::Tools));
        let config = cli.config().unwrap();
        assert_eq!(config.token, "t");
        assert_eq!(config.default_location_id.as_deref(), Some("loc"));
        assert_eq!(config.default_group_id, None);
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_cli_requires_token() {
        let cli = CommunityCli::try_parse_from(["ghl-community-mcp", "--token", ""]).unwrap();

        assert!(matches!(cli.config(), Err(CliError::Config(_))));
    }
}
