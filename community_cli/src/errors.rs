use std::fmt;
use std::process::ExitCode;

use community_core::CommunityError;
use community_mcp::ServerError;

/// Defines the errors that end the process.
#[derive(Debug)]
pub enum CliError {
    Config(CommunityError),
    Runtime(std::io::Error),
    Server(ServerError),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Config(_) => ExitCode::from(2),
            CliError::Runtime(_) | CliError::Server(_) => ExitCode::FAILURE,
        }
    }
}

impl From<CommunityError> for CliError {
    fn from(err: CommunityError) -> Self {
        CliError::Config(err)
    }
}

impl From<ServerError> for CliError {
    fn from(err: ServerError) -> Self {
        CliError::Server(err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "Invalid configuration: {}", err),
            CliError::Runtime(err) => write!(f, "Failed to create async runtime: {}", err),
            CliError::Server(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}
