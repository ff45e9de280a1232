//! MCP server for GHL communities.
//!
//! This crate exposes community operations (reading feeds, writing posts,
//! pinning, moderation) as MCP (Model Context Protocol) tools, so that an
//! assistant can act on community content without speaking raw HTTP.

mod server;
pub mod tools;

pub use server::{CommunityMcpServer, ServerError};
