mod mcp;
mod tools;

pub use mcp::serve;
pub use tools::list_tools;
