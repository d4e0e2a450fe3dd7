//! MA Beach Agent MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that answers
//! questions about Massachusetts beach closures and tide conditions. It
//! reads a local closure dataset, calls the Nominatim geocoding and Marea
//! tide-prediction services, and tolerates misspelled beach names through
//! approximate string matching.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **closures**: the closure dataset and fuzzy name lookup
//!   - **marine**: geocoding and tide clients
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: data resources that can be read by clients
//!   - **prompts**: prompt templates for consistent interactions
//!
//! # Example
//!
//! ```rust,no_run
//! use beach_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
