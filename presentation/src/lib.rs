//! Presentation layer for weather-vibes
//!
//! This crate contains the CLI definitions, console formatters, progress
//! reporters, and the HTTP API.

pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use server::{ServerError, ServerState, build_router, serve};
