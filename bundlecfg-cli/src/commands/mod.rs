//! CLI command implementations.
//!
//! - `config`: List, show, set or delete settings
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod config;

pub use completions::CompletionsCommand;
pub use config::ConfigCommand;
