//! Tooling & Integration Layer
//!
//! Command-line front end over sources, views, and rendering.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
