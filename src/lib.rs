//! vgtree: Variable Group Hierarchies
//!
//! Fetches the flat list of variable groups of an Azure DevOps project and
//! arranges them into a tree derived from their `-` delimited names.

pub mod config;
pub mod error;
pub mod expansion;
pub mod links;
pub mod logging;
pub mod record;
pub mod render;
pub mod source;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;
