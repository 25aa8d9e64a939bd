//! Integration tests for hierarchy building, sources, and the CLI

mod cli_contracts;
mod hierarchy_properties;
mod support;
