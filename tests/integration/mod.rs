//! Integration tests for firmware catalog scaffolding

mod catalog_contracts;
mod cli_parse;
mod create_flow;
mod normalize_properties;
mod support;
