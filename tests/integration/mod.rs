//! Integration tests for the coverpick catalog, stores and CLI

mod cli_flow;
mod cli_parse;
mod resolution_properties;
mod selection_scenarios;
mod support;
