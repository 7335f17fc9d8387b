//! # ecoroute-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the ecoroute workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and holds the closed `Role` and `Industry` vocabularies
//! that the routing tables are keyed by.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
