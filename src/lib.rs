//! exocatalog - An in-memory exoplanet catalog served over HTTP
//!
//! - [`catalog`]: record model, validation, fuel estimation, store
//! - [`http_server`]: axum transport adapter
//! - [`observability`]: structured logging and counters
//! - [`cli`]: command-line entry points

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
