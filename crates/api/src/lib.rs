//! HTTP surface for the response envelopes.
//!
//! Exposes config, state, error mapping and routes so integration tests and
//! the binary entrypoint build the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
