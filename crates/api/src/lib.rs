//! Studio job API server library.
//!
//! Exposes config, state, error handling, the job engine and routes so
//! integration tests and the binary entrypoint share them.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
