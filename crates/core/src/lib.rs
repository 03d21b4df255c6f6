//! Domain types for the studio job service.
//!
//! Pure data and state-machine logic with no I/O, shared by the API crate
//! and its tests.

pub mod error;
pub mod job;
pub mod types;
