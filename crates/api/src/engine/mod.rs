//! In-memory job tracking.
//!
//! [`JobRegistry`] stores job records; [`JobProcessor`] creates them and
//! schedules the simulated `processing -> done` transition.

pub mod processor;
pub mod registry;

pub use processor::JobProcessor;
pub use registry::JobRegistry;
