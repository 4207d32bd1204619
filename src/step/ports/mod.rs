//! Port contracts for step resolution.
//!
//! Ports define the interface the dispatcher needs from a step table;
//! adapters decide how the table is stored.

pub mod registry;

pub use registry::{StepMatch, StepRegistry, StepRegistryError, StepRegistryResult};
