//! In-memory adapter implementations.

mod registry;

pub use registry::InMemoryStepRegistry;
