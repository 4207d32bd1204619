//! Storage adapters for step tables.
//!
//! Adapters implement the [`StepRegistry`] port.
//!
//! [`StepRegistry`]: crate::step::ports::StepRegistry
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryStepRegistry`]: ordered table built by explicit
//!   registration calls

pub mod memory;
