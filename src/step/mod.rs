//! Step registration and dispatch.
//!
//! Binds Gherkin-style sentences to handlers and runs scenario lines against
//! them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Dispatch services in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use stepwise::step::{
//!     adapters::memory::InMemoryStepRegistry,
//!     domain::{Scenario, StepDefinition, StepKind, ensure_eq},
//!     services::{DispatchConfig, StepDispatcher},
//! };
//!
//! let mut registry = InMemoryStepRegistry::<Vec<u32>>::new();
//! registry
//!     .register(
//!         StepDefinition::new(StepKind::When, "push", |numbers: &mut Vec<u32>, arguments| {
//!             let value = arguments.value("value")?;
//!             numbers.push(value.parse().map_err(|_| {
//!                 stepwise::step::domain::AssertionFailure::new("not a number")
//!             })?);
//!             Ok(())
//!         })
//!         .with_pattern("I push {value}"),
//!     )
//!     .expect("pattern is valid");
//! registry
//!     .register(
//!         StepDefinition::new(StepKind::Then, "count", |numbers: &mut Vec<u32>, _| {
//!             ensure_eq(&numbers.len(), &1_usize)
//!         })
//!         .with_pattern("the stack holds one value"),
//!     )
//!     .expect("pattern is valid");
//!
//! let dispatcher = StepDispatcher::new(Arc::new(registry), DispatchConfig::default());
//! let scenario = Scenario::from_lines("push", ["When I push 7", "Then the stack holds one value"])
//!     .expect("lines are well formed");
//! assert!(dispatcher.run(&scenario).is_passed());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
