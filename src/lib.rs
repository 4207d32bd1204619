//! Stepwise: explicit step-definition registry and dispatcher.
//!
//! This crate binds human-readable "Given/When/Then" sentences to executable
//! handlers through an explicitly constructed registry, and runs scenario
//! lines against it with a per-scenario context.
//!
//! # Modules
//!
//! - [`step`]: patterns, registry, and dispatch
//! - [`starter`]: the starter step set demonstrating precondition, action,
//!   and outcome steps

pub mod starter;
pub mod step;
