//! Application services for step dispatch.
//!
//! Services drive the execution pipeline: resolve each scenario line through
//! the registry port, invoke the handler with the scenario context, and
//! record the outcome.

mod config;
mod dispatcher;

pub use config::DispatchConfig;
pub use dispatcher::StepDispatcher;
