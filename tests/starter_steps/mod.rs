//! Step definitions for the starter step behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
