//! Unit tests for step registration and dispatch.

mod dispatcher_tests;
