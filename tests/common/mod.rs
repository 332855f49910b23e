// Shared test utilities for the integration tests

pub mod harness;
pub mod host;
