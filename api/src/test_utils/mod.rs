//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The store port has a single method; a hand-written store is shorter
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
