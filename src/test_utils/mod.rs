//! Shared test utilities
//!
//! Fixtures for the platforms the resolver is exercised against and
//! assertions over resolved package sets.

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
