//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! car insurance test suite.
//!
//! # Modules
//!
//! - `memory`: In-memory store implementing both store ports
//! - `fixtures`: Pre-built seeded test data for common scenarios
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators

pub mod memory;
pub mod fixtures;
pub mod builders;
pub mod generators;

pub use memory::*;
pub use fixtures::*;
pub use builders::*;
pub use generators::*;
