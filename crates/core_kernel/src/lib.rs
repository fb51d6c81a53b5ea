//! Core Kernel - Foundational types and utilities for the car insurance system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers for cars, owners, policies, claims, and expirations
//! - Temporal types for business-timezone date handling
//! - Port abstractions shared by all store adapters

pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use temporal::{Timezone, DateRange, TemporalError};
pub use identifiers::{CarId, OwnerId, PolicyId, ClaimId, ExpirationId};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
