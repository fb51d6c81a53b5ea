//! Car Registry Domain
//!
//! This crate implements the record-keeping side of the system: cars and
//! their owners, insurance policies, claims, and the chronological history
//! view. All persistence goes through the [`ports::RegistryStore`] trait so
//! the service can run against PostgreSQL or an in-memory store.

pub mod car;
pub mod policy;
pub mod claim;
pub mod history;
pub mod ports;
pub mod service;
pub mod error;

pub use car::{Car, CarWithOwner, NewCarData, Owner};
pub use claim::{Claim, NewClaimData};
pub use policy::{NewPolicyData, Policy};
pub use history::HistoryEntry;
pub use ports::RegistryStore;
pub use service::RegistryService;
pub use error::RegistryError;
