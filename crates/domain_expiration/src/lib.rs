//! Policy Expiration Domain
//!
//! The core of the system: given a clock and the business time zone, detect
//! policies whose end date has passed and durably record each expiration
//! exactly once, tolerant of concurrent and duplicate runs.
//!
//! Correctness under concurrency rests on a single mechanism: the store's
//! uniqueness constraint on the expiration record's policy reference. A race
//! between two runs becomes a detectable write conflict; the losing run
//! abandons its whole batch and the next cycle re-selects whatever is still
//! unrecorded. No locks are used or needed.

pub mod record;
pub mod ports;
pub mod processor;
pub mod worker;

pub use record::{ExpiredCandidate, PolicyExpiration};
pub use ports::ExpirationStore;
pub use processor::process_once;
pub use worker::ExpirationWorker;
