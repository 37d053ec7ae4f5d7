//! PayMo Domain Layer
//!
//! This crate contains the core value types for the PayMo trust verifier and
//! the trait interface the graph layer implements. It keeps its dependency
//! footprint small: calendar arithmetic and error derives only.
//!
//! ## Key Concepts
//!
//! - **Party**: an opaque integer identifying a user of the payment network
//! - **Transaction Record**: one payer/payee pair with an optional timestamp
//! - **Verdict**: `trusted` or `unverified`, one per streamed record
//! - **Graph Store**: the adjacency relation between parties
//!
//! ## Architecture
//!
//! - Pure value types and parsing only
//! - Graph and traversal implementations live in `paymo-store`
//! - Strategies and the pipeline live in `paymo-verifier`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod party;
pub mod record;
pub mod timestamp;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use party::{PartyId, PartyPair};
pub use record::{RecordError, TransactionRecord};
pub use timestamp::{Timestamp, TimestampError};
pub use traits::GraphStore;
pub use verdict::Verdict;
