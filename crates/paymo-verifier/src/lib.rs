//! PayMo Verifier
//!
//! Classifies streamed payments as `trusted` or `unverified` against the
//! payment graph built from a historical batch.
//!
//! ## Strategies
//!
//! 1. **Direct edge**: the two parties have paid each other before
//! 2. **Common neighbor**: some neighbor of the payer has paid the payee
//! 3. **Fixed degree**: bounded search with a budget of 4 rounds
//! 4. **Configurable degree**: bounded search with a caller-chosen budget
//! 5. **Temporal window**: fixed-degree reachability, but only while the
//!    pair's last payment is within the freshness window
//!
//! Every strategy runs on its own copy of the batch state.
//!
//! # Examples
//!
//! ```
//! use paymo_domain::{TransactionRecord, Verdict};
//! use paymo_verifier::{Strategy, Verifier, VerifierConfig};
//!
//! let batch = vec![TransactionRecord::between(1, 2), TransactionRecord::between(2, 3)];
//! let verifier = Verifier::from_batch(&batch, VerifierConfig::default()).unwrap();
//!
//! let stream = vec![TransactionRecord::between(1, 3)];
//! let report = verifier.run(Strategy::CommonNeighbor, &stream);
//! assert_eq!(report.verdicts, vec![Verdict::Trusted]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod strategy;
pub mod temporal;

pub use config::{MalformedPolicy, VerifierConfig};
pub use error::VerifierError;
pub use pipeline::{Pass, PassReport, Verifier};
pub use strategy::{Strategy, FIXED_DEGREE};
pub use temporal::WindowOutcome;
