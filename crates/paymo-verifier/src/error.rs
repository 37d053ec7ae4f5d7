//! Error types for verification runs

use paymo_domain::RecordError;
use thiserror::Error;

/// Errors that can occur while configuring or running the verifier
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record could not be parsed and the policy is to fail
    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number in the input file
        line: usize,
        /// Parse failure
        #[source]
        source: RecordError,
    },
}
