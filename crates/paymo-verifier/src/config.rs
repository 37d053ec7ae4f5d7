//! Configuration for verification runs
//!
//! Defines the search budget of the configurable strategy, the freshness
//! window, and how malformed input lines are treated. The fixed-degree and
//! temporal strategies always search [`FIXED_DEGREE`](crate::FIXED_DEGREE)
//! rounds and are not configurable.

use crate::error::VerifierError;
use serde::{Deserialize, Serialize};

/// What to do with an input line that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Log a warning and drop the line
    #[default]
    Skip,

    /// Abort the run, reporting the line number
    Fail,
}

/// Configuration for the verifier
///
/// # Examples
///
/// ```
/// use paymo_verifier::VerifierConfig;
///
/// let config = VerifierConfig::default();
/// assert_eq!(config.configurable_degree, 10);
/// assert_eq!(config.window_days, 365);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifierConfig {
    /// Round budget of the configurable-degree strategy
    /// Default: 10
    #[serde(default = "default_configurable_degree")]
    pub configurable_degree: usize,

    /// Maximum age in days of a pair's last payment for it to stay trusted
    /// Default: 365
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Only classify the first N stream records
    /// Default: unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stream_records: Option<usize>,

    /// Handling of unparseable input lines
    /// Default: skip
    #[serde(default)]
    pub malformed: MalformedPolicy,
}

fn default_configurable_degree() -> usize {
    10
}

fn default_window_days() -> u32 {
    365
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            configurable_degree: default_configurable_degree(),
            window_days: default_window_days(),
            max_stream_records: None,
            malformed: MalformedPolicy::Skip,
        }
    }
}

impl VerifierConfig {
    /// Check settings that serde cannot express
    pub fn validate(&self) -> Result<(), VerifierError> {
        if self.configurable_degree == 0 {
            return Err(VerifierError::Config(
                "configurable_degree must be at least 1".to_string(),
            ));
        }
        if self.max_stream_records == Some(0) {
            return Err(VerifierError::Config(
                "max_stream_records must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
