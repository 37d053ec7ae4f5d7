//! Verdicts emitted per stream record

use std::fmt;

/// Outcome of checking one stream record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The payer is connected to the payee under the strategy's rules
    Trusted,

    /// No qualifying connection was found
    Unverified,
}

impl Verdict {
    /// Lowercase label written to output files
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Trusted => "trusted",
            Verdict::Unverified => "unverified",
        }
    }

    /// Map a connectivity answer to a verdict
    pub fn from_connected(connected: bool) -> Self {
        if connected {
            Verdict::Trusted
        } else {
            Verdict::Unverified
        }
    }

    /// Whether this verdict is `Trusted`
    pub fn is_trusted(&self) -> bool {
        matches!(self, Verdict::Trusted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
