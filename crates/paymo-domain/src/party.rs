//! Party identities and unordered party pairs

use std::fmt;
use std::str::FromStr;

/// Identifier of a transacting party
///
/// Parties carry no attributes beyond the integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartyId(u64);

impl PartyId {
    /// Create a PartyId from its raw value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl From<u64> for PartyId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for PartyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unordered pair of parties, stored canonically as `(min, max)`
///
/// `PartyPair::new(a, b)` and `PartyPair::new(b, a)` are equal and hash the
/// same, so a pair can key per-relationship state regardless of payment
/// direction.
///
/// # Examples
///
/// ```
/// use paymo_domain::{PartyId, PartyPair};
///
/// let a = PartyId::new(7);
/// let b = PartyId::new(3);
/// assert_eq!(PartyPair::new(a, b), PartyPair::new(b, a));
/// assert_eq!(PartyPair::new(a, b).low(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartyPair {
    low: PartyId,
    high: PartyId,
}

impl PartyPair {
    /// Canonicalize two parties into a pair
    pub fn new(a: PartyId, b: PartyId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller party id
    pub fn low(&self) -> PartyId {
        self.low
    }

    /// The larger party id
    pub fn high(&self) -> PartyId {
        self.high
    }
}

impl fmt::Display for PartyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
