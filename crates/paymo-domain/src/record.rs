//! Transaction records
//!
//! A record is one line of the batch or stream feed:
//! `timestamp, payer id, payee id, amount, message`. Only the first three
//! fields matter here; the rest (including commas inside the message) is
//! ignored.

use crate::party::PartyId;
use crate::timestamp::Timestamp;
use thiserror::Error;

/// Number of leading fields every record must carry
pub const REQUIRED_FIELDS: usize = 3;

/// Errors raised while parsing a single record line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Fewer than the required number of comma-separated fields
    #[error("Expected at least 3 fields, found {0}")]
    MissingFields(usize),

    /// A party id field is not a non-negative integer
    #[error("Invalid party id '{0}'")]
    InvalidParty(String),

    /// The line is not valid UTF-8
    #[error("Line is not valid UTF-8")]
    InvalidEncoding,
}

/// One payment between two parties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Paying party
    pub party_a: PartyId,

    /// Receiving party
    pub party_b: PartyId,

    /// When the payment happened; `None` if the field was malformed
    pub timestamp: Option<Timestamp>,
}

impl TransactionRecord {
    /// Create a record
    pub fn new(party_a: PartyId, party_b: PartyId, timestamp: Option<Timestamp>) -> Self {
        Self {
            party_a,
            party_b,
            timestamp,
        }
    }

    /// Create a record without a timestamp
    pub fn between(party_a: u64, party_b: u64) -> Self {
        Self::new(PartyId::new(party_a), PartyId::new(party_b), None)
    }

    /// Parse one data line of the feed
    ///
    /// A malformed timestamp does not fail the record; it is kept as `None`
    /// and later collapsed to [`Timestamp::sentinel`].
    ///
    /// # Examples
    ///
    /// ```
    /// use paymo_domain::{PartyId, TransactionRecord};
    ///
    /// let line = "2016-11-02 09:49:29, 52575, 1120, 25.32, Spam, eggs";
    /// let record = TransactionRecord::parse_line(line).unwrap();
    /// assert_eq!(record.party_a, PartyId::new(52575));
    /// assert_eq!(record.party_b, PartyId::new(1120));
    /// assert!(record.timestamp.is_some());
    /// ```
    pub fn parse_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line
            .trim_end_matches(['\r', '\n'])
            .splitn(REQUIRED_FIELDS + 1, ',')
            .collect();

        if fields.len() < REQUIRED_FIELDS {
            return Err(RecordError::MissingFields(fields.len()));
        }

        let party_a = parse_party(fields[1])?;
        let party_b = parse_party(fields[2])?;
        let timestamp = Timestamp::parse(fields[0]).ok();

        Ok(Self::new(party_a, party_b, timestamp))
    }

    /// The record's timestamp, or the sentinel if it was malformed
    pub fn timestamp_or_sentinel(&self) -> Timestamp {
        self.timestamp.unwrap_or_else(Timestamp::sentinel)
    }
}

fn parse_party(field: &str) -> Result<PartyId, RecordError> {
    field
        .parse::<PartyId>()
        .map_err(|_| RecordError::InvalidParty(field.trim().to_string()))
}
