//! Reading batch and stream files.
//!
//! Both files share one layout: a header line, then one payment per line.
//! Blank lines are ignored. Lines that fail to parse are handled according to
//! the configured [`MalformedPolicy`].

use crate::error::Result;
use paymo_domain::{RecordError, TransactionRecord};
use paymo_verifier::{MalformedPolicy, VerifierError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Read all records from a payment file.
pub fn read_records<P: AsRef<Path>>(path: P, policy: MalformedPolicy) -> Result<Vec<TransactionRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = parse_records(BufReader::new(file), policy)?;
    debug!(path = %path.display(), records = records.len(), "Read payment file");
    Ok(records)
}

/// Parse records from any line source, discarding the header.
///
/// Lines are read as raw bytes; a line that is not valid UTF-8 is treated as
/// a malformed record rather than an I/O failure.
pub fn parse_records<R: BufRead>(reader: R, policy: MalformedPolicy) -> Result<Vec<TransactionRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate().skip(1) {
        let parsed = match String::from_utf8(line?) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => TransactionRecord::parse_line(&line),
            Err(_) => Err(RecordError::InvalidEncoding),
        };

        match parsed {
            Ok(record) => records.push(record),
            Err(source) => {
                let line_no = idx + 1;
                match policy {
                    MalformedPolicy::Skip => {
                        warn!("Skipping malformed record on line {}: {}", line_no, source);
                    }
                    MalformedPolicy::Fail => {
                        return Err(VerifierError::MalformedRecord { line: line_no, source }.into());
                    }
                }
            }
        }
    }

    Ok(records)
}
