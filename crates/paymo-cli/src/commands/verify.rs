//! Verify command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::input::read_records;
use crate::output::write_verdict_file;
use paymo_verifier::{PassReport, Strategy, Verifier};
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute a full verification run.
///
/// Reads the batch and stream files, runs one pass per job, and writes each
/// pass's verdicts to its output file. Returns the pass reports in job order.
pub fn execute_verify(
    batch: &Path,
    stream: &Path,
    jobs: &[(Strategy, PathBuf)],
    config: &Config,
) -> Result<Vec<PassReport>> {
    let policy = config.verifier.malformed;

    let batch_records = read_records(batch, policy)?;
    let stream_records = read_records(stream, policy)?;
    info!(
        batch = batch_records.len(),
        stream = stream_records.len(),
        "Read input files"
    );

    let verifier = Verifier::from_batch(&batch_records, config.verifier.clone())?;

    let strategies: Vec<Strategy> = jobs.iter().map(|(strategy, _)| *strategy).collect();
    let reports = verifier.run_all(&strategies, &stream_records);

    for (report, (_, path)) in reports.iter().zip(jobs) {
        write_verdict_file(path, &report.verdicts)?;
        info!(strategy = %report.strategy, path = %path.display(), "Wrote verdicts");
    }

    Ok(reports)
}
