//! Verdict files and run summaries.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use paymo_domain::Verdict;
use paymo_verifier::PassReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Write one verdict per line.
pub fn write_verdicts<W: Write>(mut writer: W, verdicts: &[Verdict]) -> Result<()> {
    for verdict in verdicts {
        writeln!(writer, "{}", verdict)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the verdicts to it.
pub fn write_verdict_file<P: AsRef<Path>>(path: P, verdicts: &[Verdict]) -> Result<()> {
    let file = File::create(path)?;
    write_verdicts(BufWriter::new(file), verdicts)
}

/// Summary formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the per-strategy summary, or `None` in quiet mode.
    pub fn format_summary(&self, reports: &[PassReport]) -> Result<Option<String>> {
        match self.format {
            OutputFormat::Json => self.format_summary_json(reports).map(Some),
            OutputFormat::Table => Ok(Some(self.format_summary_table(reports))),
            OutputFormat::Quiet => Ok(None),
        }
    }

    fn format_summary_json(&self, reports: &[PassReport]) -> Result<String> {
        let json_reports: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| {
                serde_json::json!({
                    "feature": r.strategy.feature(),
                    "strategy": r.strategy,
                    "records": r.verdicts.len(),
                    "trusted": r.trusted(),
                    "unverified": r.unverified(),
                    "online_insertions": r.online_insertions,
                    "window_slides": r.window_slides
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_reports)?)
    }

    fn format_summary_table(&self, reports: &[PassReport]) -> String {
        if reports.is_empty() {
            return self.colorize("No strategies were run.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Feature", "Strategy", "Records", "Trusted", "Unverified", "Inserted", "Slides",
        ]);

        for report in reports {
            builder.push_record([
                report.strategy.feature().to_string(),
                report.strategy.name().to_string(),
                report.verdicts.len().to_string(),
                report.trusted().to_string(),
                report.unverified().to_string(),
                report.online_insertions.to_string(),
                report.window_slides.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let total: usize = reports.iter().map(PassReport::trusted).sum();
        format!(
            "{}\n{}",
            table,
            self.colorize(&format!("{} trusted verdict(s) across {} strategies", total, reports.len()), "green")
        )
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
