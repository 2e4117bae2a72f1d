//! Scan command - highlight sensitive values in files

use std::path::{Path, PathBuf};

use anyhow::Result;
use hush_config::Config;
use hush_core::HighlightSpan;
use hush_security::PatternTable;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub spans: Vec<HighlightSpan>,
}

pub fn handle(config: &Config, paths: Vec<PathBuf>, format: &str, check: bool) -> Result<()> {
    let table = super::pattern_table(config)?;
    let files = super::collect_json_files(&paths)?;
    let reports = scan_files(&table, &files);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        _ => {
            for report in &reports {
                for span in &report.spans {
                    println!(
                        "{}:{}:{}-{}  {}",
                        report.path, span.line, span.start_column, span.end_column, span.label
                    );
                }
            }

            let flagged = reports.iter().filter(|r| !r.spans.is_empty()).count();
            println!(
                "\n{} sensitive value(s) in {} of {} file(s)",
                count_spans(&reports),
                flagged,
                files.len()
            );
        }
    }

    if check {
        let total = count_spans(&reports);
        if total > 0 {
            anyhow::bail!("{} sensitive value(s) found", total);
        }
    }

    Ok(())
}

/// Highlight every readable file; unreadable files are skipped with a warning
pub fn scan_files(table: &PatternTable, files: &[PathBuf]) -> Vec<FileReport> {
    files
        .iter()
        .filter_map(|path| match scan_file(table, path) {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect()
}

fn scan_file(table: &PatternTable, path: &Path) -> Result<FileReport> {
    let content = std::fs::read_to_string(path)?;
    let spans = table.compute_highlights(&content);
    debug!("{}: {} span(s)", path.display(), spans.len());

    Ok(FileReport {
        path: path.display().to_string(),
        spans,
    })
}

fn count_spans(reports: &[FileReport]) -> usize {
    reports.iter().map(|r| r.spans.len()).sum()
}
