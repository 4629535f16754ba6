// mod.rs - Output writers for filtered alignments and reports

use crate::core::{Alignment, ColumnStats, FilterConfig, FilterResult};
use bio::io::fasta;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Write an alignment in FASTA format, one record per taxon in alignment order
pub fn write_fasta(file_path: &str, alignment: &Alignment) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = fasta::Writer::new(BufWriter::new(file));

    for record in alignment.records() {
        writer
            .write(&record.taxon, None, &record.sequence)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Filtered alignment written to: {}", file_path);
    Ok(())
}

/// One line of the column report; field names become the TSV header
#[derive(Debug, Serialize)]
struct ColumnReportRow {
    position: usize,
    gaps: usize,
    missing: usize,
    gap_pct: String,
    missing_pct: String,
    total_pct: String,
    status: &'static str,
}

impl From<&ColumnStats> for ColumnReportRow {
    fn from(stats: &ColumnStats) -> Self {
        Self {
            position: stats.index + 1,
            gaps: stats.gap_count,
            missing: stats.missing_count,
            gap_pct: format!("{:.2}", stats.gap_pct),
            missing_pct: format!("{:.2}", stats.missing_pct),
            total_pct: format!("{:.2}", stats.total_pct),
            status: if stats.retained { "kept" } else { "removed" },
        }
    }
}

/// Write per-column statistics as TSV
pub fn write_column_report(
    file_path: &str,
    result: &FilterResult,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# msafilter v{}", crate::VERSION).map_err(|e| format!("Write error: {}", e))?;

    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    for stats in &result.column_stats {
        tsv.serialize(ColumnReportRow::from(stats))
            .map_err(|e| format!("Write error: {}", e))?;
    }

    tsv.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("📋 Column report written to: {}", file_path);
    Ok(())
}

/// Machine-readable summary of one filtering run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub version: String,
    pub generated: String,
    pub input: String,
    pub taxa: usize,
    pub terminal_gaps_recoded: bool,
    pub config: FilterConfig,
    pub old_locus_length: usize,
    pub locus_length: usize,
    pub removed_columns: usize,
}

impl RunSummary {
    pub fn new(input: &str, config: &FilterConfig, terminal_gaps_recoded: bool, result: &FilterResult) -> Self {
        Self {
            version: crate::VERSION.to_string(),
            generated: chrono::Utc::now().to_rfc3339(),
            input: input.to_string(),
            taxa: result.alignment.taxa_count(),
            terminal_gaps_recoded,
            config: config.clone(),
            old_locus_length: result.old_locus_length,
            locus_length: result.locus_length,
            removed_columns: result.removed_columns(),
        }
    }
}

/// Write the run summary as pretty-printed JSON
pub fn write_summary(file_path: &str, summary: &RunSummary) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create summary file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, summary)
        .map_err(|e| format!("Failed to serialize summary: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;

    println!("📄 Run summary written to: {}", file_path);
    Ok(())
}
