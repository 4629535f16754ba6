// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.column_report.is_none() {
            self.column_report = config.column_report;
        }
        if self.summary.is_none() {
            self.summary = config.summary;
        }

        // Filter settings
        if self.gap_threshold.is_none() {
            self.gap_threshold = config.gap_threshold;
        }
        if self.missing_threshold.is_none() {
            self.missing_threshold = config.missing_threshold;
        }
        if self.gap_symbol.is_none() {
            self.gap_symbol = config.gap_symbol;
        }
        if self.missing_symbol.is_none() {
            self.missing_symbol = config.missing_symbol;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.keep_terminal_gaps && config.keep_terminal_gaps.unwrap_or(false) {
            self.keep_terminal_gaps = true;
        }
        if !self.no_progress && config.no_progress.unwrap_or(false) {
            self.no_progress = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
