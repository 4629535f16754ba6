// config.rs - Configuration file support

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub column_report: Option<String>,
    pub summary: Option<String>,

    // Filter settings
    pub gap_threshold: Option<f64>,
    pub missing_threshold: Option<f64>,
    pub gap_symbol: Option<char>,
    pub missing_symbol: Option<char>,
    pub keep_terminal_gaps: Option<bool>,

    // Performance
    pub threads: Option<usize>,

    // Flags
    pub no_progress: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# msafilter.toml - Configuration file for msafilter
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Aligned FASTA file to filter
input = "/path/to/alignment.fasta"

# Filtered alignment (FASTA)
output = "filtered.fasta"

# Per-column gap/missing statistics (TSV)
# column_report = "columns.tsv"

# Run summary (JSON)
# summary = "summary.json"

# =============================================================================
# FILTER SETTINGS
# =============================================================================

# A column is removed only when BOTH limits are reached:
#   gap% + missing% >= gap_threshold  AND  missing% >= missing_threshold

# Gap + missing percentage limit (0-100)
gap_threshold = 50.0

# Missing-only percentage limit (0-100)
missing_threshold = 75.0

# Gap character
gap_symbol = "-"

# Missing data character (must differ from gap_symbol)
missing_symbol = "n"

# Keep leading/trailing gaps instead of recoding them as missing data
keep_terminal_gaps = false

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# FLAGS
# =============================================================================

# Disable the progress bar
no_progress = false

# Validate inputs without filtering (dry run)
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.input.as_deref(), Some("/path/to/alignment.fasta"));
        assert_eq!(config.gap_threshold, Some(50.0));
        assert_eq!(config.missing_threshold, Some(75.0));
        assert_eq!(config.gap_symbol, Some('-'));
        assert_eq!(config.missing_symbol, Some('n'));
        assert_eq!(config.keep_terminal_gaps, Some(false));
        assert!(config.threads.is_none());
        assert!(config.column_report.is_none());
    }

    #[test]
    fn test_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msafilter.toml");
        fs::write(&path, "input = \"in.fasta\"\ngap_threshold = 30.0\nmissing_symbol = \"?\"\n").unwrap();

        let expected = Config {
            input: Some("in.fasta".to_string()),
            gap_threshold: Some(30.0),
            missing_symbol: Some('?'),
            ..Config::new()
        };
        assert_eq!(Config::from_file(&path).unwrap(), expected);
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "gap_threshold = \"high\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));
    }
}
