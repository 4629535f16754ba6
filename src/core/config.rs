// config.rs - Filter thresholds and symbols

use super::error::{FilterError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GAP_THRESHOLD: f64 = 50.0;
pub const DEFAULT_MISSING_THRESHOLD: f64 = 75.0;
pub const DEFAULT_GAP_SYMBOL: char = '-';
pub const DEFAULT_MISSING_SYMBOL: char = 'n';

/// Configuration for gap/missing-data filtering.
///
/// Thresholds are percentages in `[0, 100]`. `gap_threshold` bounds the
/// combined gap + missing proportion of a column, `missing_threshold`
/// bounds the missing-only proportion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub gap_threshold: f64,
    pub missing_threshold: f64,
    pub gap_symbol: char,
    pub missing_symbol: char,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            missing_threshold: DEFAULT_MISSING_THRESHOLD,
            gap_symbol: DEFAULT_GAP_SYMBOL,
            missing_symbol: DEFAULT_MISSING_SYMBOL,
        }
    }
}

impl FilterConfig {
    /// Create configuration with custom thresholds and default symbols
    pub fn new(gap_threshold: f64, missing_threshold: f64) -> Self {
        Self {
            gap_threshold,
            missing_threshold,
            ..Self::default()
        }
    }

    pub fn with_symbols(mut self, gap_symbol: char, missing_symbol: char) -> Self {
        self.gap_symbol = gap_symbol;
        self.missing_symbol = missing_symbol;
        self
    }

    /// Check thresholds and symbols, returning the symbols as bytes
    pub fn validate(&self) -> Result<(u8, u8)> {
        check_threshold("gap_threshold", self.gap_threshold)?;
        check_threshold("missing_threshold", self.missing_threshold)?;

        symbol_bytes(self.gap_symbol, self.missing_symbol)
    }

    /// Column retention rule.
    ///
    /// A column is kept when `total_pct < gap_threshold` or
    /// `missing_pct < missing_threshold`. A percentage equal to its
    /// threshold fails that check, so a column sitting exactly on both
    /// thresholds is dropped.
    pub fn retains(&self, total_pct: f64, missing_pct: f64) -> bool {
        total_pct < self.gap_threshold || missing_pct < self.missing_threshold
    }
}

fn check_threshold(name: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(FilterError::InvalidConfiguration(format!(
            "{} must be between 0 and 100 (got {})",
            name, value
        )));
    }
    Ok(())
}

/// Check a gap/missing symbol pair: both ASCII, not equal
pub(crate) fn symbol_bytes(gap_symbol: char, missing_symbol: char) -> Result<(u8, u8)> {
    let gap = symbol_byte("gap_symbol", gap_symbol)?;
    let missing = symbol_byte("missing_symbol", missing_symbol)?;
    if gap == missing {
        return Err(FilterError::InvalidConfiguration(format!(
            "gap_symbol and missing_symbol must differ (both '{}')",
            gap_symbol
        )));
    }
    Ok((gap, missing))
}

fn symbol_byte(name: &str, symbol: char) -> Result<u8> {
    if !symbol.is_ascii() {
        return Err(FilterError::InvalidConfiguration(format!(
            "{} must be a single ASCII character (got '{}')",
            name, symbol
        )));
    }
    Ok(symbol as u8)
}
