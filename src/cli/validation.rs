// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::config::{
    DEFAULT_GAP_SYMBOL, DEFAULT_GAP_THRESHOLD, DEFAULT_MISSING_SYMBOL, DEFAULT_MISSING_THRESHOLD,
};
use crate::core::FilterConfig;
use std::path::Path;

#[derive(Debug)]
pub struct ValidationResult {
    pub filter_config: FilterConfig,
    pub normalize_terminals: bool,
    pub input: String,
    pub output: Option<String>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let input = args.input.clone().ok_or("--input is required")?;
    if !Path::new(&input).is_file() {
        return Err(format!("Input alignment not found: {}", input));
    }

    // Output is only optional when nothing is going to be written
    let output = if args.dry_run {
        args.output.clone()
    } else {
        Some(args.output.clone().ok_or("--output is required")?)
    };
    if output.as_deref() == Some(input.as_str()) {
        return Err("--output must differ from --input".to_string());
    }

    if args.threads == Some(0) {
        return Err("--threads must be at least 1".to_string());
    }

    // Defaults apply only to settings neither the CLI nor the config file provided
    let filter_config = FilterConfig::new(
        args.gap_threshold.unwrap_or(DEFAULT_GAP_THRESHOLD),
        args.missing_threshold.unwrap_or(DEFAULT_MISSING_THRESHOLD),
    )
    .with_symbols(
        args.gap_symbol.unwrap_or(DEFAULT_GAP_SYMBOL),
        args.missing_symbol.unwrap_or(DEFAULT_MISSING_SYMBOL),
    );
    filter_config.validate()?;

    Ok(ValidationResult {
        filter_config,
        normalize_terminals: !args.keep_terminal_gaps,
        input,
        output,
    })
}
