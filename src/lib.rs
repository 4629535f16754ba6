// lib.rs - msafilter library root

//! # msafilter - Gap and missing-data filtering for multiple sequence alignments
//!
//! This library trims alignments before phylogenomic analysis. It recodes
//! the leading and trailing gap runs of every taxon as missing data, then
//! removes the columns whose gap and missing-data content exceed
//! configurable thresholds.
//!
//! ## Features
//!
//! - **Terminal recoding**: leading/trailing gaps become missing data, internal gaps are kept
//! - **Column filtering**: two thresholds (gap + missing, missing only) with explicit boundary rules
//! - **Parallel processing**: per-taxon and per-column work runs on rayon
//! - **Headless**: progress goes through an injected sink, runs can be cancelled between columns
//! - **Typed errors**: empty, ragged and misconfigured inputs are rejected before any work starts
//!
//! ## Basic Usage
//!
//! ```rust
//! use msafilter::prelude::*;
//!
//! let alignment = Alignment::from_records([
//!     ("A", "--ACGT--"),
//!     ("B", "--AC-T--"),
//!     ("C", "NNACGTNN"),
//! ])?;
//!
//! let config = FilterConfig::new(50.0, 75.0).with_symbols('-', 'N');
//! let result = filter_alignment(&alignment, &config)?;
//!
//! assert_eq!(result.old_locus_length, 8);
//! assert_eq!(result.locus_length, 4);
//! assert_eq!(result.alignment.get_str("B"), Some("AC-T"));
//! # Ok::<(), FilterError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::core::{filter_alignment, filter_columns, normalize_terminals};
    pub use crate::core::{Alignment, FilterConfig, FilterError, FilterResult, TaxonSequence};
    pub use crate::core::{CancellationToken, ColumnFilter, ColumnStats, MissingFilter, ProgressSink};
}

// Re-export main types at the root level for convenience
pub use crate::core::{Alignment, FilterConfig, FilterError, FilterResult, MissingFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
