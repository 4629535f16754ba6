// mod.rs - Core filtering module

pub mod alignment;
pub mod columns;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod terminals;

// Re-export main types for convenience
pub use alignment::{Alignment, TaxonSequence};
pub use columns::{filter_columns, ColumnFilter, ColumnStats, FilterResult};
pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use pipeline::{filter_alignment, MissingFilter};
pub use progress::{CancellationToken, ProgressCounter, ProgressSink};
pub use terminals::{normalize_sequence, normalize_terminals, normalize_terminals_in_place};
