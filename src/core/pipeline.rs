// pipeline.rs - Terminal normalization followed by column filtering

use super::alignment::Alignment;
use super::columns::{ColumnFilter, FilterResult};
use super::config::FilterConfig;
use super::error::Result;
use super::progress::{CancellationToken, ProgressSink};
use super::terminals::recode_terminals;
use std::borrow::Cow;

/// Complete missing-data filter: recode terminal gaps, then drop columns.
///
/// ```rust
/// use msafilter::prelude::*;
///
/// let alignment = Alignment::from_records([
///     ("A", "--ACGT--"),
///     ("B", "--AC-T--"),
///     ("C", "nnACGTnn"),
/// ])?;
///
/// let result = MissingFilter::new(FilterConfig::default()).run(&alignment)?;
/// assert_eq!(result.alignment.get_str("B"), Some("AC-T"));
/// # Ok::<(), msafilter::FilterError>(())
/// ```
pub struct MissingFilter<'a> {
    config: FilterConfig,
    normalize_terminals: bool,
    progress: Option<&'a dyn ProgressSink>,
    cancel: Option<&'a CancellationToken>,
}

impl<'a> MissingFilter<'a> {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            normalize_terminals: true,
            progress: None,
            cancel: None,
        }
    }

    /// Keep terminal gaps as gaps and only run the column pass
    pub fn skip_terminals(mut self) -> Self {
        self.normalize_terminals = false;
        self
    }

    pub fn with_progress(mut self, sink: &'a dyn ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn run(&self, alignment: &Alignment) -> Result<FilterResult> {
        // Both passes share the same preconditions; check them before the first one
        let (gap, missing) = self.config.validate()?;
        alignment.locus_length()?;

        let normalized = if self.normalize_terminals {
            let mut owned = alignment.clone();
            recode_terminals(&mut owned, gap, missing);
            Cow::Owned(owned)
        } else {
            Cow::Borrowed(alignment)
        };

        let mut filter = ColumnFilter::new(&self.config);
        if let Some(sink) = self.progress {
            filter = filter.with_progress(sink);
        }
        if let Some(token) = self.cancel {
            filter = filter.with_cancellation(token);
        }
        filter.run(&normalized)
    }
}

/// Run the complete filter with a configuration and no observers
pub fn filter_alignment(alignment: &Alignment, config: &FilterConfig) -> Result<FilterResult> {
    MissingFilter::new(config.clone()).run(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FilterError;
    use std::sync::Mutex;

    fn sample() -> Alignment {
        Alignment::from_records([
            ("A", "--ACGT--"),
            ("B", "--AC-T--"),
            ("C", "NNACGTNN"),
        ])
        .unwrap()
    }

    #[test]
    fn test_terminals_then_columns() {
        let config = FilterConfig::default().with_symbols('-', 'N');
        let result = filter_alignment(&sample(), &config).unwrap();

        // Terminal columns become 100% missing and are dropped
        assert_eq!(result.old_locus_length, 8);
        assert_eq!(result.locus_length, 4);
        assert_eq!(result.retained_columns, vec![2, 3, 4, 5]);
        assert_eq!(result.alignment.get_str("A"), Some("ACGT"));
        assert_eq!(result.alignment.get_str("B"), Some("AC-T"));
        assert_eq!(result.alignment.get_str("C"), Some("ACGT"));
    }

    #[test]
    fn test_skip_terminals() {
        let config = FilterConfig::default().with_symbols('-', 'N');
        let result = MissingFilter::new(config)
            .skip_terminals()
            .run(&sample())
            .unwrap();

        // Terminal columns are 2/3 gaps + 1/3 missing: total 100 but missing 33 < 75
        assert_eq!(result.locus_length, 8);
        assert_eq!(result.alignment.get_str("A"), Some("--ACGT--"));
    }

    #[test]
    fn test_original_alignment_untouched() {
        let original = sample();
        let config = FilterConfig::default().with_symbols('-', 'N');
        filter_alignment(&original, &config).unwrap();
        assert_eq!(original, sample());
    }

    #[test]
    fn test_validation_happens_first() {
        let config = FilterConfig::default().with_symbols('-', '-');
        assert!(matches!(
            filter_alignment(&sample(), &config),
            Err(FilterError::InvalidConfiguration(_))
        ));

        let ragged = Alignment::from_records([("A", "--AC"), ("B", "-A")]).unwrap();
        assert!(matches!(
            filter_alignment(&ragged, &FilterConfig::default()),
            Err(FilterError::RaggedAlignment { .. })
        ));

        assert_eq!(
            filter_alignment(&Alignment::new(), &FilterConfig::default()).unwrap_err(),
            FilterError::EmptyAlignment
        );
    }

    #[test]
    fn test_observers_reach_column_pass() {
        let events = Mutex::new(Vec::new());
        let sink = |c: usize, t: usize| events.lock().unwrap().push((c, t));
        let config = FilterConfig::default().with_symbols('-', 'N');

        MissingFilter::new(config.clone())
            .with_progress(&sink)
            .run(&sample())
            .unwrap();
        let expected: Vec<_> = (1..=8).map(|c| (c, 8)).collect();
        assert_eq!(events.into_inner().unwrap(), expected);

        let token = CancellationToken::new();
        token.cancel();
        let result = MissingFilter::new(config).with_cancellation(&token).run(&sample());
        assert!(matches!(result, Err(FilterError::Cancelled { total: 8, .. })));
    }

    #[test]
    fn test_single_taxon_all_gaps() {
        let aln = Alignment::from_records([("only", "-----")]).unwrap();
        let result = filter_alignment(&aln, &FilterConfig::default()).unwrap();
        // Every column is 100% missing, so nothing survives
        assert!(result.is_fully_filtered());
        assert_eq!(result.alignment.get_str("only"), Some(""));
    }
}
