// columns.rs - Per-column gap/missing statistics and column removal

use super::alignment::{Alignment, TaxonSequence};
use super::config::FilterConfig;
use super::error::{FilterError, Result};
use super::progress::{CancellationToken, ProgressSink};
use rayon::prelude::*;

/// Upper bound on the automatic chunk size
pub const MAX_CHUNK_COLUMNS: usize = 256;

/// Progress events aimed for on alignments longer than this many columns
const TARGET_PROGRESS_EVENTS: usize = 100;

/// Chunk size used when none is set: about one event per percent of the
/// alignment, capped at `MAX_CHUNK_COLUMNS`. Short alignments report per column.
pub fn default_chunk_columns(locus_length: usize) -> usize {
    (locus_length / TARGET_PROGRESS_EVENTS).clamp(1, MAX_CHUNK_COLUMNS)
}

/// Gap and missing-data content of one alignment column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Zero-based column index in the unfiltered alignment
    pub index: usize,
    pub gap_count: usize,
    pub missing_count: usize,
    pub gap_pct: f64,
    pub missing_pct: f64,
    pub total_pct: f64,
    pub retained: bool,
}

impl ColumnStats {
    pub fn from_counts(
        index: usize,
        gap_count: usize,
        missing_count: usize,
        taxa_count: usize,
        config: &FilterConfig,
    ) -> Self {
        let taxa = taxa_count as f64;
        let gap_pct = 100.0 * gap_count as f64 / taxa;
        let missing_pct = 100.0 * missing_count as f64 / taxa;
        let total_pct = gap_pct + missing_pct;

        Self {
            index,
            gap_count,
            missing_count,
            gap_pct,
            missing_pct,
            total_pct,
            retained: config.retains(total_pct, missing_pct),
        }
    }
}

/// Outcome of a column filtering run
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub alignment: Alignment,
    pub old_locus_length: usize,
    pub locus_length: usize,
    /// Ascending indices of the columns that survived
    pub retained_columns: Vec<usize>,
    /// One entry per original column, in column order
    pub column_stats: Vec<ColumnStats>,
}

impl FilterResult {
    pub fn removed_columns(&self) -> usize {
        self.old_locus_length - self.locus_length
    }

    /// True when every column was dropped. The taxa are still present with empty rows.
    pub fn is_fully_filtered(&self) -> bool {
        self.locus_length == 0
    }
}

/// Column filter over a validated configuration
pub struct ColumnFilter<'a> {
    config: &'a FilterConfig,
    progress: Option<&'a dyn ProgressSink>,
    cancel: Option<&'a CancellationToken>,
    chunk_columns: Option<usize>,
}

impl<'a> ColumnFilter<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self {
            config,
            progress: None,
            cancel: None,
            chunk_columns: None,
        }
    }

    pub fn with_progress(mut self, sink: &'a dyn ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Fix the number of columns evaluated in parallel between progress events
    pub fn with_chunk_columns(mut self, chunk_columns: usize) -> Self {
        self.chunk_columns = Some(chunk_columns.max(1));
        self
    }

    /// Compute column statistics and build the filtered alignment.
    ///
    /// Configuration and alignment shape are validated before the first
    /// column is read. Decisions are computed in parallel chunk by chunk,
    /// then every taxon's row is rebuilt from the retained indices.
    pub fn run(&self, alignment: &Alignment) -> Result<FilterResult> {
        let (gap, missing) = self.config.validate()?;
        let old_locus_length = alignment.locus_length()?;
        let taxa_count = alignment.taxa_count();

        let rows: Vec<&[u8]> = alignment
            .records()
            .iter()
            .map(|r| r.sequence.as_slice())
            .collect();

        let chunk_columns = self
            .chunk_columns
            .unwrap_or_else(|| default_chunk_columns(old_locus_length));

        let mut column_stats = Vec::with_capacity(old_locus_length);
        let mut start = 0;
        while start < old_locus_length {
            let end = (start + chunk_columns).min(old_locus_length);

            let chunk = (start..end)
                .into_par_iter()
                .map(|column| {
                    if self.cancel.is_some_and(|t| t.is_cancelled()) {
                        return Err(FilterError::Cancelled {
                            column,
                            total: old_locus_length,
                        });
                    }
                    let (gap_count, missing_count) = count_column(&rows, column, gap, missing);
                    Ok(ColumnStats::from_counts(
                        column,
                        gap_count,
                        missing_count,
                        taxa_count,
                        self.config,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;

            column_stats.extend(chunk);
            if let Some(sink) = self.progress {
                sink.report(end, old_locus_length);
            }
            start = end;
        }

        let retained_columns: Vec<usize> = column_stats
            .iter()
            .filter(|s| s.retained)
            .map(|s| s.index)
            .collect();

        let records: Vec<TaxonSequence> = alignment
            .records()
            .par_iter()
            .map(|record| TaxonSequence {
                taxon: record.taxon.clone(),
                sequence: retained_columns.iter().map(|&c| record.sequence[c]).collect(),
            })
            .collect();

        Ok(FilterResult {
            alignment: Alignment::from_unique(records),
            old_locus_length,
            locus_length: retained_columns.len(),
            retained_columns,
            column_stats,
        })
    }
}

fn count_column(rows: &[&[u8]], column: usize, gap: u8, missing: u8) -> (usize, usize) {
    rows.iter().fold((0, 0), |(gaps, missing_count), row| {
        let b = row[column];
        if b == gap {
            (gaps + 1, missing_count)
        } else if b == missing {
            (gaps, missing_count + 1)
        } else {
            (gaps, missing_count)
        }
    })
}

/// Filter columns of `alignment` with an optional progress sink
pub fn filter_columns(
    alignment: &Alignment,
    config: &FilterConfig,
    progress: Option<&dyn ProgressSink>,
) -> Result<FilterResult> {
    let filter = ColumnFilter::new(config);
    match progress {
        Some(sink) => filter.with_progress(sink).run(alignment),
        None => filter.run(alignment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Mutex;

    fn config() -> FilterConfig {
        FilterConfig::new(50.0, 75.0).with_symbols('-', 'n')
    }

    #[test]
    fn test_all_gap_column_saved_by_missing_check() {
        // Column 1 is 100% gaps: total 100 >= 50 but missing 0 < 75
        let aln = Alignment::from_records([
            ("A", "A-C"),
            ("B", "A-C"),
            ("C", "A-C"),
            ("D", "A-C"),
        ])
        .unwrap();

        let result = filter_columns(&aln, &config(), None).unwrap();
        assert_eq!(result.locus_length, 3);
        assert_eq!(result.retained_columns, vec![0, 1, 2]);
        let stats = result.column_stats[1];
        assert_eq!(stats.gap_pct, 100.0);
        assert_eq!(stats.missing_pct, 0.0);
        assert!(stats.retained);
    }

    #[test]
    fn test_boundary_values_are_dropped() {
        // Column 0: 2 gaps + 2 missing of 4 taxa -> total 100, missing 50
        // Column 1: 4 missing -> total 100, missing 100
        // Column 2: 1 gap + 1 missing -> total 50, missing 25
        let aln = Alignment::from_records([
            ("A", "-nA"),
            ("B", "-n-"),
            ("C", "nnn"),
            ("D", "nnA"),
        ])
        .unwrap();

        // Column 2 sits exactly on both thresholds, the others fail both
        let result = filter_columns(&aln, &FilterConfig::new(50.0, 25.0), None).unwrap();
        assert_eq!(result.retained_columns, Vec::<usize>::new());
        assert!(result.is_fully_filtered());
        assert_eq!(result.alignment.get_str("A"), Some(""));

        // Raising the gap threshold by a hair saves column 2
        let result = filter_columns(&aln, &FilterConfig::new(50.1, 25.0), None).unwrap();
        assert_eq!(result.retained_columns, vec![2]);

        // Raising the missing threshold saves columns 0 and 2 but not the all-missing one
        let result = filter_columns(&aln, &FilterConfig::new(50.0, 50.1), None).unwrap();
        assert_eq!(result.retained_columns, vec![0, 2]);
    }

    #[test]
    fn test_output_rows_rebuilt_in_column_order() {
        let aln = Alignment::from_records([
            ("t1", "AnCnG"),
            ("t2", "TnGnC"),
        ])
        .unwrap();

        let result = filter_columns(&aln, &config(), None).unwrap();
        assert_eq!(result.old_locus_length, 5);
        assert_eq!(result.locus_length, 3);
        assert_eq!(result.removed_columns(), 2);
        assert_eq!(result.alignment.get_str("t1"), Some("ACG"));
        assert_eq!(result.alignment.get_str("t2"), Some("TGC"));
        let taxa: Vec<_> = result.alignment.taxa().collect();
        assert_eq!(taxa, vec!["t1", "t2"]);
    }

    #[test]
    fn test_empty_alignment() {
        let result = filter_columns(&Alignment::new(), &config(), None);
        assert_eq!(result.unwrap_err(), FilterError::EmptyAlignment);
    }

    #[test]
    fn test_ragged_alignment_fails_before_processing() {
        let aln = Alignment::from_records([("A", "ACGT"), ("B", "ACG")]).unwrap();
        let events = Mutex::new(Vec::new());
        let sink = |c: usize, t: usize| events.lock().unwrap().push((c, t));

        let result = filter_columns(&aln, &config(), Some(&sink as &dyn ProgressSink));
        assert!(matches!(result, Err(FilterError::RaggedAlignment { .. })));
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_configuration() {
        let aln = Alignment::from_records([("A", "ACGT")]).unwrap();
        let result = filter_columns(&aln, &FilterConfig::new(120.0, 75.0), None);
        assert!(matches!(result, Err(FilterError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_zero_length_alignment() {
        let aln = Alignment::from_records([("A", ""), ("B", "")]).unwrap();
        let result = filter_columns(&aln, &config(), None).unwrap();
        assert_eq!(result.old_locus_length, 0);
        assert_eq!(result.locus_length, 0);
        assert_eq!(result.alignment.taxa_count(), 2);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let seq = "A".repeat(600);
        let aln = Alignment::from_records([("A", seq.as_str()), ("B", seq.as_str())]).unwrap();
        let events = Mutex::new(Vec::new());
        let sink = |c: usize, t: usize| events.lock().unwrap().push((c, t));

        let cfg = config();
        ColumnFilter::new(&cfg)
            .with_progress(&sink)
            .with_chunk_columns(256)
            .run(&aln)
            .unwrap();

        let events = events.into_inner().unwrap();
        assert_eq!(events, vec![(256, 600), (512, 600), (600, 600)]);
    }

    #[test]
    fn test_short_alignment_reports_every_column() {
        let aln = Alignment::from_records([("A", "ACGTACGTAC"), ("B", "nnnn-ACGTA")]).unwrap();
        let events = Mutex::new(Vec::new());
        let sink = |c: usize, t: usize| events.lock().unwrap().push((c, t));

        filter_columns(&aln, &config(), Some(&sink as &dyn ProgressSink)).unwrap();

        let expected: Vec<_> = (1..=10).map(|c| (c, 10)).collect();
        assert_eq!(events.into_inner().unwrap(), expected);
    }

    #[test]
    fn test_default_chunk_size() {
        assert_eq!(default_chunk_columns(0), 1);
        assert_eq!(default_chunk_columns(10), 1);
        assert_eq!(default_chunk_columns(1_000), 10);
        assert_eq!(default_chunk_columns(30_000), 256);
    }

    #[test]
    fn test_cancellation() {
        let aln = Alignment::from_records([("A", "ACGT"), ("B", "ACGT")]).unwrap();
        let token = CancellationToken::new();
        token.cancel();

        let cfg = config();
        let result = ColumnFilter::new(&cfg).with_cancellation(&token).run(&aln);
        assert!(matches!(result, Err(FilterError::Cancelled { total: 4, .. })));
    }

    #[test]
    fn test_cancellation_during_run() {
        let seq = "A".repeat(600);
        let aln = Alignment::from_records([("A", seq.as_str()), ("B", seq.as_str())]).unwrap();
        let token = CancellationToken::new();
        let reports = Mutex::new(0usize);
        let sink = |_: usize, _: usize| {
            *reports.lock().unwrap() += 1;
            token.cancel();
        };

        let cfg = config();
        let result = ColumnFilter::new(&cfg)
            .with_progress(&sink)
            .with_cancellation(&token)
            .with_chunk_columns(256)
            .run(&aln);

        // The first chunk completes, the second sees the token
        match result {
            Err(FilterError::Cancelled { column, total }) => {
                assert_eq!(total, 600);
                assert!((256..512).contains(&column), "stopped at column {}", column);
            }
            other => panic!("Expected cancellation, got {:?}", other),
        }
        assert_eq!(*reports.lock().unwrap(), 1);
    }

    fn alignment_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
        (1usize..6, 0usize..30).prop_flat_map(|(taxa, len)| {
            prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec![b'-', b'n', b'A', b'C']), len),
                taxa,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_filter_invariants(
            rows in alignment_strategy(),
            gap_threshold in 0.0f64..=100.0,
            missing_threshold in 0.0f64..=100.0,
        ) {
            let aln = Alignment::from_records(
                rows.iter().enumerate().map(|(i, r)| (format!("taxon{}", i), r.clone())),
            ).unwrap();
            let cfg = FilterConfig::new(gap_threshold, missing_threshold);
            let result = filter_columns(&aln, &cfg, None).unwrap();

            // Same taxa, same order
            prop_assert!(result.alignment.taxa().eq(aln.taxa()));

            // Strictly increasing subsequence of the original columns
            prop_assert!(result.retained_columns.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(result.locus_length <= result.old_locus_length);
            prop_assert_eq!(result.locus_length, result.retained_columns.len());

            // Retention rule, recomputed independently
            let taxa = rows.len() as f64;
            for c in 0..result.old_locus_length {
                let gaps = rows.iter().filter(|r| r[c] == b'-').count() as f64;
                let missing = rows.iter().filter(|r| r[c] == b'n').count() as f64;
                let gap_pct = 100.0 * gaps / taxa;
                let missing_pct = 100.0 * missing / taxa;
                let keep = gap_pct + missing_pct < gap_threshold || missing_pct < missing_threshold;
                prop_assert_eq!(keep, result.retained_columns.contains(&c));
            }

            // Rows are exactly the retained columns of the input rows
            for (row, record) in rows.iter().zip(result.alignment.records()) {
                let expected: Vec<u8> = result.retained_columns.iter().map(|&c| row[c]).collect();
                prop_assert_eq!(&record.sequence, &expected);
            }

            let unchanged = result.column_stats.iter().all(|s| s.retained);
            prop_assert_eq!(unchanged, result.locus_length == result.old_locus_length);
        }
    }
}
