// alignment.rs - Alignment data model

use super::error::{FilterError, Result};
use std::collections::HashMap;

/// A single row of an alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonSequence {
    pub taxon: String,
    pub sequence: Vec<u8>,
}

impl TaxonSequence {
    pub fn new(taxon: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            taxon: taxon.into(),
            sequence: sequence.into(),
        }
    }

    /// Sequence as text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.sequence).ok()
    }
}

/// Set of aligned sequences, one per taxon, kept in discovery order.
///
/// Rows are not required to share a length while the alignment is being
/// built; [`Alignment::locus_length`] is where that invariant is checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    records: Vec<TaxonSequence>,
    index: HashMap<String, usize>,
}

impl Alignment {
    /// Create a new empty alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an alignment from `(taxon, sequence)` pairs, rejecting duplicate taxa
    pub fn from_records<I, S, Q>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Q)>,
        S: Into<String>,
        Q: AsRef<[u8]>,
    {
        let mut alignment = Self::new();
        for (taxon, sequence) in records {
            alignment.push(taxon, sequence.as_ref().to_vec())?;
        }
        Ok(alignment)
    }

    /// Append a taxon at the end of the alignment
    pub fn push(&mut self, taxon: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Result<()> {
        let taxon = taxon.into();
        if self.index.contains_key(&taxon) {
            return Err(FilterError::DuplicateTaxon(taxon));
        }
        self.index.insert(taxon.clone(), self.records.len());
        self.records.push(TaxonSequence::new(taxon, sequence));
        Ok(())
    }

    /// Rebuild from rows that already carry unique taxa (e.g. a filtered copy)
    pub(crate) fn from_unique(records: Vec<TaxonSequence>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.taxon.clone(), i))
            .collect();
        Self { records, index }
    }

    pub fn taxa_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Taxon identifiers in alignment order
    pub fn taxa(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.taxon.as_str())
    }

    pub fn records(&self) -> &[TaxonSequence] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [TaxonSequence] {
        &mut self.records
    }

    /// Get the sequence of a taxon
    pub fn get(&self, taxon: &str) -> Option<&[u8]> {
        self.index
            .get(taxon)
            .map(|&i| self.records[i].sequence.as_slice())
    }

    /// Get the sequence of a taxon as text
    pub fn get_str(&self, taxon: &str) -> Option<&str> {
        self.index.get(taxon).and_then(|&i| self.records[i].as_str())
    }

    pub fn contains(&self, taxon: &str) -> bool {
        self.index.contains_key(taxon)
    }

    /// Number of columns shared by every row.
    ///
    /// Fails with `EmptyAlignment` when there are no taxa and with
    /// `RaggedAlignment` on the first row whose length differs from the first.
    pub fn locus_length(&self) -> Result<usize> {
        let first = self.records.first().ok_or(FilterError::EmptyAlignment)?;
        let expected = first.sequence.len();

        if let Some(row) = self.records.iter().find(|r| r.sequence.len() != expected) {
            return Err(FilterError::RaggedAlignment {
                taxon: row.taxon.clone(),
                expected,
                actual: row.sequence.len(),
            });
        }

        Ok(expected)
    }

    /// Whether all rows share the same length (an empty alignment is not uniform)
    pub fn is_uniform(&self) -> bool {
        self.locus_length().is_ok()
    }
}

impl IntoIterator for Alignment {
    type Item = TaxonSequence;
    type IntoIter = std::vec::IntoIter<TaxonSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
