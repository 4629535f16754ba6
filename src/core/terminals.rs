// terminals.rs - Leading/trailing gap recoding

use super::alignment::Alignment;
use super::config::symbol_bytes;
use super::error::Result;
use rayon::prelude::*;

/// Recode the leading and trailing gap runs of a single sequence as missing data.
///
/// Internal gaps are left untouched. An all-gap sequence becomes all-missing,
/// an empty sequence is returned as is.
pub fn normalize_sequence(sequence: &mut [u8], gap_symbol: u8, missing_symbol: u8) {
    let leading = sequence.iter().take_while(|&&b| b == gap_symbol).count();
    if leading == sequence.len() {
        sequence.fill(missing_symbol);
        return;
    }
    sequence[..leading].fill(missing_symbol);

    // The leading run stops at a non-gap, so the trailing scan cannot overlap it
    let trailing = sequence.iter().rev().take_while(|&&b| b == gap_symbol).count();
    let end = sequence.len();
    sequence[end - trailing..].fill(missing_symbol);
}

/// Return a copy of `alignment` with terminal gaps recoded as missing data.
///
/// Fails with `InvalidConfiguration` when a symbol is not ASCII or both
/// symbols are the same character. The input is never modified.
pub fn normalize_terminals(
    alignment: &Alignment,
    gap_symbol: char,
    missing_symbol: char,
) -> Result<Alignment> {
    let (gap, missing) = symbol_bytes(gap_symbol, missing_symbol)?;
    let mut normalized = alignment.clone();
    recode_terminals(&mut normalized, gap, missing);
    Ok(normalized)
}

/// Recode terminal gaps directly in `alignment`
pub fn normalize_terminals_in_place(
    alignment: &mut Alignment,
    gap_symbol: char,
    missing_symbol: char,
) -> Result<()> {
    let (gap, missing) = symbol_bytes(gap_symbol, missing_symbol)?;
    recode_terminals(alignment, gap, missing);
    Ok(())
}

/// Byte-level pass over already validated symbols, one rayon task per taxon
pub(crate) fn recode_terminals(alignment: &mut Alignment, gap: u8, missing: u8) {
    alignment
        .records_mut()
        .par_iter_mut()
        .for_each(|record| normalize_sequence(&mut record.sequence, gap, missing));
}
