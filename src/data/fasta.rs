// fasta.rs - Alignment loading from FASTA files

use crate::core::{Alignment, FilterError};
use bio::io::fasta;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load an aligned FASTA file, keeping records in file order
pub fn load_fasta(path: &Path) -> Result<Alignment, String> {
    println!("🧬 Loading alignment from: {}", path.display());

    let file = File::open(path)
        .map_err(|e| format!("Failed to open FASTA file {}: {}", path.display(), e))?;

    let alignment = read_fasta(BufReader::new(file))
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    println!("✅ Alignment loaded: {} taxa", alignment.taxa_count());
    Ok(alignment)
}

/// Read FASTA records from any reader into an alignment
pub fn read_fasta<R: Read>(reader: R) -> Result<Alignment, String> {
    let reader = fasta::Reader::new(reader);
    let mut alignment = Alignment::new();

    for record_result in reader.records() {
        let record = record_result.map_err(|e| format!("Invalid FASTA record: {}", e))?;

        alignment
            .push(record.id(), record.seq().to_vec())
            .map_err(|e| match e {
                FilterError::DuplicateTaxon(taxon) => {
                    format!("Taxon '{}' appears more than once", taxon)
                }
                other => other.to_string(),
            })?;
    }

    Ok(alignment)
}
