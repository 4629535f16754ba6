// mod.rs - Alignment input module

pub mod fasta;

// Re-export main functions for convenience
pub use fasta::{load_fasta, read_fasta};
