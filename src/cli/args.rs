// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// msafilter - Gap and missing-data filter for multiple sequence alignments
pub struct Args {
    /// path to the input alignment (FASTA)
    #[argh(option)]
    pub input: Option<String>,

    /// output path for the filtered alignment (FASTA)
    #[argh(option)]
    pub output: Option<String>,

    /// maximum gap + missing percentage a column may reach before it can be removed (0-100, default: 50)
    #[argh(option)]
    pub gap_threshold: Option<f64>,

    /// maximum missing percentage a column may reach before it can be removed (0-100, default: 75)
    #[argh(option)]
    pub missing_threshold: Option<f64>,

    /// gap character (default: -)
    #[argh(option)]
    pub gap_symbol: Option<char>,

    /// missing data character (default: n)
    #[argh(option)]
    pub missing_symbol: Option<char>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// write per-column gap/missing statistics to this file (TSV)
    #[argh(option)]
    pub column_report: Option<String>,

    /// write a run summary to this file (JSON)
    #[argh(option)]
    pub summary: Option<String>,

    /// keep leading/trailing gaps as gaps instead of recoding them as missing data
    #[argh(switch)]
    pub keep_terminal_gaps: bool,

    /// disable the progress bar
    #[argh(switch)]
    pub no_progress: bool,

    /// validate inputs without filtering (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
