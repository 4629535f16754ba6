// main.rs - CLI entry point

use std::path::Path;
use std::time::Instant;
use msafilter::cli::{validate_args, Args, Config, TerminalProgress};
use msafilter::data::load_fasta;
use msafilter::output::{write_column_report, write_fasta, write_summary, RunSummary};
use msafilter::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation_result = validate_args(&args)?;
    let config = &validation_result.filter_config;

    println!("🚀 msafilter v{}", msafilter::VERSION);

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        let num_threads = rayon::current_num_threads();
        println!("🧵 Threads: {} (auto-detected)", num_threads);
    }

    println!(
        "⚙️  Thresholds: gap+missing < {}% or missing < {}% keeps a column",
        config.gap_threshold, config.missing_threshold
    );
    println!(
        "🔤 Symbols: gap '{}', missing '{}'{}",
        config.gap_symbol,
        config.missing_symbol,
        if validation_result.normalize_terminals {
            ""
        } else {
            " (terminal gaps kept)"
        }
    );

    let alignment = load_fasta(Path::new(&validation_result.input))?;
    let old_locus_length = alignment.locus_length()?;
    println!(
        "📊 Alignment: {} taxa × {} columns",
        alignment.taxa_count(),
        old_locus_length
    );

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    let start = Instant::now();
    let progress = if args.no_progress {
        TerminalProgress::hidden()
    } else {
        TerminalProgress::new(old_locus_length)
    };

    let mut filter = MissingFilter::new(config.clone()).with_progress(&progress);
    if !validation_result.normalize_terminals {
        filter = filter.skip_terminals();
    }
    let result = filter.run(&alignment)?;
    progress.finish(format!("✅ {} columns evaluated", result.old_locus_length));

    let removed = result.removed_columns();
    println!(
        "✂️  Filtered in {:.2}s: {} → {} columns (removed {}, {:.1}%)",
        start.elapsed().as_secs_f64(),
        result.old_locus_length,
        result.locus_length,
        removed,
        if result.old_locus_length == 0 {
            0.0
        } else {
            100.0 * removed as f64 / result.old_locus_length as f64
        }
    );
    if result.is_fully_filtered() {
        eprintln!("⚠️  Warning: every column was removed, the filtered alignment is empty");
    }

    if let Some(output) = &validation_result.output {
        write_fasta(output, &result.alignment)?;
    }
    if let Some(report) = &args.column_report {
        write_column_report(report, &result, &command_line)?;
    }
    if let Some(summary_path) = &args.summary {
        let summary = RunSummary::new(
            &validation_result.input,
            config,
            validation_result.normalize_terminals,
            &result,
        );
        write_summary(summary_path, &summary)?;
    }

    Ok(())
}
