use anyhow::Result;
use clap::Parser;
use partition_robustness::config::Config;
use partition_robustness::data::load_results;
use partition_robustness::robustness::baseline::{baseline_run, BASELINE_TOLERANCE};
use partition_robustness::robustness::{summarize, DEFAULT_PAIR_SEED};
use partition_robustness::storage;
use std::num::NonZeroUsize;

#[derive(Parser, Debug)]
#[clap(
    name = "partition-robustness",
    about = "Robustness of community partitions under injected noise"
)]
struct Cli {
    /// Path to the perturbation runs JSON file
    #[clap(long)]
    input: String,

    /// Output directory for the summary table
    #[clap(long, default_value = "paper_figures")]
    output_dir: String,

    /// Maximum run pairs compared per noise level (default: all pairs)
    #[clap(long)]
    max_pairs: Option<NonZeroUsize>,

    /// Seed for pair sampling when --max-pairs applies
    #[clap(long, default_value_t = DEFAULT_PAIR_SEED)]
    seed: u64,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Summarize noise levels one at a time
    #[clap(long)]
    sequential: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Starting robustness analysis");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    // 1. Load runs
    let results = load_results(&args.input)?;
    let nodes = results.node_names();
    log::info!("Partitions cover {} nodes", nodes.len());

    if let Some(best) = baseline_run(&results.levels, 0.0, BASELINE_TOLERANCE) {
        log::info!(
            "Baseline (p=0) best run: Q={:.4} with {} communities",
            best.modularity,
            best.community_count()
        );
    }

    // 2. Summarize per noise level
    let config = Config::new(args.max_pairs, args.seed, !args.sequential);
    let report = summarize(&results.levels, &config);

    for row in &report.rows {
        log::info!(
            "p={:.3}  Q={:.4}±{:.4}  H={:.4}  VI={:.4}",
            row.p,
            row.q_mean,
            row.q_std,
            row.consensus_entropy,
            row.mean_vi
        );
    }
    for failure in &report.failures {
        log::error!("{}", failure);
    }

    // 3. Save results
    let (csv_path, _) = storage::save_summary(&report, &args.output_dir)?;

    if report.rows.is_empty() && !results.levels.is_empty() {
        return Err(anyhow::anyhow!("No noise level could be summarized"));
    }

    log::info!("Analysis complete. Summary saved to {}", csv_path.display());

    Ok(())
}
