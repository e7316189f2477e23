//! Command-line law checker
//!
//! Runs the law catalogue against the heaps shipped in `heap_laws` and
//! prints one line per (heap, law) pair. Exits with status 1 if any law is
//! violated.
//!
//! ```bash
//! # Every law against every heap
//! cargo run --bin heap-laws
//!
//! # Reproducible run of two laws against the pairing heap
//! cargo run --bin heap-laws -- --heap pairing --law small-meld --law meld-consistency --seed 7
//!
//! # More detail
//! RUST_LOG=heap_laws=debug cargo run --bin heap-laws
//! ```

use clap::Parser;
use heap_laws::laws::{self, CATALOGUE};
use heap_laws::runner::HeapKind;
use heap_laws::{CheckConfig, LawInfo};
use std::error::Error;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heap-laws")]
#[command(version)]
#[command(
    about = "Check the meldable heap laws against persistent heap implementations",
    long_about = None
)]
struct Cli {
    /// Random cases generated per law (overrides HEAP_LAWS_CASES)
    #[arg(long)]
    cases: Option<u32>,

    /// Maximum number of operations used to build one heap (overrides HEAP_LAWS_MAX_SIZE)
    #[arg(long)]
    max_size: Option<u32>,

    /// Maximum generator recursion depth (overrides HEAP_LAWS_MAX_DEPTH)
    #[arg(long)]
    max_depth: Option<u32>,

    /// Fixed RNG seed for reproducible runs (overrides HEAP_LAWS_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Heap to check; repeat to check several (default: all)
    #[arg(long = "heap", value_parser = HeapKind::from_str)]
    heaps: Vec<HeapKind>,

    /// Law to check; repeat to check several (default: all)
    #[arg(long = "law")]
    laws: Vec<String>,

    /// Print the law catalogue and exit
    #[arg(long)]
    list: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<CheckConfig, Box<dyn Error>> {
    let mut config = CheckConfig::from_env()?;
    if let Some(cases) = cli.cases {
        config.cases = cases;
    }
    if let Some(max_size) = cli.max_size {
        config.max_heap_size = max_size;
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    if cli.list {
        for law in CATALOGUE {
            println!("{:<26} {}", law.name, law.description);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(unknown) = cli.laws.iter().find(|name| laws::find(name).is_none()) {
        return Err(format!("unknown law `{}` (see --list)", unknown).into());
    }

    let config = build_config(&cli)?;
    let heaps = if cli.heaps.is_empty() {
        HeapKind::ALL.to_vec()
    } else {
        cli.heaps.clone()
    };
    info!(?config, heaps = heaps.len(), "checking heap laws");

    let selected = |law: &LawInfo| {
        cli.laws.is_empty() || cli.laws.iter().any(|name| name == law.name)
    };

    let mut violations = 0;
    for heap in heaps {
        for report in heap.check_all(&config, selected) {
            println!("{}", report);
            if let Err(failure) = report.into_result() {
                error!(%failure, "law check failed");
                violations += 1;
            }
        }
    }

    if violations > 0 {
        eprintln!("{} law check(s) failed", violations);
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
