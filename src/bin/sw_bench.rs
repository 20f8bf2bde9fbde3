//! CLI for timing one Smith-Waterman variant.
//!
//! Usage:
//!   sw-bench base                 # Time the scalar baseline
//!   sw-bench multicore-alpern     # Time a batch variant
//!   sw-bench --list               # List available variants
//!   sw-bench --verify             # Check every variant against the baseline

use clap::{Parser, ValueEnum};
use sw_bench::capability::CapabilityFlags;
use sw_bench::driver::{self, RunConfig};
use sw_bench::utils::{time_seed, PinStrategy, TimingConfig};
use sw_bench::{alignment, corpus, tui};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PinArg {
    /// Pin once around all per-element calls
    Global,
    /// Pin around each per-element call
    PerExecution,
    /// Never pin
    Disabled,
}

impl From<PinArg> for PinStrategy {
    fn from(arg: PinArg) -> Self {
        match arg {
            PinArg::Global => PinStrategy::Global,
            PinArg::PerExecution => PinStrategy::PerExecution,
            PinArg::Disabled => PinStrategy::Disabled,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sw-bench")]
#[command(about = "Times micro-optimized Smith-Waterman variants on a synthetic DNA corpus")]
struct Args {
    /// Variant to time (see --list)
    #[arg(required_unless_present_any = ["list", "verify"])]
    variant: Option<String>,

    /// Number of sequence pairs
    #[arg(long, default_value_t = corpus::DEFAULT_PAIRS)]
    pairs: usize,

    /// Length of every sequence
    #[arg(long, default_value_t = corpus::DEFAULT_LENGTH)]
    length: usize,

    /// Worker threads for multicore variants (0 = one per CPU)
    #[arg(long, default_value_t = alignment::pool::DEFAULT_THREADS)]
    threads: usize,

    /// Seed for corpus generation (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// CPU pinning for per-element timing
    #[arg(long, value_enum, default_value_t = PinArg::PerExecution)]
    pin: PinArg,

    /// Ignore AVX2/AVX-512 and run SIMD variants in scalar fallback mode
    #[arg(long)]
    no_simd: bool,

    /// Print run details before the average
    #[arg(short, long)]
    verbose: bool,

    /// List available variants and exit
    #[arg(short, long)]
    list: bool,

    /// Run every variant once and check their scores agree
    #[arg(long)]
    verify: bool,
}

fn main() {
    let args = Args::parse();

    if args.list {
        tui::print_available_variants();
        return;
    }

    let capability = CapabilityFlags::detect_with(args.no_simd);
    tui::print_banner(capability);

    let config = RunConfig {
        pairs: args.pairs,
        length: args.length,
        threads: args.threads,
        seed: args.seed.unwrap_or_else(time_seed),
        capability,
        timing: TimingConfig {
            pin_strategy: args.pin.into(),
        },
    };

    if args.verify {
        match driver::verify(&config) {
            Ok(totals) => {
                println!("Verified {} variants:", totals.len());
                for (descriptor, score) in &totals {
                    tui::print_verified(descriptor, *score);
                }
            }
            Err(e) => {
                tui::print_error(&e);
                std::process::exit(1);
            }
        }
        return;
    }

    let identifier = args.variant.as_deref().unwrap_or_default();
    match driver::run(identifier, &config) {
        Ok(report) => tui::print_report(&report, args.verbose),
        Err(e) => {
            tui::print_error(&e);
            std::process::exit(1);
        }
    }
}
