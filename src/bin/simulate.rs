//! Economy balance simulator CLI.
//!
//! Plays the economy headlessly with a greedy autoplayer and reports how far
//! it gets.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 100 runs, 30 minutes each
//!   cargo run --bin simulate -- -n 20 -s 7200     # 20 runs, 2 hours each
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use std::env;
use std::path::Path;
use tierforge::simulator::{run_simulation, SimConfig};
use tierforge::EconomyConfig;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    if config.verbosity >= 2 {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              TIERFORGE BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.runs);
    println!("  Seconds/run:    {}", config.seconds);
    println!("  Step:           {}s", config.effective_step());
    println!("  Roll at:        {} {}", config.roll_threshold, tier_zero_name(&config));
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Simulation aborted: {}", err);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => {
                eprintln!("Failed to write {}: {}", filename, err);
                std::process::exit(1);
            }
        }
    }
}

fn tier_zero_name(config: &SimConfig) -> &str {
    config
        .economy
        .tiers
        .first()
        .map(|t| t.name.as_str())
        .unwrap_or("Item 1")
}

fn load_economy(path: &str) -> EconomyConfig {
    match EconomyConfig::load(Path::new(path)) {
        Ok(economy) => economy,
        Err(err) => {
            eprintln!("Could not load {}: {}", path, err);
            std::process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds = args[i + 1].parse().unwrap_or(1800.0);
                    i += 1;
                }
            }
            "--step" => {
                if i + 1 < args.len() {
                    config.step_seconds = args[i + 1].parse().unwrap_or(config.step_seconds);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--roll-at" => {
                if i + 1 < args.len() {
                    config.roll_threshold = args[i + 1].parse().unwrap_or(config.roll_threshold);
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config.economy = load_economy(&args[i + 1]);
                    i += 1;
                }
            }
            "--json" => {
                write_json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, write_json)
}

fn print_help() {
    println!("Tierforge Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 100)");
    println!("    -s, --seconds <S>   Simulated seconds per run (default: 1800)");
    println!("    --step <S>          Seconds per simulation step (default: 0.1)");
    println!("    --seed <S>          Random seed for reproducibility");
    println!("    --roll-at <N>       Tier-0 stock that triggers a rune roll (default: 50)");
    println!("    --config <PATH>     Economy settings JSON file");
    println!("    -v, --verbose       Per-run output and tier-up logs on stderr");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
}
