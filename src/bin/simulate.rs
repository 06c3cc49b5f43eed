//! Round simulator CLI.
//!
//! Plays many rounds with an autopilot to check how reachable the win score is.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1000 rounds, 90% accuracy
//!   cargo run --bin simulate -- -a 0.75 -i 0.5   # sloppier, slower player
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use std::env;
use trash_toss::simulator::{run_simulation, SimConfig};
use trash_toss::GameConfig;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    let game_config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                TRASH TOSS ROUND SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Rounds:         {}", config.num_runs);
    println!("  Accuracy:       {:.0}%", config.accuracy * 100.0);
    println!("  Throw Interval: {:.2}s", config.throw_interval);
    println!("  Round Length:   {:.0}s", game_config.round_seconds);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config, &game_config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write {}: {}", filename, e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-a" | "--accuracy" => {
                if i + 1 < args.len() {
                    config.accuracy = args[i + 1].parse::<f64>().unwrap_or(0.9).clamp(0.0, 1.0);
                    i += 1;
                }
            }
            "-i" | "--interval" => {
                if i + 1 < args.len() {
                    config.throw_interval = args[i + 1].parse::<f64>().unwrap_or(0.35).max(0.0);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--perfect" => {
                config = SimConfig::perfect_player();
            }
            "--random" => {
                config = SimConfig::random_player();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Trash Toss Round Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of rounds (default: 1000)");
    println!("    -a, --accuracy <P>    Chance of picking the right bin (default: 0.9)");
    println!("    -i, --interval <S>    Seconds between throws (default: 0.35)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --perfect             Never miss, throw as fast as possible");
    println!("    --random              Guess every bin");
    println!("    -v, --verbose         Print every round");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
}
