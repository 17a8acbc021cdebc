//! Headless betting simulator.
//!
//! Runs simulations without the terminal UI and appends them to a graph, so
//! batches can be scripted and later inspected in `betsim`.
//!
//! Usage:
//!   cargo run --bin simulate -- --graph NAME [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate -- -g coins --create -o 10:0.5 -o -10:0.5
//!   cargo run --bin simulate -- -g coins -o 10:0.5 -o -10:0.5 -n 20 --seed 42

use betsim::build_info;
use betsim::config::AppConfig;
use betsim::graph_store::GraphStore;
use betsim::logging;
use betsim::runner::{parse_runner_args, run_batch, RunnerCommand};
use std::env;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match parse_runner_args(&args) {
        Ok(RunnerCommand::Run(config)) => config,
        Ok(RunnerCommand::Help) => {
            print_help();
            return Ok(());
        }
        Ok(RunnerCommand::Version) => {
            println!("{}", build_info::version_string("simulate"));
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init_stderr_logging(config.verbose)?;

    let graphs_dir = match &config.dir {
        Some(dir) => dir.clone(),
        None => AppConfig::from_home()?.graphs_dir,
    };

    let result = GraphStore::open(&graphs_dir).and_then(|mut store| run_batch(&mut store, &config));
    match result {
        Ok(report) => {
            println!("{}", report.to_text());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("Betsim Headless Simulator");
    println!();
    println!("USAGE:");
    println!("    simulate --graph <NAME> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -g, --graph <NAME>      Graph to append to (required)");
    println!("    --create                Create the graph instead of loading it");
    println!("    --start <N>             Starting balance (default: 100)");
    println!("    --wager <N>             Wager per bet (default: 5)");
    println!("    --bets <N>              Number of bets per run (default: 100)");
    println!("    -o, --outcome <R:P>     Outcome reward and probability, repeatable");
    println!("    --allow-broke           Stop a run once the balance reaches zero");
    println!("    -n, --runs <N>          Number of runs (default: 1)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    --dir <PATH>            Graph directory (default: ~/.betsim/graphs)");
    println!("    --verbose               Debug logging on stderr");
    println!("    --version               Show version information");
    println!("    -h, --help              Show this help");
}
