//! Headless batch runs: simulate without the terminal UI and append the
//! results to a graph.

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::constants::{DEFAULT_BET_COUNT, DEFAULT_START_BALANCE, DEFAULT_WAGER};
use crate::distribution::{Distribution, Outcome};
use crate::error::{BetsimError, Result};
use crate::graph_store::GraphStore;
use crate::simulation::BetParams;

/// Configuration for a headless batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub graph: String,
    /// Create the graph instead of loading it
    pub create: bool,
    pub params: BetParams,
    pub outcomes: Vec<Outcome>,
    pub runs: u32,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
    /// Graph directory (None = ~/.betsim/graphs)
    pub dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            graph: String::new(),
            create: false,
            params: BetParams {
                start_balance: DEFAULT_START_BALANCE,
                wager: DEFAULT_WAGER,
                bet_count: DEFAULT_BET_COUNT,
                allow_broke: false,
            },
            outcomes: Vec::new(),
            runs: 1,
            seed: None,
            dir: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunnerCommand {
    Run(RunnerConfig),
    Help,
    Version,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> std::result::Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn number<T: std::str::FromStr>(
    args: &[String],
    i: usize,
    flag: &str,
) -> std::result::Result<T, String> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .map_err(|_| format!("{} requires a number, got '{}'", flag, raw))
}

/// Parses `REWARD:PROBABILITY`, e.g. `-10:0.5`.
pub fn parse_outcome(text: &str) -> std::result::Result<Outcome, String> {
    let (reward, probability) = text
        .split_once(':')
        .ok_or_else(|| format!("outcome '{}' must look like REWARD:PROBABILITY", text))?;
    let reward = reward
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("reward in '{}' must be a whole number", text))?;
    let probability = probability
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("probability in '{}' must be a number", text))?;
    Ok(Outcome::new(reward, probability))
}

/// Parses arguments, excluding the program name.
pub fn parse_runner_args(args: &[String]) -> std::result::Result<RunnerCommand, String> {
    let mut config = RunnerConfig::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--graph" | "-g" => {
                i += 1;
                config.graph = value(args, i, flag)?.to_string();
            }
            "--create" => config.create = true,
            "--start" => {
                i += 1;
                config.params.start_balance = number(args, i, flag)?;
            }
            "--wager" => {
                i += 1;
                config.params.wager = number(args, i, flag)?;
            }
            "--bets" => {
                i += 1;
                config.params.bet_count = number(args, i, flag)?;
            }
            "--outcome" | "-o" => {
                i += 1;
                config.outcomes.push(parse_outcome(value(args, i, flag)?)?);
            }
            "--allow-broke" => config.params.allow_broke = true,
            "--runs" | "-n" => {
                i += 1;
                config.runs = number(args, i, flag)?;
            }
            "--seed" | "-s" => {
                i += 1;
                config.seed = Some(number(args, i, flag)?);
            }
            "--dir" => {
                i += 1;
                config.dir = Some(PathBuf::from(value(args, i, flag)?));
            }
            "--verbose" => config.verbose = true,
            "--version" => return Ok(RunnerCommand::Version),
            "-h" | "--help" => return Ok(RunnerCommand::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    if config.graph.is_empty() {
        return Err("--graph is required".to_string());
    }
    Ok(RunnerCommand::Run(config))
}

/// Final balances of one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub graph: String,
    pub final_balances: Vec<i64>,
    /// Runs in the graph after the batch
    pub total_runs: usize,
}

impl BatchReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, balance) in self.final_balances.iter().enumerate() {
            out.push_str(&format!("Run {:>3}: final balance {}\n", i + 1, balance));
        }
        out.push_str(&format!(
            "Appended {} run(s) to '{}' ({} total)",
            self.final_balances.len(),
            self.graph,
            self.total_runs
        ));
        out
    }
}

/// Runs the batch against an opened store.
pub fn run_batch(store: &mut GraphStore, config: &RunnerConfig) -> Result<BatchReport> {
    // Bad odds must not leave a new record or a changed selection behind
    let distribution = Distribution::new(config.outcomes.clone());
    distribution.validate()?;

    if config.create {
        store.create_graph(&config.graph)?;
    } else {
        store.load_graph(&config.graph)?;
    }

    let mut final_balances = Vec::with_capacity(config.runs as usize);
    let mut total_runs = 0;
    for run_idx in 0..config.runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let graph = store.run_simulation(&config.params, &distribution, &mut rng)?;
        total_runs = graph.run_count();
        if let Some(&last) = graph.trajectories.last().and_then(|t| t.last()) {
            final_balances.push(last);
        }
    }

    let graph = store
        .selection()
        .name()
        .map(str::to_string)
        .ok_or(BetsimError::NoGraphSelected)?;
    info!(graph = %graph, runs = config.runs, "batch complete");

    Ok(BatchReport {
        graph,
        final_balances,
        total_runs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_outcome() {
        assert_eq!(parse_outcome("-10:0.5"), Ok(Outcome::new(-10, 0.5)));
        assert!(parse_outcome("10").is_err());
        assert!(parse_outcome("ten:0.5").is_err());
    }

    #[test]
    fn test_parse_full_command() {
        let cmd = parse_runner_args(&args(&[
            "--graph", "coins", "--create", "--start", "50", "--wager", "2", "--bets", "10",
            "-o", "4:0.5", "-o", "0:0.5", "--allow-broke", "-n", "3", "--seed", "42",
        ]))
        .unwrap();

        let RunnerCommand::Run(config) = cmd else {
            panic!("expected a run command");
        };
        assert_eq!(config.graph, "coins");
        assert!(config.create);
        assert_eq!(
            config.params,
            BetParams {
                start_balance: 50,
                wager: 2,
                bet_count: 10,
                allow_broke: true
            }
        );
        assert_eq!(config.outcomes.len(), 2);
        assert_eq!(config.runs, 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_parse_requires_graph() {
        assert!(parse_runner_args(&args(&["--runs", "2"])).is_err());
        assert_eq!(
            parse_runner_args(&args(&["--help"])),
            Ok(RunnerCommand::Help)
        );
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        let err = parse_runner_args(&args(&["--graph", "g", "--bets", "many"])).unwrap_err();
        assert_eq!(err, "--bets requires a number, got 'many'");
    }

    fn coin_config(dir: &TempDir, create: bool) -> RunnerConfig {
        RunnerConfig {
            graph: "batch".to_string(),
            create,
            outcomes: vec![Outcome::new(10, 0.5), Outcome::new(-10, 0.5)],
            runs: 3,
            seed: Some(7),
            dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_batch_creates_then_appends() {
        let dir = TempDir::new().unwrap();

        let mut store = GraphStore::open(dir.path()).unwrap();
        let report = run_batch(&mut store, &coin_config(&dir, true)).unwrap();
        assert_eq!(report.final_balances.len(), 3);
        assert_eq!(report.total_runs, 3);

        // A fresh store, as in a later session
        let mut store = GraphStore::open(dir.path()).unwrap();
        let report = run_batch(&mut store, &coin_config(&dir, false)).unwrap();
        assert_eq!(report.total_runs, 6);
    }

    #[test]
    fn test_batch_is_reproducible_with_seed() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        let mut a = GraphStore::open(dir_a.path()).unwrap();
        let mut b = GraphStore::open(dir_b.path()).unwrap();

        let report_a = run_batch(&mut a, &coin_config(&dir_a, true)).unwrap();
        let report_b = run_batch(&mut b, &coin_config(&dir_b, true)).unwrap();
        assert_eq!(report_a.final_balances, report_b.final_balances);
    }

    #[test]
    fn test_batch_missing_graph() {
        let dir = TempDir::new().unwrap();
        let mut store = GraphStore::open(dir.path()).unwrap();
        assert!(matches!(
            run_batch(&mut store, &coin_config(&dir, false)),
            Err(BetsimError::GraphNotFound { .. })
        ));
    }

    #[test]
    fn test_batch_bad_distribution_leaves_no_record() {
        let dir = TempDir::new().unwrap();
        let mut store = GraphStore::open(dir.path()).unwrap();
        let config = RunnerConfig {
            outcomes: vec![Outcome::new(1, 0.5)],
            ..coin_config(&dir, true)
        };
        assert!(matches!(
            run_batch(&mut store, &config),
            Err(BetsimError::InvalidDistribution { .. })
        ));
        assert!(store.selected_graph().is_none());
        assert!(store.list_graph_names().is_empty());
        assert!(!dir.path().join("batch.json").exists());

        // Corrected odds can still create the graph
        let report = run_batch(&mut store, &coin_config(&dir, true)).unwrap();
        assert_eq!(report.total_runs, 3);
    }

    #[test]
    fn test_report_text() {
        let report = BatchReport {
            graph: "g".to_string(),
            final_balances: vec![120, 80],
            total_runs: 5,
        };
        let text = report.to_text();
        assert!(text.contains("Run   1: final balance 120"));
        assert!(text.ends_with("Appended 2 run(s) to 'g' (5 total)"));
    }
}
