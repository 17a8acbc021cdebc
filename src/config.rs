//! Runtime configuration and command-line parsing for the `betsim` binary.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::constants::{DATA_DIR_NAME, GRAPHS_DIR_NAME, LOG_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one JSON file per graph
    pub graphs_dir: PathBuf,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl AppConfig {
    /// Graphs and log file both kept in `dir`.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            log_file: dir.join(LOG_FILE_NAME),
            graphs_dir: dir,
            verbose: false,
        }
    }

    /// `~/.betsim/graphs`, logging to `~/.betsim/betsim.log`.
    pub fn from_home() -> io::Result<Self> {
        let data_dir = data_dir()?;
        Ok(Self {
            graphs_dir: data_dir.join(GRAPHS_DIR_NAME),
            log_file: data_dir.join(LOG_FILE_NAME),
            verbose: false,
        })
    }
}

/// Get the ~/.betsim/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run {
        dir: Option<PathBuf>,
        verbose: bool,
    },
    Version,
    Help,
}

/// Parses arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut dir = None;
    let mut verbose = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" => {
                i += 1;
                let path = args.get(i).ok_or("--dir requires a path")?;
                dir = Some(PathBuf::from(path));
            }
            "--verbose" => verbose = true,
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(CliCommand::Run { dir, verbose })
}

pub fn usage() -> &'static str {
    "Betsim - Terminal Betting Simulator\n\
     \n\
     Usage: betsim [OPTIONS]\n\
     \n\
     Options:\n\
     \x20 --dir PATH   Store graphs (and the log) in PATH instead of ~/.betsim\n\
     \x20 --verbose    Log at debug level\n\
     \x20 --version    Show version information\n\
     \x20 --help       Show this help message"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(
            parse_args(&[]),
            Ok(CliCommand::Run {
                dir: None,
                verbose: false
            })
        );
    }

    #[test]
    fn test_dir_and_verbose() {
        assert_eq!(
            parse_args(&args(&["--dir", "/tmp/g", "--verbose"])),
            Ok(CliCommand::Run {
                dir: Some(PathBuf::from("/tmp/g")),
                verbose: true
            })
        );
    }

    #[test]
    fn test_dir_requires_value() {
        assert!(parse_args(&args(&["--dir"])).is_err());
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(&args(&["-v"])), Ok(CliCommand::Version));
        assert_eq!(parse_args(&args(&["--help"])), Ok(CliCommand::Help));
    }

    #[test]
    fn test_unknown_argument() {
        assert_eq!(
            parse_args(&args(&["--bogus"])),
            Err("Unknown argument: --bogus".to_string())
        );
    }

    #[test]
    fn test_with_dir_keeps_log_alongside() {
        let config = AppConfig::with_dir("/data/bets");
        assert_eq!(config.graphs_dir, PathBuf::from("/data/bets"));
        assert_eq!(config.log_file, PathBuf::from("/data/bets/betsim.log"));
    }
}
