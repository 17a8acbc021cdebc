//! Betsim - Terminal Betting Simulator Library
//!
//! Simulates repeated bets over a discrete payout distribution and keeps the
//! resulting balance trajectories in named, file-backed graphs.

pub mod app;
pub mod build_info;
pub mod chart;
pub mod config;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod form;
pub mod graph;
pub mod graph_store;
pub mod logging;
pub mod runner;
pub mod simulation;

pub use distribution::{Distribution, Outcome};
pub use error::{BetsimError, Result};
pub use graph::Graph;
pub use graph_store::{GraphStore, Selection};
pub use simulation::{simulate, simulate_with, BetParams, Trajectory};
