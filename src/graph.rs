use crate::constants::MAX_GRAPH_NAME_LEN;
use crate::error::{BetsimError, Result};
use crate::simulation::Trajectory;

/// A named collection of simulation runs drawn on one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub name: String,
    pub trajectories: Vec<Trajectory>,
}

impl Graph {
    pub fn new(name: String) -> Self {
        Self {
            name,
            trajectories: Vec::new(),
        }
    }

    pub fn with_trajectories(name: String, trajectories: Vec<Trajectory>) -> Self {
        Self { name, trajectories }
    }

    pub fn run_count(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Final balance of every run, in append order.
    pub fn final_balances(&self) -> Vec<i64> {
        self.trajectories
            .iter()
            .filter_map(|t| t.last().copied())
            .collect()
    }
}

/// Checks that a graph name can double as a file name and returns it trimmed.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();

    let reason = if trimmed.is_empty() {
        Some("Graph name cannot be empty".to_string())
    } else if trimmed.chars().count() > MAX_GRAPH_NAME_LEN {
        Some(format!(
            "Graph name must be {} characters or less",
            MAX_GRAPH_NAME_LEN
        ))
    } else if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        Some(
            "Graph name can only contain letters, numbers, spaces, hyphens, and underscores"
                .to_string(),
        )
    } else {
        None
    };

    match reason {
        Some(reason) => Err(BetsimError::InvalidName { reason }),
        None => Ok(trimmed.to_string()),
    }
}
