//! Plot data for a graph: one line per run plus axis bounds that keep the
//! zero line in view.

use crate::constants::CHART_Y_PADDING;
use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    /// (bet number, balance)
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// One series per trajectory, labelled "Simulation 1", "Simulation 2", ...
pub fn series(graph: &Graph) -> Vec<Series> {
    graph
        .trajectories
        .iter()
        .enumerate()
        .map(|(i, trajectory)| Series {
            name: format!("Simulation {}", i + 1),
            points: trajectory
                .iter()
                .enumerate()
                .map(|(bet, &balance)| (bet as f64, balance as f64))
                .collect(),
        })
        .collect()
}

/// Axis bounds for a graph. The y range always includes zero and is padded
/// on both sides.
pub fn bounds(graph: &Graph) -> ChartBounds {
    let longest = graph.trajectories.iter().map(Vec::len).max().unwrap_or(0);
    let x_max = longest.saturating_sub(1).max(1) as f64;

    let balances = graph.trajectories.iter().flatten().copied();
    let (min, max) = balances.fold((0i64, 0i64), |(lo, hi), b| (lo.min(b), hi.max(b)));

    ChartBounds {
        x: [0.0, x_max],
        y: [min as f64 - CHART_Y_PADDING, max as f64 + CHART_Y_PADDING],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(trajectories: Vec<Vec<i64>>) -> Graph {
        Graph::with_trajectories("chart".to_string(), trajectories)
    }

    #[test]
    fn test_series_labels_and_points() {
        let s = series(&graph(vec![vec![100, 105], vec![100, 90, 95]]));
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].name, "Simulation 1");
        assert_eq!(s[1].name, "Simulation 2");
        assert_eq!(s[1].points, vec![(0.0, 100.0), (1.0, 90.0), (2.0, 95.0)]);
    }

    #[test]
    fn test_bounds_include_zero() {
        let b = bounds(&graph(vec![vec![100, 150, 120]]));
        assert_eq!(b.x, [0.0, 2.0]);
        assert_eq!(b.y, [-100.0, 250.0]);

        let b = bounds(&graph(vec![vec![-20, -50]]));
        assert_eq!(b.y, [-150.0, 100.0]);
    }

    #[test]
    fn test_bounds_empty_graph() {
        let b = bounds(&graph(Vec::new()));
        assert_eq!(b.x, [0.0, 1.0]);
        assert_eq!(b.y, [-100.0, 100.0]);
    }

    #[test]
    fn test_bounds_use_longest_run() {
        let b = bounds(&graph(vec![vec![1], vec![1, 2, 3, 4, 5]]));
        assert_eq!(b.x, [0.0, 4.0]);
    }
}
