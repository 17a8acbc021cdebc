//! Name-addressed storage of graphs, one JSON file per graph.
//!
//! Each file holds the graph's trajectories as an array of integer arrays.
//! Graphs are read lazily on `load_graph` and cached for the life of the
//! store. The store also owns which graph new runs are appended to.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::constants::GRAPH_FILE_EXTENSION;
use crate::distribution::Distribution;
use crate::error::{BetsimError, Result};
use crate::graph::{validate_name, Graph};
use crate::simulation::{simulate, BetParams, Trajectory};

/// Which graph new simulation runs are routed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

impl Selection {
    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(name) => Some(name.as_str()),
        }
    }
}

pub struct GraphStore {
    dir: PathBuf,
    names: Vec<String>,
    cache: HashMap<String, Graph>,
    selection: Selection,
}

impl GraphStore {
    /// Opens the graph directory, creating it if needed, and discovers the
    /// names of the graphs already saved there. Nothing is selected.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();

            // Only process .json files
            if path.extension().and_then(|s| s.to_str()) != Some(GRAPH_FILE_EXTENSION) {
                continue;
            }

            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if validate_name(stem).is_ok() => names.push(stem.to_string()),
                _ => debug!(path = %path.display(), "skipping file with unusable graph name"),
            }
        }
        names.sort();

        info!(dir = %dir.display(), graphs = names.len(), "opened graph store");

        Ok(Self {
            dir,
            names,
            cache: HashMap::new(),
            selection: Selection::Unselected,
        })
    }

    /// Creates an empty graph, saves it, and selects it.
    pub fn create_graph(&mut self, name: &str) -> Result<&Graph> {
        let name = validate_name(name)?;

        if self.names.contains(&name)
            || self.cache.contains_key(&name)
            || record_path(&self.dir, &name).exists()
        {
            return Err(BetsimError::DuplicateName { name });
        }

        write_record(&self.dir, &name, &[])?;
        info!(graph = %name, "created graph");

        self.names.push(name.clone());
        self.selection = Selection::Selected(name.clone());
        let graph = self
            .cache
            .entry(name.clone())
            .or_insert_with(|| Graph::new(name));
        Ok(&*graph)
    }

    /// Reads a graph from disk into the cache and selects it. On failure
    /// the selection is left as it was.
    pub fn load_graph(&mut self, name: &str) -> Result<&Graph> {
        let name = validate_name(name)?;
        let path = record_path(&self.dir, &name);

        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(graph = %name, "graph file not found");
                return Err(BetsimError::GraphNotFound { name });
            }
            Err(e) => return Err(e.into()),
        };

        let trajectories: Vec<Trajectory> =
            serde_json::from_str(&json).map_err(|e| BetsimError::Corrupt {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        info!(graph = %name, runs = trajectories.len(), "loaded graph");

        if !self.names.contains(&name) {
            self.names.push(name.clone());
        }
        self.selection = Selection::Selected(name.clone());
        let graph = Graph::with_trajectories(name.clone(), trajectories);
        self.cache.insert(name.clone(), graph);
        self.cache
            .get(&name)
            .ok_or(BetsimError::GraphNotFound { name })
    }

    /// Appends a run to the selected graph and rewrites its file.
    pub fn append_trajectory(&mut self, trajectory: Trajectory) -> Result<&Graph> {
        let name = match &self.selection {
            Selection::Selected(name) => name.clone(),
            Selection::Unselected => return Err(BetsimError::NoGraphSelected),
        };

        let graph = self
            .cache
            .get_mut(&name)
            .ok_or_else(|| BetsimError::GraphNotFound { name: name.clone() })?;

        graph.trajectories.push(trajectory);
        if let Err(e) = write_record(&self.dir, &name, &graph.trajectories) {
            // Keep memory in step with disk
            graph.trajectories.pop();
            return Err(e);
        }

        debug!(graph = %name, runs = graph.trajectories.len(), "appended trajectory");
        Ok(&*graph)
    }

    /// Simulates one run and appends it to the selected graph.
    ///
    /// The selection is checked before anything is simulated, and a bad
    /// distribution leaves the graph untouched.
    pub fn run_simulation(
        &mut self,
        params: &BetParams,
        distribution: &Distribution,
        rng: &mut impl Rng,
    ) -> Result<&Graph> {
        if self.selection == Selection::Unselected {
            return Err(BetsimError::NoGraphSelected);
        }

        let trajectory = simulate(params, distribution, rng)?;
        self.append_trajectory(trajectory)
    }

    /// Known graph names: those found on disk at open, then those created
    /// or loaded since.
    pub fn list_graph_names(&self) -> &[String] {
        &self.names
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_graph(&self) -> Option<&Graph> {
        self.selection.name().and_then(|name| self.cache.get(name))
    }

    /// A graph that has already been created or loaded in this session.
    pub fn graph(&self, name: &str) -> Option<&Graph> {
        self.cache.get(name)
    }
}

fn record_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, GRAPH_FILE_EXTENSION))
}

/// Writes the whole collection through a temp file and a rename, so a crash
/// mid-write leaves the previous record intact.
fn write_record(dir: &Path, name: &str, trajectories: &[Trajectory]) -> Result<()> {
    let json = serde_json::to_string(trajectories)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let final_path = record_path(dir, name);
    let temp_path = dir.join(format!("{}.{}.tmp", name, GRAPH_FILE_EXTENSION));

    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, &final_path)?;

    Ok(())
}
