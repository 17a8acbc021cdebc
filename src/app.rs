//! Application state shared by the terminal UI: the graph store, the form
//! being edited, and the last error shown to the user.

use rand::Rng;
use tracing::{info, warn};

use crate::error::BetsimError;
use crate::form::SimulationForm;
use crate::graph::Graph;
use crate::graph_store::GraphStore;

/// A titled message for the user, shown until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub title: String,
    pub body: String,
}

impl StatusMessage {
    pub fn from_error(err: &BetsimError) -> Self {
        let title = match err {
            BetsimError::InvalidDistribution { .. } | BetsimError::InvalidInput { .. } => {
                "Input Error"
            }
            BetsimError::NoGraphSelected => "Selection Error",
            BetsimError::DuplicateName { .. } | BetsimError::InvalidName { .. } => "Name Error",
            BetsimError::GraphNotFound { .. } | BetsimError::Corrupt { .. } | BetsimError::Io(_) => {
                "File Error"
            }
        };
        Self {
            title: title.to_string(),
            body: err.to_string(),
        }
    }
}

pub struct App<R: Rng> {
    pub store: GraphStore,
    pub form: SimulationForm,
    pub message: Option<StatusMessage>,
    rng: R,
}

impl<R: Rng> App<R> {
    pub fn new(store: GraphStore, rng: R) -> Self {
        Self {
            store,
            form: SimulationForm::new(),
            message: None,
            rng,
        }
    }

    /// Parses the form, runs one simulation, and appends it to the selected
    /// graph. Returns whether a run was added.
    pub fn run_simulation(&mut self) -> bool {
        if self.store.selected_graph().is_none() {
            self.report(BetsimError::NoGraphSelected);
            return false;
        }

        let (params, distribution) = match self.form.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                self.report(e);
                return false;
            }
        };

        match self
            .store
            .run_simulation(&params, &distribution, &mut self.rng)
        {
            Ok(graph) => {
                info!(
                    graph = %graph.name,
                    runs = graph.run_count(),
                    final_balance = graph.final_balances().last().copied().unwrap_or_default(),
                    "simulation appended"
                );
                true
            }
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    pub fn create_graph(&mut self, name: &str) -> bool {
        match self.store.create_graph(name) {
            Ok(_) => true,
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    pub fn load_graph(&mut self, name: &str) -> bool {
        match self.store.load_graph(name) {
            Ok(_) => true,
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    pub fn selected_graph(&self) -> Option<&Graph> {
        self.store.selected_graph()
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    fn report(&mut self, err: BetsimError) {
        warn!(error = %err, "action failed");
        self.message = Some(StatusMessage::from_error(&err));
    }
}
