//! Session — orchestrates upload, execution, and playback for one user.
//!
//! DESIGN
//! ======
//! Owns every piece of state the visualizer juggles: the parsed graph, the
//! selected algorithm, the playback machine, the in-flight busy flag and the
//! latest-error slot. State transitions replace records wholesale. A failed
//! run leaves the previous graph intact; playback is reset BEFORE the
//! request on purpose, so stale results are never shown next to a new
//! error. At most one execution is in flight per session, and navigation is
//! rejected while a request could replace the timeline it would scrub.

use std::sync::Arc;

use tracing::{info, warn};

use crate::algorithm::AlgorithmKind;
use crate::exec::{AlgorithmExec, ExecError};
use crate::matrix::{self, Graph, ParseError};
use crate::normalize::{self, InvalidResultShape, ResultDetail};
use crate::playback::Playback;
use crate::render::{self, CellView, DistanceRow, MstRow, NodeView};

// =============================================================================
// ERROR
// =============================================================================

/// Errors surfaced to the user from session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Only `.txt` uploads are accepted.
    #[error("only .txt files are accepted: {0}")]
    UnsupportedFile(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An operation that needs a graph ran before any upload succeeded.
    #[error("no graph loaded")]
    NoGraph,

    #[error("start node {start} is out of range (must be between 0 and {max})")]
    StartOutOfRange { start: usize, max: usize },

    /// A run is already in flight; at most one per session.
    #[error("an execution is already in flight")]
    Busy,

    #[error(transparent)]
    Transport(#[from] ExecError),

    #[error(transparent)]
    ResultShape(#[from] InvalidResultShape),

    #[error("step {index} is out of range (timeline has {len} steps)")]
    JumpOutOfRange { index: usize, len: usize },
}

impl SessionError {
    /// Grepable error code for logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedFile(_) => "E_UNSUPPORTED_FILE",
            Self::Parse(_) => "E_PARSE",
            Self::NoGraph => "E_NO_GRAPH",
            Self::StartOutOfRange { .. } => "E_START_RANGE",
            Self::Busy => "E_BUSY",
            Self::Transport(_) => "E_TRANSPORT",
            Self::ResultShape(_) => "E_RESULT_SHAPE",
            Self::JumpOutOfRange { .. } => "E_JUMP_RANGE",
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// One user's visualizer state.
pub struct Session {
    exec: Arc<dyn AlgorithmExec>,
    graph: Option<Graph>,
    kind: Option<AlgorithmKind>,
    playback: Option<Playback>,
    busy: bool,
    last_error: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(exec: Arc<dyn AlgorithmExec>) -> Self {
        Self { exec, graph: None, kind: None, playback: None, busy: false, last_error: None }
    }

    // =========================================================================
    // UPLOAD
    // =========================================================================

    /// Load a graph from an uploaded `.txt` file. Replaces the graph
    /// wholesale and resets playback; on failure the previous graph stays.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnsupportedFile`] for non-`.txt` names, or the
    /// underlying [`ParseError`].
    pub fn load_graph_file(&mut self, file_name: &str, content: &str) -> Result<(), SessionError> {
        let result = self.load_inner(file_name, content);
        self.record(&result);
        result
    }

    fn load_inner(&mut self, file_name: &str, content: &str) -> Result<(), SessionError> {
        if !file_name.ends_with(".txt") {
            return Err(SessionError::UnsupportedFile(file_name.to_owned()));
        }
        let graph = matrix::parse(content)?;
        info!(file = file_name, nodes = graph.size(), "graph loaded");
        self.graph = Some(graph);
        self.kind = None;
        self.playback = None;
        self.last_error = None;
        Ok(())
    }

    // =========================================================================
    // EXECUTION
    // =========================================================================

    /// Dispatch `kind` to the compute service and install the normalized
    /// replay. Playback is reset before the request; the busy flag is always
    /// cleared on the completion path, success or failure.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] while a run is in flight, range/precondition
    /// errors, or the transport/shape error from the run itself.
    pub async fn run(&mut self, kind: AlgorithmKind, start: usize) -> Result<(), SessionError> {
        let result = self.run_inner(kind, start).await;
        self.record(&result);
        result
    }

    async fn run_inner(&mut self, kind: AlgorithmKind, start: usize) -> Result<(), SessionError> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        let (matrix, labels) = match &self.graph {
            Some(g) => (g.weights().to_vec(), g.labels().to_vec()),
            None => return Err(SessionError::NoGraph),
        };
        if kind.uses_start() && start >= matrix.len() {
            return Err(SessionError::StartOutOfRange { start, max: matrix.len() - 1 });
        }

        self.busy = true;
        self.kind = Some(kind);
        // Reset before fetch: a failed run must not leave stale results
        // on screen next to the new error.
        self.playback = None;
        self.last_error = None;

        info!(%kind, start, nodes = matrix.len(), "dispatching algorithm run");
        let exec = Arc::clone(&self.exec);
        let result = exec.run(kind, &matrix, kind.uses_start().then_some(start)).await;
        self.busy = false;

        let raw = result?;
        let normalized = normalize::normalize(kind, &raw, &labels)?;
        info!(%kind, steps = normalized.timeline.len(), "run normalized");
        self.playback = Some(Playback::new(normalized));
        Ok(())
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Advance the replay one step.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] while a run is in flight.
    pub fn next(&mut self) -> Result<(), SessionError> {
        self.navigate(|p| {
            p.next();
            Ok(())
        })
    }

    /// Step the replay back.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] while a run is in flight.
    pub fn prev(&mut self) -> Result<(), SessionError> {
        self.navigate(|p| {
            p.prev();
            Ok(())
        })
    }

    /// Seek the replay to `index`. Out-of-range seeks are rejected and the
    /// position stays unchanged.
    ///
    /// # Errors
    ///
    /// [`SessionError::JumpOutOfRange`] or [`SessionError::Busy`].
    pub fn jump(&mut self, index: usize) -> Result<(), SessionError> {
        self.navigate(|p| {
            if p.jump(index) {
                Ok(())
            } else {
                Err(SessionError::JumpOutOfRange { index, len: p.len() })
            }
        })
    }

    /// Rewind the replay to step zero.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] while a run is in flight.
    pub fn rewind(&mut self) -> Result<(), SessionError> {
        self.navigate(|p| {
            p.reset();
            Ok(())
        })
    }

    fn navigate(
        &mut self,
        op: impl FnOnce(&mut Playback) -> Result<(), SessionError>,
    ) -> Result<(), SessionError> {
        let result = if self.busy {
            Err(SessionError::Busy)
        } else if let Some(playback) = self.playback.as_mut() {
            op(playback)
        } else {
            // Nothing to scrub yet.
            Ok(())
        };
        self.record(&result);
        result
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    #[must_use]
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    #[must_use]
    pub fn kind(&self) -> Option<AlgorithmKind> {
        self.kind
    }

    #[must_use]
    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The latest surfaced error, if not yet dismissed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Dismiss the error panel.
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    fn record(&mut self, result: &Result<(), SessionError>) {
        if let Err(e) = result {
            warn!(code = e.code(), error = %e, "session error");
            self.last_error = Some(e.to_string());
        }
    }

    // =========================================================================
    // RENDER BOUNDARY
    // =========================================================================

    /// Per-node render state; empty until a graph is loaded.
    #[must_use]
    pub fn node_views(&self) -> Vec<NodeView> {
        self.graph
            .as_ref()
            .map(|g| render::node_views(g, self.playback.as_ref()))
            .unwrap_or_default()
    }

    /// Adjacency-table cells; empty until a graph is loaded.
    #[must_use]
    pub fn cell_views(&self) -> Vec<Vec<CellView>> {
        self.graph.as_ref().map(render::cell_views).unwrap_or_default()
    }

    /// Dijkstra distance table, present only after a dijkstra run.
    #[must_use]
    pub fn distance_rows(&self) -> Option<Vec<DistanceRow>> {
        let graph = self.graph.as_ref()?;
        match self.playback.as_ref()?.detail() {
            ResultDetail::Dijkstra { distances, paths } => {
                Some(render::distance_rows(distances, paths, graph.labels()))
            }
            _ => None,
        }
    }

    /// MST edge table plus total weight, present only after a prim/kruskal
    /// run.
    #[must_use]
    pub fn mst_rows(&self) -> Option<(Vec<MstRow>, f64)> {
        let graph = self.graph.as_ref()?;
        match self.playback.as_ref()?.detail() {
            ResultDetail::Mst { edges, total_weight } => {
                Some((render::mst_rows(edges, graph.labels()), *total_weight))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
