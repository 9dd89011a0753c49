//! Solution records.
//!
//! A [`Solution`] is built once from a final selection and never changes.
//! It serializes with the field names the map and comparison tooling
//! reads:
//!
//! ```json
//! {
//!   "vertices_selecionados": [0],
//!   "vertices_cobertos": [0, 1, 2],
//!   "num_cameras": 1,
//!   "total_cobertura": 3,
//!   "total_vertices": 3
//! }
//! ```

use crate::coverage::{cover, Selection};
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Final placement with its coverage and summary counts.
///
/// Invariants: `num_cameras == selected.len()`,
/// `total_cobertura == covered.len()`, `total_cobertura <= total_vertices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Camera vertices, ascending.
    #[serde(rename = "vertices_selecionados")]
    pub selected: Vec<VertexId>,

    /// Vertices covered by at least one camera, ascending.
    #[serde(rename = "vertices_cobertos")]
    pub covered: Vec<VertexId>,

    /// Number of cameras.
    #[serde(rename = "num_cameras")]
    pub size: usize,

    /// Number of covered vertices.
    #[serde(rename = "total_cobertura")]
    pub coverage_count: usize,

    /// Number of vertices in the graph.
    pub total_vertices: usize,
}

impl Solution {
    /// Builds the record for `selection` on `graph`.
    ///
    /// # Errors
    /// [`CoverageError::NotFound`](crate::CoverageError::NotFound) if a
    /// selected vertex is absent from `graph`.
    pub fn from_selection(graph: &Graph, selection: &Selection) -> Result<Self> {
        let covered: Vec<VertexId> = cover(graph, selection)?.into_iter().collect();
        let selected: Vec<VertexId> = selection.iter().collect();
        Ok(Self {
            size: selected.len(),
            coverage_count: covered.len(),
            total_vertices: graph.vertex_count(),
            selected,
            covered,
        })
    }

    /// The selected vertices as a [`Selection`].
    pub fn selection(&self) -> Selection {
        self.selected.iter().copied().collect()
    }

    /// Whether every vertex of the graph is covered.
    pub fn is_full_cover(&self) -> bool {
        self.coverage_count == self.total_vertices
    }

    /// Fraction of vertices covered, in `[0, 1]`. An empty graph counts as 0.
    pub fn coverage_ratio(&self) -> f64 {
        if self.total_vertices == 0 {
            0.0
        } else {
            self.coverage_count as f64 / self.total_vertices as f64
        }
    }

    /// Average number of covered vertices per camera, 0 without cameras.
    pub fn vertices_per_camera(&self) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            self.coverage_count as f64 / self.size as f64
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a record previously written by [`to_json_pretty`](Self::to_json_pretty).
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the record as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_json_pretty()?)?;
        log::info!(
            "wrote solution with {} cameras covering {}/{} vertices to {}",
            self.size,
            self.coverage_count,
            self.total_vertices,
            path.display()
        );
        Ok(())
    }
}
