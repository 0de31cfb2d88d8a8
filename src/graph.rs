//! Graph data model and the position-update contract.
//!
//! The engine never owns the diagram data: nodes and edges are created,
//! deleted, and flagged by the embedding application (for example by
//! algorithm-stepping logic toggling `visited`). This module defines the
//! read side the engine consumes ([`Graph`], [`Node`], [`Edge`]) plus the
//! explicit request/response contract ([`GraphStore`]) through which a drag
//! interaction asks the owner to move a node.

use thiserror::Error;

/// A diagram node: a circle centered at `(x, y)`, identified by `id`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    /// Unique within a graph (caller contract).
    pub id: i32,
    pub x: f32,
    pub y: f32,
    /// Numeric label rendered when the diagram is weighted.
    pub weight: f32,
    /// Highlight flag toggled by external algorithm stepping.
    pub visited: bool,
}

impl Node {
    /// Create an unweighted, unvisited node.
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            weight: 0.0,
            visited: false,
        }
    }

    /// Create a weighted node.
    pub fn weighted(id: i32, x: f32, y: f32, weight: f32) -> Self {
        Self {
            weight,
            ..Self::new(id, x, y)
        }
    }
}

/// A connection between two nodes, referenced by their ids.
///
/// Both endpoints must resolve via [`Graph::find_node`]; a dangling
/// reference is a caller error surfaced as [`LookupError`] when the scene
/// is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub source: i32,
    pub target: i32,
    /// Numeric label rendered when the diagram is weighted.
    pub weight: f32,
    /// Highlight flag toggled by external algorithm stepping.
    pub visited: bool,
}

impl Edge {
    /// Create an unweighted, unvisited edge.
    pub fn new(source: i32, target: i32) -> Self {
        Self {
            source,
            target,
            weight: 0.0,
            visited: false,
        }
    }

    /// Create a weighted edge.
    pub fn weighted(source: i32, target: i32, weight: f32) -> Self {
        Self {
            weight,
            ..Self::new(source, target)
        }
    }
}

/// Lookup failure while resolving graph references.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// An edge references a node id that is not present in the graph.
    /// This is a data-integrity violation by the graph owner, not a
    /// recoverable rendering condition.
    #[error("edge references unknown node {0}")]
    NodeNotFound(i32),
}

/// Ordered node and edge storage.
///
/// Insertion order matters: it is the draw order for nodes and the
/// tie-break order for edges with equal `visited` flags.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. The caller guarantees id uniqueness.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Append an edge.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Resolve a node id.
    pub fn find_node(&self, id: i32) -> Result<&Node, LookupError> {
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .ok_or(LookupError::NodeNotFound(id))
    }

    /// Mutable lookup for the owning layer.
    pub fn node_mut(&mut self, id: i32) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }
}

/// Layout geometry constants, all positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Logical width of the viewport at zoom 1.
    pub base_width: f32,
    /// Logical height of the viewport at zoom 1.
    pub base_height: f32,
    /// Node circle radius, also the hit-test radius.
    pub node_radius: f32,
    /// Extra gap between a directed edge's arrowhead and the node boundary.
    pub arrow_gap: f32,
    /// Horizontal gap between a node boundary and its weight label.
    pub node_weight_gap: f32,
    /// Perpendicular gap between an edge line and its weight label.
    pub edge_weight_gap: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            base_width: 320.0,
            base_height: 180.0,
            node_radius: 12.0,
            arrow_gap: 4.0,
            node_weight_gap: 16.0,
            edge_weight_gap: 16.0,
        }
    }
}

/// Per-render toggles. Not stored per element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Draw arrowheads and clip edge endpoints to the node boundary.
    pub directed: bool,
    /// Emit weight labels for nodes and edges.
    pub weighted: bool,
}

/// Camera state owned by the pan strategy. `zoom` must stay positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub center_x: f32,
    pub center_y: f32,
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom: 1.0,
        }
    }
}

/// Outcome of a position-update request.
#[derive(Clone, Debug, PartialEq)]
pub enum MoveResponse {
    /// The owner performed the write.
    Accepted,
    /// The owner refused, with a reason.
    Rejected(String),
}

impl MoveResponse {
    /// Check whether the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResponse::Accepted)
    }
}

/// Position-update contract between the interaction engine and the graph
/// owner.
///
/// The engine never writes node positions itself; every drag step issues one
/// `request_node_move`, and the owner validates and applies (or refuses) it.
pub trait GraphStore {
    /// Request that the node `id` be moved to model coordinates `(x, y)`.
    fn request_node_move(&mut self, id: i32, x: f32, y: f32) -> MoveResponse;
}

/// Reference implementation: the graph applies any move whose id resolves.
impl GraphStore for Graph {
    fn request_node_move(&mut self, id: i32, x: f32, y: f32) -> MoveResponse {
        match self.node_mut(id) {
            Some(node) => {
                node.x = x;
                node.y = y;
                MoveResponse::Accepted
            }
            None => {
                log::debug!("move request for unknown node {}", id);
                MoveResponse::Rejected(format!("node {} does not exist", id))
            }
        }
    }
}
