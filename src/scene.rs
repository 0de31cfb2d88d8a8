//! Scene assembly: turns a graph into an ordered list of drawing primitives.
//!
//! The scene is the engine's only output: a flat, ordered list of vector
//! primitives tagged with style classifiers (`directed`, `visited`), plus
//! the view-box rectangle derived from the camera state. The host rendering
//! surface walks the list in order, so list order is draw order.

use crate::edge_geometry::{edge_geometry, edge_path_command};
use crate::graph::{Dimensions, Edge, Graph, LookupError, Options, ViewState};

/// Visible region of model space as `[min_x, min_y, width, height]`.
///
/// The rectangle is centered on the camera center and scaled by zoom.
/// `zoom <= 0` is a caller contract violation.
pub fn view_box(view: &ViewState, dims: &Dimensions) -> [f32; 4] {
    debug_assert!(view.zoom > 0.0, "zoom must be positive");
    [
        view.center_x - dims.base_width / 2.0 * view.zoom,
        view.center_y - dims.base_height / 2.0 * view.zoom,
        dims.base_width * view.zoom,
        dims.base_height * view.zoom,
    ]
}

/// One drawable element, tagged with its style classifiers.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// An edge line, already arrow-clipped when the diagram is directed.
    EdgeLine {
        source: i32,
        target: i32,
        /// SVG move-line command for the rendered segment.
        path: String,
        directed: bool,
        visited: bool,
    },
    /// An edge weight label, anchored at the segment midpoint, rotated by
    /// the edge angle and offset perpendicular to the line by `gap`.
    EdgeWeight {
        x: f32,
        y: f32,
        angle_deg: f32,
        gap: f32,
        text: String,
        visited: bool,
    },
    /// A node circle.
    NodeCircle {
        id: i32,
        x: f32,
        y: f32,
        radius: f32,
        visited: bool,
    },
    /// A node id label, centered on the node.
    NodeLabel { id: i32, x: f32, y: f32, text: String },
    /// A node weight label, offset to the right of the circle.
    NodeWeight { id: i32, x: f32, y: f32, text: String },
}

/// An ordered render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub view_box: [f32; 4],
    pub primitives: Vec<Primitive>,
}

/// Assemble the primitives for one render pass.
///
/// Ordering rules:
/// 1. all edges before all nodes;
/// 2. edges stable-sorted by `visited` ascending, so visited edges draw
///    last and their highlight is never occluded; edges with equal flags
///    keep their insertion order;
/// 3. nodes in insertion order, unsorted.
///
/// An edge endpoint that does not resolve surfaces [`LookupError`]; the
/// violation belongs to the graph owner and is never swallowed here.
pub fn build_scene(
    graph: &Graph,
    options: &Options,
    dims: &Dimensions,
    view: &ViewState,
) -> Result<Scene, LookupError> {
    let mut primitives = Vec::with_capacity(2 * (graph.edges.len() + graph.nodes.len()));

    let mut edges: Vec<&Edge> = graph.edges.iter().collect();
    edges.sort_by_key(|edge| edge.visited);

    for edge in edges {
        let source = graph.find_node(edge.source)?;
        let target = graph.find_node(edge.target)?;

        let geometry = edge_geometry(
            source.x,
            source.y,
            target.x,
            target.y,
            options.directed,
            dims.node_radius,
            dims.arrow_gap,
        );

        primitives.push(Primitive::EdgeLine {
            source: edge.source,
            target: edge.target,
            path: edge_path_command(&geometry),
            directed: options.directed,
            visited: edge.visited,
        });

        if options.weighted {
            primitives.push(Primitive::EdgeWeight {
                x: geometry.mx,
                y: geometry.my,
                angle_deg: geometry.angle_deg,
                gap: dims.edge_weight_gap,
                text: format_weight(edge.weight),
                visited: edge.visited,
            });
        }
    }

    for node in &graph.nodes {
        primitives.push(Primitive::NodeCircle {
            id: node.id,
            x: node.x,
            y: node.y,
            radius: dims.node_radius,
            visited: node.visited,
        });
        primitives.push(Primitive::NodeLabel {
            id: node.id,
            x: node.x,
            y: node.y,
            text: node.id.to_string(),
        });
        if options.weighted {
            primitives.push(Primitive::NodeWeight {
                id: node.id,
                x: node.x + dims.node_radius + dims.node_weight_gap,
                y: node.y,
                text: format_weight(node.weight),
            });
        }
    }

    log::trace!("scene rebuilt: {} primitives", primitives.len());

    Ok(Scene {
        view_box: view_box(view, dims),
        primitives,
    })
}

/// Format a weight label, rendering whole numbers without a decimal point.
pub(crate) fn format_weight(weight: f32) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e7 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}
