//! # Slint Graph View
//!
//! A geometry and interaction engine for interactive 2D graph diagrams:
//! nodes and edges rendered as vector primitives, node repositioning by
//! pointer drag, and a pan/zoom camera.
//!
//! ## Features
//!
//! - **Framework-Agnostic Core** - Coordinate transforms, hit testing, and
//!   scene assembly are pure Rust; the rendering surface only consumes the
//!   primitive list
//! - **Explicit Contracts** - Position updates go through the [`GraphStore`]
//!   request/response trait; the engine never mutates the graph directly
//! - **Directed & Weighted Styling** - Arrow-clipped edge endpoints and
//!   numeric weight labels, toggled per render via [`Options`]
//! - **Pluggable Pan Behavior** - Gestures that miss a node delegate to a
//!   [`PanBehavior`] strategy instead of an implicit base class
//!
//! ## Core Components
//!
//! - [`Graph`], [`Node`], [`Edge`] - The diagram data the engine reads
//! - [`Transform2D`] - Affine device↔model coordinate mapping
//! - [`DragController`] - Pointer state machine (grab, move, release)
//! - [`build_scene`] - Ordered primitive list for one render pass
//! - [`GraphViewController`] - Slint glue: callbacks and model sync
//!
//! ## Rust Helpers
//!
//! - [`find_node_at`] - Hit-test nodes at model coordinates
//! - [`edge_geometry`] - Midpoint, label angle, and arrow clipping
//! - [`view_box`] - Visible model-space rectangle from the camera state
//! - [`device_to_model`] - Invert the surface transform for pointer events

pub mod controller;
pub mod drag;
pub mod edge_geometry;
pub mod graph;
pub mod scene;
pub mod transform;

// Re-export the public surface
pub use controller::{GraphViewController, ModelStore, NodeModel};
pub use drag::{CameraPan, DragController, DragState, PanBehavior};
pub use edge_geometry::{edge_geometry, edge_path_command, EdgeGeometry};
pub use graph::{
    Dimensions, Edge, Graph, GraphStore, LookupError, MoveResponse, Node, Options, ViewState,
};
pub use hit_test::{find_node_at, nodes_in_rect};
pub use scene::{build_scene, view_box, Primitive, Scene};
pub use transform::{device_to_model, Transform2D, TransformError};
