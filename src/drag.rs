//! Pointer interaction: node dragging with pan fallback.
//!
//! A small state machine routes pointer events: a press over a node grabs
//! that node, subsequent moves become position-update requests, and release
//! lets go. Everything that misses a node is delegated to a [`PanBehavior`]
//! strategy object instead of an implicit base class, so camera handling
//! stays swappable and testable.

use crate::graph::{Graph, GraphStore, MoveResponse, ViewState};
use crate::hit_test::find_node_at;
use crate::transform::{device_to_model, Transform2D, TransformError};

/// Capability interface for the fallback pointer behavior (camera pan,
/// selection, ...). The drag controller delegates here whenever no node
/// owns the gesture.
pub trait PanBehavior {
    fn pointer_down(&mut self, device_x: f32, device_y: f32);
    fn pointer_move(&mut self, device_x: f32, device_y: f32);
    fn pointer_up(&mut self);
}

/// Current interaction state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    /// A node is grabbed; moves become position-update requests.
    Dragging(i32),
}

/// Tracks the grabbed node across pointer down/move/up.
///
/// The controller never mutates a node itself: every move while dragging
/// issues exactly one [`GraphStore::request_node_move`] and the owner
/// performs (or refuses) the write.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Id of the node currently being dragged, if any.
    pub fn dragged_node(&self) -> Option<i32> {
        match self.state {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    /// Pointer press in device coordinates.
    ///
    /// Maps the point into model space, hit-tests the nodes, and either
    /// grabs the first match or hands the gesture to the pan behavior.
    /// A non-invertible transform aborts this single event.
    pub fn pointer_down<P: PanBehavior>(
        &mut self,
        device_x: f32,
        device_y: f32,
        transform: &Transform2D,
        graph: &Graph,
        node_radius: f32,
        pan: &mut P,
    ) -> Result<DragState, TransformError> {
        let (x, y) = device_to_model(transform, device_x, device_y)?;

        match find_node_at(x, y, &graph.nodes, node_radius) {
            Some(id) => {
                log::debug!("drag started on node {}", id);
                self.state = DragState::Dragging(id);
            }
            None => {
                self.state = DragState::Idle;
                pan.pointer_down(device_x, device_y);
            }
        }

        Ok(self.state)
    }

    /// Pointer move in device coordinates.
    ///
    /// While dragging, issues exactly one move request to the store and
    /// never touches the pan behavior; otherwise delegates fully to pan.
    /// Returns the store's response when a request was made.
    pub fn pointer_move<S: GraphStore, P: PanBehavior>(
        &mut self,
        device_x: f32,
        device_y: f32,
        transform: &Transform2D,
        store: &mut S,
        pan: &mut P,
    ) -> Result<Option<MoveResponse>, TransformError> {
        match self.state {
            DragState::Dragging(id) => {
                let (x, y) = device_to_model(transform, device_x, device_y)?;
                let response = store.request_node_move(id, x, y);
                if let MoveResponse::Rejected(ref reason) = response {
                    // The grab is a UI gesture; validation belongs to the
                    // owner. The drag continues.
                    log::debug!("move of node {} rejected: {}", id, reason);
                }
                Ok(Some(response))
            }
            DragState::Idle => {
                pan.pointer_move(device_x, device_y);
                Ok(None)
            }
        }
    }

    /// Pointer release ends the gesture in every state.
    pub fn pointer_up<P: PanBehavior>(&mut self, pan: &mut P) {
        if let DragState::Dragging(id) = self.state {
            log::debug!("drag ended on node {}", id);
        }
        self.state = DragState::Idle;
        pan.pointer_up();
    }
}

/// Default pan strategy: drags the camera center against the pointer.
///
/// Owns the [`ViewState`]. One device pixel of pointer travel moves the
/// center by `zoom` model units, matching how the view box scales with
/// zoom.
#[derive(Clone, Debug, Default)]
pub struct CameraPan {
    view: ViewState,
    anchor: Option<PanAnchor>,
}

#[derive(Clone, Copy, Debug)]
struct PanAnchor {
    device_x: f32,
    device_y: f32,
    center_x: f32,
    center_y: f32,
}

impl CameraPan {
    pub fn new(view: ViewState) -> Self {
        Self { view, anchor: None }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Whether a pan gesture is in progress.
    pub fn is_panning(&self) -> bool {
        self.anchor.is_some()
    }

    /// `zoom <= 0` is a caller contract violation.
    pub fn set_zoom(&mut self, zoom: f32) {
        debug_assert!(zoom > 0.0, "zoom must be positive");
        self.view.zoom = zoom;
    }

    pub fn set_center(&mut self, center_x: f32, center_y: f32) {
        self.view.center_x = center_x;
        self.view.center_y = center_y;
    }
}

impl PanBehavior for CameraPan {
    fn pointer_down(&mut self, device_x: f32, device_y: f32) {
        self.anchor = Some(PanAnchor {
            device_x,
            device_y,
            center_x: self.view.center_x,
            center_y: self.view.center_y,
        });
    }

    fn pointer_move(&mut self, device_x: f32, device_y: f32) {
        if let Some(anchor) = self.anchor {
            self.view.center_x = anchor.center_x - (device_x - anchor.device_x) * self.view.zoom;
            self.view.center_y = anchor.center_y - (device_y - anchor.device_y) * self.view.zoom;
        }
    }

    fn pointer_up(&mut self) {
        self.anchor = None;
    }
}
