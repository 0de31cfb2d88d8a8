//! High-level controller binding the engine to a Slint application.
//!
//! [`GraphViewController`] reduces boilerplate by bundling the graph, the
//! interaction state machine, the camera, and the surface transform in one
//! clonable handle, and by providing ready-made callbacks for Slint touch
//! areas.
//!
//! # Example
//!
//! ```ignore
//! use slint_graph_view::{Dimensions, Graph, GraphViewController, Options};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = GraphViewController::new(build_graph(), Options::default(), Dimensions::default());
//!
//!     window.on_pointer_down(ctrl.pointer_down_callback());
//!     window.on_pointer_move(ctrl.pointer_move_callback());
//!     window.on_pointer_up(ctrl.pointer_up_callback());
//!
//!     // Re-sync primitives into the UI model after every change.
//!     let primitives = Rc::new(VecModel::<PrimitiveRow>::default());
//!     ctrl.sync_scene_model(&primitives, |primitive, text| {
//!         /* map to your .slint row struct */
//!     }).unwrap();
//!     window.set_primitives(ModelRc::from(primitives.clone()));
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::drag::{CameraPan, DragController, DragState};
use crate::graph::{
    Dimensions, Graph, GraphStore, LookupError, MoveResponse, Options, ViewState,
};
use crate::scene::{build_scene, Primitive, Scene};
use crate::transform::Transform2D;
use slint::{Model, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Row accessors for Slint node models.
///
/// Implement this for the struct generated from your `.slint` node model so
/// [`ModelStore`] can write drag results back into the UI's own rows.
pub trait NodeModel: Clone + 'static {
    fn id(&self) -> i32;
    fn set_position(&mut self, x: f32, y: f32);
}

/// [`GraphStore`] over a Slint `VecModel` of node rows.
///
/// Use this instead of the plain [`Graph`] store when the Slint model is the
/// source of truth for node positions.
pub struct ModelStore<R: NodeModel> {
    model: Rc<VecModel<R>>,
}

impl<R: NodeModel> ModelStore<R> {
    pub fn new(model: Rc<VecModel<R>>) -> Self {
        Self { model }
    }
}

impl<R: NodeModel> GraphStore for ModelStore<R> {
    fn request_node_move(&mut self, id: i32, x: f32, y: f32) -> MoveResponse {
        for i in 0..self.model.row_count() {
            if let Some(mut row) = self.model.row_data(i) {
                if row.id() == id {
                    row.set_position(x, y);
                    self.model.set_row_data(i, row);
                    return MoveResponse::Accepted;
                }
            }
        }
        MoveResponse::Rejected(format!("node {} not present in model", id))
    }
}

/// Controller that owns the engine state and provides callback
/// implementations.
///
/// Clone it to share across callbacks. All state lives in `Rc<RefCell<_>>`;
/// the engine is single-threaded and event-driven, so no locking is needed.
#[derive(Clone)]
pub struct GraphViewController {
    graph: Rc<RefCell<Graph>>,
    options: Rc<RefCell<Options>>,
    dimensions: Rc<RefCell<Dimensions>>,
    /// Model→device transform reported by the rendering surface.
    transform: Rc<RefCell<Transform2D>>,
    drag: Rc<RefCell<DragController>>,
    pan: Rc<RefCell<CameraPan>>,
}

impl GraphViewController {
    /// Create a controller over a graph with the given render settings.
    pub fn new(graph: Graph, options: Options, dimensions: Dimensions) -> Self {
        Self {
            graph: Rc::new(RefCell::new(graph)),
            options: Rc::new(RefCell::new(options)),
            dimensions: Rc::new(RefCell::new(dimensions)),
            transform: Rc::new(RefCell::new(Transform2D::identity())),
            drag: Rc::new(RefCell::new(DragController::new())),
            pan: Rc::new(RefCell::new(CameraPan::new(ViewState::default()))),
        }
    }

    /// Shared handle to the graph, for the owning layer to mutate
    /// (`visited` flags, structure changes) between renders.
    pub fn graph(&self) -> Rc<RefCell<Graph>> {
        self.graph.clone()
    }

    pub fn set_options(&self, options: Options) {
        *self.options.borrow_mut() = options;
    }

    pub fn set_dimensions(&self, dimensions: Dimensions) {
        *self.dimensions.borrow_mut() = dimensions;
    }

    /// Report the surface's current model→device transform. Call whenever
    /// the surface is resized or the camera mapping changes.
    pub fn set_model_transform(&self, transform: Transform2D) {
        *self.transform.borrow_mut() = transform;
    }

    /// `zoom <= 0` is a caller contract violation.
    pub fn set_zoom(&self, zoom: f32) {
        self.pan.borrow_mut().set_zoom(zoom);
    }

    pub fn view_state(&self) -> ViewState {
        self.pan.borrow().view()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.borrow().state()
    }

    // === Pointer handling ===

    /// Handle a pointer press in device coordinates.
    pub fn pointer_down(&self, device_x: f32, device_y: f32) {
        let graph = self.graph.borrow();
        let node_radius = self.dimensions.borrow().node_radius;
        let transform = *self.transform.borrow();

        let result = self.drag.borrow_mut().pointer_down(
            device_x,
            device_y,
            &transform,
            &graph,
            node_radius,
            &mut *self.pan.borrow_mut(),
        );
        if let Err(err) = result {
            log::debug!("pointer down skipped: {}", err);
        }
    }

    /// Handle a pointer move in device coordinates.
    pub fn pointer_move(&self, device_x: f32, device_y: f32) {
        let transform = *self.transform.borrow();

        let result = self.drag.borrow_mut().pointer_move(
            device_x,
            device_y,
            &transform,
            &mut *self.graph.borrow_mut(),
            &mut *self.pan.borrow_mut(),
        );
        if let Err(err) = result {
            log::debug!("pointer move skipped: {}", err);
        }
    }

    /// Handle a pointer release.
    pub fn pointer_up(&self) {
        self.drag.borrow_mut().pointer_up(&mut *self.pan.borrow_mut());
    }

    // === Callback factories ===

    /// Returns a callback for the surface's pointer-down event.
    pub fn pointer_down_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.pointer_down(x, y)
    }

    /// Returns a callback for the surface's pointer-move event.
    pub fn pointer_move_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.pointer_move(x, y)
    }

    /// Returns a callback for the surface's pointer-up event.
    pub fn pointer_up_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.pointer_up()
    }

    // === Scene output ===

    /// Assemble the primitives for the current state.
    pub fn build_scene(&self) -> Result<Scene, LookupError> {
        build_scene(
            &self.graph.borrow(),
            &self.options.borrow(),
            &self.dimensions.borrow(),
            &self.pan.borrow().view(),
        )
    }

    /// Rebuild the scene and push it into a Slint model of user rows.
    ///
    /// `constructor` maps each primitive, plus its text content (path
    /// commands for edge lines, label text for labels, empty for circles),
    /// to the UI's row type. Existing rows are updated in place, new rows
    /// appended, and excess rows truncated.
    pub fn sync_scene_model<P, F>(
        &self,
        model: &Rc<VecModel<P>>,
        constructor: F,
    ) -> Result<Scene, LookupError>
    where
        P: Clone + 'static,
        F: Fn(&Primitive, SharedString) -> P,
    {
        let scene = self.build_scene()?;

        for (i, primitive) in scene.primitives.iter().enumerate() {
            let row = constructor(primitive, primitive_text(primitive));
            if i < model.row_count() {
                model.set_row_data(i, row);
            } else {
                model.push(row);
            }
        }
        while model.row_count() > scene.primitives.len() {
            model.remove(model.row_count() - 1);
        }

        Ok(scene)
    }
}

/// Text content of a primitive for the UI: path commands for edge lines,
/// label text for labels, empty for circles.
fn primitive_text(primitive: &Primitive) -> SharedString {
    match primitive {
        Primitive::EdgeLine { path, .. } => path.as_str().into(),
        Primitive::EdgeWeight { text, .. }
        | Primitive::NodeLabel { text, .. }
        | Primitive::NodeWeight { text, .. } => text.as_str().into(),
        Primitive::NodeCircle { .. } => SharedString::default(),
    }
}
