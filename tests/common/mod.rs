//! Shared test harness: recording fakes and sample graphs.

#![allow(dead_code)]

use slint_graph_view::{Edge, Graph, GraphStore, MoveResponse, Node, PanBehavior};

/// Graph store fake that records every request without applying it.
#[derive(Default)]
pub struct RecordingStore {
    pub requests: Vec<(i32, f32, f32)>,
    pub reject: bool,
}

impl GraphStore for RecordingStore {
    fn request_node_move(&mut self, id: i32, x: f32, y: f32) -> MoveResponse {
        self.requests.push((id, x, y));
        if self.reject {
            MoveResponse::Rejected("store refused".into())
        } else {
            MoveResponse::Accepted
        }
    }
}

/// Pan behavior fake that records every delegated event.
#[derive(Default)]
pub struct RecordingPan {
    pub downs: Vec<(f32, f32)>,
    pub moves: Vec<(f32, f32)>,
    pub ups: usize,
}

impl PanBehavior for RecordingPan {
    fn pointer_down(&mut self, x: f32, y: f32) {
        self.downs.push((x, y));
    }
    fn pointer_move(&mut self, x: f32, y: f32) {
        self.moves.push((x, y));
    }
    fn pointer_up(&mut self) {
        self.ups += 1;
    }
}

/// A small weighted graph: node A(1) at (10, 10), B(2) at (100, 10),
/// C(3) at (50, 80), edges A→B, B→C, C→A.
pub fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(Node::weighted(1, 10.0, 10.0, 1.0));
    graph.add_node(Node::weighted(2, 100.0, 10.0, 2.0));
    graph.add_node(Node::weighted(3, 50.0, 80.0, 3.0));
    graph.add_edge(Edge::weighted(1, 2, 12.0));
    graph.add_edge(Edge::weighted(2, 3, 23.0));
    graph.add_edge(Edge::weighted(3, 1, 31.0));
    graph
}
