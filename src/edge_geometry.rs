//! Edge geometry: midpoints, label angles, and arrow clipping.
//!
//! For directed diagrams the drawn line stops short of the target node so
//! the arrowhead marker visually meets the node boundary plus a fixed gap,
//! independent of the edge's angle.

/// Resolved geometry for one rendered edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
    pub sx: f32,
    pub sy: f32,
    /// Rendered endpoint; equals the target position unless arrow-clipped.
    pub ex: f32,
    pub ey: f32,
    /// Midpoint of the unclipped segment (weight-label anchor).
    pub mx: f32,
    pub my: f32,
    /// Label rotation angle in degrees, from the unclipped segment.
    pub angle_deg: f32,
}

/// Compute the rendered geometry of an edge from source `(sx, sy)` to
/// target `(tx, ty)`.
///
/// When `directed`, the endpoint is pulled back by `node_radius + arrow_gap`
/// along the unit source→target vector. A zero-length edge (both nodes at
/// the same position) is left unshortened: there is no direction to clip
/// along, and dividing by the length would produce NaN.
pub fn edge_geometry(
    sx: f32,
    sy: f32,
    tx: f32,
    ty: f32,
    directed: bool,
    node_radius: f32,
    arrow_gap: f32,
) -> EdgeGeometry {
    let dx = tx - sx;
    let dy = ty - sy;
    let mx = (sx + tx) / 2.0;
    let my = (sy + ty) / 2.0;
    let angle_deg = dy.atan2(dx).to_degrees();

    let (mut ex, mut ey) = (tx, ty);
    if directed {
        let length = (dx * dx + dy * dy).sqrt();
        if length != 0.0 {
            let clipped = length - node_radius - arrow_gap;
            ex = sx + dx / length * clipped;
            ey = sy + dy / length * clipped;
        }
    }

    EdgeGeometry {
        sx,
        sy,
        ex,
        ey,
        mx,
        my,
        angle_deg,
    }
}

/// SVG path command for the edge line.
///
/// # Returns
/// A move-line command string (e.g. `"M 0 0 L 10 0"`) suitable for path
/// rendering surfaces.
pub fn edge_path_command(geometry: &EdgeGeometry) -> String {
    format!(
        "M {} {} L {} {}",
        geometry.sx, geometry.sy, geometry.ex, geometry.ey
    )
}
