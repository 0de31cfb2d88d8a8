//! Affine coordinate mapping between device and model space.
//!
//! Pointer events arrive in device (screen pixel) coordinates while the
//! graph lives in model space. The rendering surface exposes its current
//! model→device mapping as a [`Transform2D`] value; inverting it maps a
//! pointer position back into model space. Keeping the transform an explicit
//! value object decouples the geometry math from any rendering-surface
//! handle.

use thiserror::Error;

/// Failure to map between coordinate spaces.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    /// The transform collapses space (zero or degenerate scale) and has no
    /// inverse. Fatal to that single conversion only.
    #[error("transform is not invertible (determinant {determinant})")]
    NonInvertible { determinant: f32 },
}

/// 2D affine transform in SVG matrix order:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Build a transform from its six matrix entries.
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity mapping.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Pure translation by `(tx, ty)`.
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Pure scale by `(sx, sy)`.
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Compose: apply `self` first, then `after`.
    pub fn then(&self, after: &Transform2D) -> Self {
        Self {
            a: after.a * self.a + after.c * self.b,
            b: after.b * self.a + after.d * self.b,
            c: after.a * self.c + after.c * self.d,
            d: after.b * self.c + after.d * self.d,
            e: after.a * self.e + after.c * self.f + after.e,
            f: after.b * self.e + after.d * self.f + after.f,
        }
    }

    /// Map a point through the transform.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Invert the transform, failing on a degenerate matrix.
    pub fn inverse(&self) -> Result<Transform2D, TransformError> {
        let det = self.determinant();
        if det.abs() < f32::EPSILON {
            return Err(TransformError::NonInvertible { determinant: det });
        }
        Ok(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }
}

/// Map a device-space pointer position into model space.
///
/// `transform` is the model→device transform reported by the rendering
/// surface; the conversion applies its inverse.
pub fn device_to_model(
    transform: &Transform2D,
    device_x: f32,
    device_y: f32,
) -> Result<(f32, f32), TransformError> {
    Ok(transform.inverse()?.apply(device_x, device_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-4 && (actual.1 - expected.1).abs() < 1e-4,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    // ========================================================================
    // apply() / constructors
    // ========================================================================

    #[test]
    fn test_identity_maps_point_to_itself() {
        assert_eq!(Transform2D::identity().apply(12.5, -3.0), (12.5, -3.0));
    }

    #[test]
    fn test_translation_offsets_point() {
        let t = Transform2D::translation(10.0, -5.0);
        assert_eq!(t.apply(1.0, 2.0), (11.0, -3.0));
    }

    #[test]
    fn test_scaling_multiplies_coordinates() {
        let t = Transform2D::scaling(2.0, 0.5);
        assert_eq!(t.apply(4.0, 4.0), (8.0, 2.0));
    }

    #[test]
    fn test_then_applies_in_order() {
        // Scale by 2, then translate by (1, 1).
        let t = Transform2D::scaling(2.0, 2.0).then(&Transform2D::translation(1.0, 1.0));
        assert_eq!(t.apply(3.0, 0.0), (7.0, 1.0));

        // Opposite order: translate first, then scale.
        let u = Transform2D::translation(1.0, 1.0).then(&Transform2D::scaling(2.0, 2.0));
        assert_eq!(u.apply(3.0, 0.0), (8.0, 2.0));
    }

    // ========================================================================
    // inverse() - Round Trips and Failure
    // ========================================================================

    #[test]
    fn test_inverse_round_trips_point() {
        let t = Transform2D::scaling(1.5, 2.0)
            .then(&Transform2D::translation(40.0, -7.0));
        let inv = t.inverse().expect("transform should invert");

        for point in [(0.0, 0.0), (10.0, 10.0), (-32.0, 18.5), (0.25, -0.75)] {
            let (dx, dy) = t.apply(point.0, point.1);
            assert_close(inv.apply(dx, dy), point);
        }
    }

    #[test]
    fn test_inverse_of_rotation_like_matrix() {
        // Linear part with b/c terms (shear); still invertible.
        let t = Transform2D::new(1.0, 0.5, 0.25, 2.0, 3.0, -1.0);
        let inv = t.inverse().expect("transform should invert");
        let (dx, dy) = t.apply(6.0, -2.0);
        assert_close(inv.apply(dx, dy), (6.0, -2.0));
    }

    #[test]
    fn test_zero_scale_is_non_invertible() {
        let t = Transform2D::scaling(0.0, 1.0);
        assert_eq!(
            t.inverse(),
            Err(TransformError::NonInvertible { determinant: 0.0 })
        );
    }

    #[test]
    fn test_collinear_matrix_is_non_invertible() {
        // Second column is a multiple of the first.
        let t = Transform2D::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0);
        assert!(t.inverse().is_err());
    }

    // ========================================================================
    // device_to_model()
    // ========================================================================

    #[test]
    fn test_device_to_model_undoes_surface_transform() {
        // Surface renders model space scaled by 2 and shifted by (100, 50).
        let surface = Transform2D::scaling(2.0, 2.0)
            .then(&Transform2D::translation(100.0, 50.0));

        let (x, y) = device_to_model(&surface, 120.0, 70.0).unwrap();
        assert_close((x, y), (10.0, 10.0));
    }

    #[test]
    fn test_device_to_model_identity() {
        let (x, y) = device_to_model(&Transform2D::identity(), 5.0, 6.0).unwrap();
        assert_eq!((x, y), (5.0, 6.0));
    }

    #[test]
    fn test_device_to_model_degenerate_fails() {
        let degenerate = Transform2D::scaling(0.0, 0.0);
        assert!(device_to_model(&degenerate, 1.0, 1.0).is_err());
    }
}
