//! Cartesian ↔ cylindrical coordinate changes.
//!
//! Cylindrical points are stored as `(s, φ, z)` in the x, y, z slots: radius,
//! angle in radians and height.

use std::sync::Arc;

use config::constants::SINGULARITY_TOLERANCE;

use super::XForm;
use crate::error::{GeometryError, GeometryResult};
use crate::linalg::{Mat3, Vec3};

/// `(x, y, z) → (√(x² + y²), atan2(y, x), z)`, with `φ ∈ (−π, π]`.
///
/// The Jacobian divides by the radius and is undefined on the z axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartesianToCylindrical;

impl XForm for CartesianToCylindrical {
    fn transform(&self, point: Vec3) -> Vec3 {
        Vec3::new(point.x.hypot(point.y), point.y.atan2(point.x), point.z)
    }

    /// # Errors
    ///
    /// [`GeometryError::Domain`] when `point` lies on the z axis (`s = 0`).
    fn jacobian(&self, point: Vec3) -> GeometryResult<Mat3> {
        let Vec3 { x, y, .. } = point;
        let s = x.hypot(y);
        if s < SINGULARITY_TOLERANCE {
            return Err(GeometryError::domain(format!(
                "cylindrical Jacobian undefined at zero radius ({x}, {y})"
            )));
        }
        let s2 = s * s;
        Ok(Mat3::from_cols(
            Vec3::new(x / s, -y / s2, 0.0),
            Vec3::new(y / s, x / s2, 0.0),
            Vec3::Z,
        ))
    }

    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        Some(Arc::new(CylindricalToCartesian))
    }
}

/// `(s, φ, z) → (s·cos φ, s·sin φ, z)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CylindricalToCartesian;

impl XForm for CylindricalToCartesian {
    fn transform(&self, point: Vec3) -> Vec3 {
        let (sin, cos) = point.y.sin_cos();
        Vec3::new(point.x * cos, point.x * sin, point.z)
    }

    fn jacobian(&self, point: Vec3) -> GeometryResult<Mat3> {
        let s = point.x;
        let (sin, cos) = point.y.sin_cos();
        Ok(Mat3::from_cols(
            Vec3::new(cos, sin, 0.0),
            Vec3::new(-s * sin, s * cos, 0.0),
            Vec3::Z,
        ))
    }

    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        Some(Arc::new(CartesianToCylindrical))
    }
}
