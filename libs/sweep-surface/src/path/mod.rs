//! # Paths
//!
//! Space curves indexed by `v ∈ [0, 1]` along which a cross-section is swept.
//! Each path reports its position and a unit tangent and normal; the binormal
//! and the full Frenet frame are derived from those two.
//!
//! Tangents and normals are fallible: a path may have no direction (zero
//! length) or no curvature direction at a point, and that is reported as a
//! [`GeometryError`](crate::GeometryError) rather than a zero vector.

mod primitives;
mod transformed;

pub use primitives::{Helix, Line};
pub use transformed::Transformed;

use std::fmt;

use crate::error::GeometryResult;
use crate::linalg::{Mat3, Vec3};

/// Orthonormal frame at a point of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrenetFrame {
    /// Unit direction of travel (T).
    pub tangent: Vec3,
    /// Unit normal (N).
    pub normal: Vec3,
    /// `T × N` (B).
    pub binormal: Vec3,
}

impl FrenetFrame {
    /// Builds the frame from a tangent and normal, deriving the binormal.
    pub fn new(tangent: Vec3, normal: Vec3) -> Self {
        Self {
            tangent,
            normal,
            binormal: tangent.cross(normal),
        }
    }

    /// Matrix mapping local `(x, y, z)` onto `N·x + B·y + T·z`.
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::from_cols(self.normal, self.binormal, self.tangent)
    }

    /// Expresses a local offset in world coordinates.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.normal * local.x + self.binormal * local.y + self.tangent * local.z
    }
}

/// A space curve, pure in `v`.
pub trait Path: fmt::Debug + Send + Sync {
    /// Point on the curve.
    fn position(&self, v: f64) -> Vec3;

    /// Unit tangent `df/dv / |df/dv|`.
    fn tangent(&self, v: f64) -> GeometryResult<Vec3>;

    /// Unit normal, perpendicular to the tangent.
    fn normal(&self, v: f64) -> GeometryResult<Vec3>;

    /// `tangent × normal`.
    fn binormal(&self, v: f64) -> GeometryResult<Vec3> {
        Ok(self.tangent(v)?.cross(self.normal(v)?))
    }

    /// Tangent, normal and binormal together.
    fn frenet_frame(&self, v: f64) -> GeometryResult<FrenetFrame> {
        Ok(FrenetFrame::new(self.tangent(v)?, self.normal(v)?))
    }
}
