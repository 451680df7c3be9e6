//! Affine transforms and sequential composition.

use std::sync::Arc;

use config::constants::SINGULARITY_TOLERANCE;

use super::XForm;
use crate::error::GeometryResult;
use crate::linalg::{Mat3, Vec3};

/// Per-axis scale. `Scale::identity()` is the identity transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    factors: Vec3,
}

impl Scale {
    /// Scales x, y and z independently.
    pub fn new(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            factors: Vec3::new(sx, sy, sz),
        }
    }

    /// Same factor on every axis.
    pub fn uniform(s: f64) -> Self {
        Self::new(s, s, s)
    }

    /// Leaves every point where it is.
    pub fn identity() -> Self {
        Self::uniform(1.0)
    }

    /// Per-axis factors.
    pub fn factors(&self) -> Vec3 {
        self.factors
    }
}

impl XForm for Scale {
    fn transform(&self, point: Vec3) -> Vec3 {
        point * self.factors
    }

    fn jacobian(&self, _point: Vec3) -> GeometryResult<Mat3> {
        Ok(Mat3::from_diagonal(self.factors))
    }

    /// `None` when any factor vanishes next to the largest one: the scale
    /// flattens space.
    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        let magnitudes = self.factors.abs();
        if magnitudes.min_element() <= SINGULARITY_TOLERANCE * magnitudes.max_element() {
            return None;
        }
        Some(Arc::new(Scale {
            factors: self.factors.recip(),
        }))
    }
}

/// Adds a constant offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    offset: Vec3,
}

impl Translate {
    /// Translation by `offset`.
    pub fn new(offset: Vec3) -> Self {
        Self { offset }
    }

    /// Offset added to every point.
    pub fn offset(&self) -> Vec3 {
        self.offset
    }
}

impl XForm for Translate {
    fn transform(&self, point: Vec3) -> Vec3 {
        point + self.offset
    }

    fn jacobian(&self, _point: Vec3) -> GeometryResult<Mat3> {
        Ok(Mat3::IDENTITY)
    }

    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        Some(Arc::new(Translate::new(-self.offset)))
    }
}

/// Rotation about the z axis by `angle` radians, counter-clockwise seen from +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateZ {
    angle: f64,
}

impl RotateZ {
    /// Rotation by `angle` radians.
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    fn matrix(&self) -> Mat3 {
        Mat3::from_rotation_z(self.angle)
    }
}

impl XForm for RotateZ {
    fn transform(&self, point: Vec3) -> Vec3 {
        self.matrix() * point
    }

    fn jacobian(&self, _point: Vec3) -> GeometryResult<Mat3> {
        Ok(self.matrix())
    }

    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        Some(Arc::new(RotateZ::new(-self.angle)))
    }
}

/// Applies its members in order: `chain.transform(p) = xₙ(…x₂(x₁(p)))`.
///
/// An empty chain is the identity.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    xforms: Vec<Arc<dyn XForm>>,
}

impl Chain {
    /// Composition of `xforms`, first element applied first.
    pub fn new(xforms: Vec<Arc<dyn XForm>>) -> Self {
        Self { xforms }
    }

    /// Appends a transform applied after the current ones.
    pub fn then(mut self, xform: impl XForm + 'static) -> Self {
        self.xforms.push(Arc::new(xform));
        self
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.xforms.len()
    }

    /// True when the chain is the identity.
    pub fn is_empty(&self) -> bool {
        self.xforms.is_empty()
    }
}

impl XForm for Chain {
    fn transform(&self, point: Vec3) -> Vec3 {
        self.xforms
            .iter()
            .fold(point, |p, xform| xform.transform(p))
    }

    /// Chain rule: each member's Jacobian is evaluated at the point it
    /// receives and left-multiplies the product so far.
    fn jacobian(&self, point: Vec3) -> GeometryResult<Mat3> {
        let mut jacobian = Mat3::IDENTITY;
        let mut p = point;
        for xform in &self.xforms {
            jacobian = xform.jacobian(p)? * jacobian;
            p = xform.transform(p);
        }
        Ok(jacobian)
    }

    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        let inverses = self
            .xforms
            .iter()
            .rev()
            .map(|xform| xform.inverse())
            .collect::<Option<Vec<_>>>()?;
        Some(Arc::new(Chain::new(inverses)))
    }
}

