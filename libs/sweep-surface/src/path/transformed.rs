//! Paths deformed by a coordinate transform.

use std::sync::Arc;

use log::debug;

use super::{FrenetFrame, Path};
use crate::error::GeometryResult;
use crate::linalg::{inverse_transpose, normalize, Mat3, Vec3};
use crate::xform::{PathXForm, XForm};

/// A path whose points are mapped through a fixed or `(point, v)`-dependent
/// transform.
///
/// Directions are carried by the transform's Jacobian `J` at the base point:
/// tangents by `J`, normals by `J⁻ᵀ`, which keeps them perpendicular under
/// non-rigid maps. Where `J` is singular the base normal is kept unchanged.
///
/// For a varying transform only the spatial Jacobian is used; the change of
/// the transform itself with `v` does not enter the tangent.
#[derive(Debug, Clone)]
pub struct Transformed {
    base: Arc<dyn Path>,
    xform: PathXForm,
}

impl Transformed {
    /// Applies `xform` to `base`.
    pub fn new(base: Arc<dyn Path>, xform: PathXForm) -> Self {
        Self { base, xform }
    }

    /// Applies one transform everywhere.
    pub fn fixed(base: Arc<dyn Path>, xform: impl XForm + 'static) -> Self {
        Self::new(base, PathXForm::fixed(xform))
    }

    /// Chooses the transform per evaluation from the base point and `v`.
    pub fn varying<F>(base: Arc<dyn Path>, f: F) -> Self
    where
        F: Fn(Vec3, f64) -> Arc<dyn XForm> + Send + Sync + 'static,
    {
        Self::new(base, PathXForm::varying(f))
    }

    fn jacobian_at(&self, v: f64) -> GeometryResult<Mat3> {
        let point = self.base.position(v);
        self.xform.resolve(point, v).jacobian(point)
    }

    fn carry_tangent(&self, jacobian: Mat3, v: f64) -> GeometryResult<Vec3> {
        normalize(jacobian * self.base.tangent(v)?, "transformed path tangent")
    }

    fn carry_normal(&self, jacobian: Mat3, v: f64) -> GeometryResult<Vec3> {
        let normal = self.base.normal(v)?;
        let carried = match inverse_transpose(jacobian, "transformed path normal") {
            Ok(matrix) => matrix * normal,
            Err(err) => {
                debug!("keeping untransformed normal at v = {v}: {err}");
                normal
            }
        };
        normalize(carried, "transformed path normal")
    }
}

impl Path for Transformed {
    fn position(&self, v: f64) -> Vec3 {
        let point = self.base.position(v);
        self.xform.resolve(point, v).transform(point)
    }

    fn tangent(&self, v: f64) -> GeometryResult<Vec3> {
        self.carry_tangent(self.jacobian_at(v)?, v)
    }

    fn normal(&self, v: f64) -> GeometryResult<Vec3> {
        self.carry_normal(self.jacobian_at(v)?, v)
    }

    fn frenet_frame(&self, v: f64) -> GeometryResult<FrenetFrame> {
        let jacobian = self.jacobian_at(v)?;
        Ok(FrenetFrame::new(
            self.carry_tangent(jacobian, v)?,
            self.carry_normal(jacobian, v)?,
        ))
    }
}
