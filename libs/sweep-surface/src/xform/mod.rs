//! # Coordinate Transforms
//!
//! Point-wise maps `R³ → R³` with an optional analytic Jacobian and an optional
//! inverse. Transforms are composed at runtime behind `Arc<dyn XForm>`:
//!
//! - [`Scale`], [`Translate`], [`RotateZ`]: affine building blocks
//! - [`SuperScale`], [`Sinusoidal`]: component-wise non-linear deformations
//! - [`CartesianToCylindrical`], [`CylindricalToCartesian`]: coordinate changes
//! - [`Chain`]: sequential composition
//! - [`Conjugated`]: `B ∘ A ∘ B⁻¹`, e.g. applying `A` in cylindrical coordinates
//!
//! Wrappers that deform curves take either a fixed transform or a function
//! producing one per evaluation ([`SectionXForm`], [`PathXForm`]).

mod affine;
mod conjugated;
mod cylindrical;
mod power;
mod source;

pub use affine::{Chain, RotateZ, Scale, Translate};
pub use conjugated::Conjugated;
pub use cylindrical::{CartesianToCylindrical, CylindricalToCartesian};
pub use power::{Sinusoidal, SuperScale};
pub use source::{PathXForm, PathXFormFn, SectionXForm, SectionXFormFn};

use std::fmt;
use std::sync::Arc;

use crate::error::{GeometryError, GeometryResult};
use crate::linalg::{Mat3, Vec3};

/// A pure coordinate transformation.
///
/// Implementations hold only construction-time parameters, so every method is
/// reentrant and may be called from any thread.
pub trait XForm: fmt::Debug + Send + Sync {
    /// Maps `point` to its transformed position.
    fn transform(&self, point: Vec3) -> Vec3;

    /// Partial derivatives of [`XForm::transform`] at `point`.
    ///
    /// Column `j` of the result is `∂transform/∂point[j]`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::MissingJacobian`] when the transform does not provide
    /// derivatives, or [`GeometryError::Domain`] at a singular point.
    fn jacobian(&self, point: Vec3) -> GeometryResult<Mat3> {
        let _ = point;
        Err(GeometryError::missing_jacobian(self.name()))
    }

    /// The functional inverse, or `None` when the map is not invertible.
    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        None
    }

    /// Short name used in error messages.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Estimates the Jacobian of `xform` at `point` by central differences with
/// step `h`.
///
/// Used to check analytic Jacobians; curve evaluation never relies on it.
///
/// # Examples
/// ```
/// use sweep_surface::xform::{finite_difference_jacobian, Scale, XForm};
/// use sweep_surface::Vec3;
///
/// let scale = Scale::new(2.0, 3.0, 4.0);
/// let p = Vec3::new(1.0, 1.0, 1.0);
/// let numeric = finite_difference_jacobian(&scale, p, 1e-6);
/// assert!(numeric.abs_diff_eq(scale.jacobian(p).unwrap(), 1e-6));
/// ```
pub fn finite_difference_jacobian(xform: &dyn XForm, point: Vec3, h: f64) -> Mat3 {
    let column = |axis: Vec3| {
        let forward = xform.transform(point + axis * h);
        let backward = xform.transform(point - axis * h);
        (forward - backward) / (2.0 * h)
    };
    Mat3::from_cols(column(Vec3::X), column(Vec3::Y), column(Vec3::Z))
}
