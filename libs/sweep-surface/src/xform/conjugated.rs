//! Conjugation `B ∘ A ∘ B⁻¹`: applying a transform through a change of
//! coordinates.

use std::sync::Arc;

use log::{debug, warn};

use super::{CartesianToCylindrical, CylindricalToCartesian, XForm};
use crate::error::{GeometryError, GeometryResult};
use crate::linalg::{Mat3, Vec3};

/// `B ∘ A ∘ B⁻¹` for an inner transform `A` and an invertible basis `B`.
///
/// A point is first taken into `B`'s domain by `B⁻¹`, transformed there by
/// `A`, and mapped back by `B`.
///
/// # Examples
/// ```
/// use sweep_surface::xform::{Conjugated, Translate, XForm};
/// use sweep_surface::Vec3;
///
/// // Translating the radius by 1 pushes every point one unit away from the z axis.
/// let grow = Conjugated::radial(Translate::new(Vec3::X));
/// let p = grow.transform(Vec3::new(0.0, 2.0, 5.0));
/// assert!((p - Vec3::new(0.0, 3.0, 5.0)).length() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Conjugated {
    inner: Arc<dyn XForm>,
    basis: Arc<dyn XForm>,
    basis_inverse: Arc<dyn XForm>,
}

impl Conjugated {
    /// Conjugates `inner` by `basis`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::NotInvertible`] when `basis` has no inverse. The check
    /// happens here so an unusable transform is never built.
    pub fn new(inner: Arc<dyn XForm>, basis: Arc<dyn XForm>) -> GeometryResult<Self> {
        let Some(basis_inverse) = basis.inverse() else {
            warn!("refusing to conjugate by non-invertible {}", basis.name());
            return Err(GeometryError::not_invertible(basis.name()));
        };
        debug!("conjugating {} by {}", inner.name(), basis.name());
        Ok(Self {
            inner,
            basis,
            basis_inverse,
        })
    }

    /// Applies `inner` in cylindrical coordinates `(s, φ, z)` while taking and
    /// returning Cartesian points.
    pub fn radial(inner: impl XForm + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
            basis: Arc::new(CylindricalToCartesian),
            basis_inverse: Arc::new(CartesianToCylindrical),
        }
    }

    /// The transform applied inside the basis.
    pub fn inner(&self) -> &Arc<dyn XForm> {
        &self.inner
    }

    /// The change of coordinates.
    pub fn basis(&self) -> &Arc<dyn XForm> {
        &self.basis
    }
}

impl XForm for Conjugated {
    fn transform(&self, point: Vec3) -> Vec3 {
        let local = self.basis_inverse.transform(point);
        self.basis.transform(self.inner.transform(local))
    }

    /// `J_B(A(q)) · J_A(q) · J_B⁻¹(p)` with `q = B⁻¹(p)`.
    fn jacobian(&self, point: Vec3) -> GeometryResult<Mat3> {
        let local = self.basis_inverse.transform(point);
        let moved = self.inner.transform(local);
        Ok(self.basis.jacobian(moved)?
            * self.inner.jacobian(local)?
            * self.basis_inverse.jacobian(point)?)
    }

    /// `B ∘ A⁻¹ ∘ B⁻¹`, present when `A` is invertible.
    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        let inner = self.inner.inverse()?;
        Some(Arc::new(Conjugated {
            inner,
            basis: Arc::clone(&self.basis),
            basis_inverse: Arc::clone(&self.basis_inverse),
        }))
    }
}
