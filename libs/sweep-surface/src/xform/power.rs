//! Component-wise non-linear deformations.

use std::sync::Arc;

use config::constants::SUPERSCALE_ZERO_DERIVATIVE;

use super::XForm;
use crate::error::{GeometryError, GeometryResult};
use crate::linalg::{diagonal, Mat3, Vec3};

/// Odd power law `sign(x)·|x|^(2/k)` applied to each axis with its own `k`.
///
/// Applied to a circle this produces the superellipse family: `k = 2` keeps the
/// circle, `k > 2` squares it off, `k < 2` pinches it into a star.
///
/// # Derivative at zero
///
/// `f'(x) = (2/k)·|x|^(2/k − 1)` has no finite value at `x = 0`. There the
/// Jacobian reports [`SUPERSCALE_ZERO_DERIVATIVE`] (1.0) on that axis. This is
/// a known approximation, not the true derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperScale {
    exponents: Vec3,
}

impl SuperScale {
    /// Exponents `n`, `m`, `p` for x, y and z.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidParameter`] unless every exponent is finite and
    /// positive.
    pub fn new(n: f64, m: f64, p: f64) -> GeometryResult<Self> {
        for (axis, k) in [('x', n), ('y', m), ('z', p)] {
            if !k.is_finite() || k <= 0.0 {
                return Err(GeometryError::invalid_parameter(format!(
                    "SuperScale exponent for {axis} must be positive: {k}"
                )));
            }
        }
        Ok(Self {
            exponents: Vec3::new(n, m, p),
        })
    }

    /// Exponents for x, y and z.
    pub fn exponents(&self) -> Vec3 {
        self.exponents
    }

    fn power(x: f64, k: f64) -> f64 {
        x.signum() * x.abs().powf(2.0 / k)
    }

    fn derivative(x: f64, k: f64) -> f64 {
        if x == 0.0 {
            return SUPERSCALE_ZERO_DERIVATIVE;
        }
        (2.0 / k) * x.abs().powf(2.0 / k - 1.0)
    }
}

impl XForm for SuperScale {
    fn transform(&self, point: Vec3) -> Vec3 {
        let k = self.exponents;
        Vec3::new(
            Self::power(point.x, k.x),
            Self::power(point.y, k.y),
            Self::power(point.z, k.z),
        )
    }

    fn jacobian(&self, point: Vec3) -> GeometryResult<Mat3> {
        let k = self.exponents;
        Ok(diagonal(
            Self::derivative(point.x, k.x),
            Self::derivative(point.y, k.y),
            Self::derivative(point.z, k.z),
        ))
    }

    /// `|x|^(2/k)` is undone by `|y|^(k/2)`, i.e. exponent `4/k`.
    fn inverse(&self) -> Option<Arc<dyn XForm>> {
        Some(Arc::new(SuperScale {
            exponents: Vec3::splat(4.0) / self.exponents,
        }))
    }
}

/// Component-wise sine. Not invertible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sinusoidal;

impl XForm for Sinusoidal {
    fn transform(&self, point: Vec3) -> Vec3 {
        Vec3::new(point.x.sin(), point.y.sin(), point.z.sin())
    }

    fn jacobian(&self, point: Vec3) -> GeometryResult<Mat3> {
        Ok(diagonal(point.x.cos(), point.y.cos(), point.z.cos()))
    }
}
