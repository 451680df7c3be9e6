//! Thin wrapper around `glam::DVec3` / `glam::DMat3` shared across modules.
//!
//! glam never fails: normalizing a zero vector yields NaN and inverting a
//! singular matrix yields infinities. The checked helpers here turn both cases
//! into [`GeometryError`]s so singularities surface as catchable errors.
//!
//! Matrices used as Jacobians follow the usual convention: row `i` is output
//! component `i`, column `j` holds the partial derivatives with respect to input
//! component `j`. glam stores columns, so Jacobians are built with
//! [`Mat3::from_cols`] where each argument is one input derivative.

use config::constants::SINGULARITY_TOLERANCE;

use crate::error::{GeometryError, GeometryResult};

pub use glam::DMat3 as Mat3;
pub use glam::DVec3 as Vec3;

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// [`GeometryError::ZeroLengthVector`] when `|v|` is below
/// [`SINGULARITY_TOLERANCE`] or not finite.
///
/// # Examples
/// ```
/// use sweep_surface::linalg::{normalize, Vec3};
/// let v = normalize(Vec3::new(3.0, 0.0, 4.0), "example").unwrap();
/// assert!((v.length() - 1.0).abs() < 1e-12);
/// assert!(normalize(Vec3::ZERO, "example").is_err());
/// ```
pub fn normalize(v: Vec3, context: &str) -> GeometryResult<Vec3> {
    let length = v.length();
    if !length.is_finite() || length < SINGULARITY_TOLERANCE {
        return Err(GeometryError::zero_length(context));
    }
    Ok(v / length)
}

/// Inverts `m`.
///
/// The singularity test is relative to the matrix's own scale: `|det(m)|` is
/// compared against [`SINGULARITY_TOLERANCE`] times the cube of the longest
/// column. A uniformly tiny but well-shaped matrix inverts; one with a
/// collapsed axis does not, whatever its overall magnitude.
///
/// # Errors
///
/// [`GeometryError::SingularMatrix`] when the determinant is not finite or
/// vanishes relative to that scale.
///
/// # Examples
/// ```
/// use sweep_surface::linalg::{diagonal, inverse};
/// assert!(inverse(diagonal(1e-5, 2e-5, 1e-5), "small").is_ok());
/// assert!(inverse(diagonal(1.0, 1.0, 1e-15), "flat").is_err());
/// ```
pub fn inverse(m: Mat3, context: &str) -> GeometryResult<Mat3> {
    let determinant = m.determinant();
    let scale = m
        .x_axis
        .length()
        .max(m.y_axis.length())
        .max(m.z_axis.length())
        .powi(3);
    if !determinant.is_finite() || determinant.abs() <= SINGULARITY_TOLERANCE * scale {
        return Err(GeometryError::singular(determinant, context));
    }
    Ok(m.inverse())
}

/// Inverse-transpose of `m`, the matrix that carries normal vectors through a
/// map whose Jacobian is `m`.
pub fn inverse_transpose(m: Mat3, context: &str) -> GeometryResult<Mat3> {
    inverse(m, context).map(|inv| inv.transpose())
}

/// Linear interpolation `start·(1 − t) + end·t`.
///
/// # Examples
/// ```
/// use sweep_surface::linalg::{lerp, Vec3};
/// assert_eq!(lerp(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), 0.5), Vec3::new(2.0, 0.0, 0.0));
/// ```
pub fn lerp(start: Vec3, end: Vec3, t: f64) -> Vec3 {
    start * (1.0 - t) + end * t
}

/// Scalar linear interpolation.
pub fn lerp_scalar(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Builds a diagonal matrix from per-axis factors.
pub fn diagonal(x: f64, y: f64, z: f64) -> Mat3 {
    Mat3::from_diagonal(Vec3::new(x, y, z))
}
