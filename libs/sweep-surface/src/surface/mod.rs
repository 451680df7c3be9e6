//! # Extruded Surface
//!
//! Sweeps a cross-section along a path. At parameter `v` the path supplies a
//! position and a Frenet frame `(T, N, B)`; the cross-section point
//! `(x, y, z)` at `(u, v)` is placed at
//!
//! ```text
//! path.position(v) + N·x + B·y + T·z
//! ```
//!
//! so the profile lies in the plane perpendicular to the direction of travel,
//! with local z pushing points along the sweep.

use std::sync::Arc;

use crate::cross_section::CrossSection;
use crate::error::GeometryResult;
use crate::linalg::Vec3;
use crate::path::Path;

/// Anything that maps `(u, v) ∈ [0, 1]²` to a point.
///
/// This is the only contract mesh builders rely on.
pub trait ParametricSurface: Send + Sync {
    /// Point at `(u, v)`.
    fn position(&self, u: f64, v: f64) -> GeometryResult<Vec3>;
}

/// A cross-section swept along a path.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use sweep_surface::{cross_section::Circle, path::Helix, ExtrudedSurface, ParametricSurface};
///
/// let spring = ExtrudedSurface::new(
///     Arc::new(Circle),
///     Arc::new(Helix::new((0.0, 4.0), (0.0, 8.0 * std::f64::consts::PI)).with_radius(3.0)),
/// );
/// let p = spring.position(0.25, 0.5).unwrap();
/// assert!(p.z > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExtrudedSurface {
    cross_section: Arc<dyn CrossSection>,
    path: Arc<dyn Path>,
}

impl ExtrudedSurface {
    /// Sweeps `cross_section` along `path`.
    pub fn new(cross_section: Arc<dyn CrossSection>, path: Arc<dyn Path>) -> Self {
        Self {
            cross_section,
            path,
        }
    }

    /// The swept profile.
    pub fn cross_section(&self) -> &Arc<dyn CrossSection> {
        &self.cross_section
    }

    /// The sweep path.
    pub fn path(&self) -> &Arc<dyn Path> {
        &self.path
    }

    /// Point on the surface.
    ///
    /// # Errors
    ///
    /// Propagates the path's frame errors, e.g. a straight path parallel to
    /// its up axis.
    pub fn position(&self, u: f64, v: f64) -> GeometryResult<Vec3> {
        let origin = self.path.position(v);
        let frame = self.path.frenet_frame(v)?;
        let local = self.cross_section.position(u, v);
        Ok(origin + frame.to_world(local))
    }
}

impl ParametricSurface for ExtrudedSurface {
    fn position(&self, u: f64, v: f64) -> GeometryResult<Vec3> {
        ExtrudedSurface::position(self, u, v)
    }
}
