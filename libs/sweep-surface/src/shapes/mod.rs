//! # Shapes
//!
//! Ready-made swept surfaces assembled from the public composition API.
//! Each returns an [`ExtrudedSurface`] ready for [`build_quad_mesh`].
//!
//! [`build_quad_mesh`]: crate::mesh::build_quad_mesh

use std::f64::consts::TAU;
use std::sync::Arc;

use crate::cross_section::{self, Circle, RoseCurve};
use crate::error::GeometryResult;
use crate::linalg::{lerp_scalar, Vec3};
use crate::path::{Helix, Line};
use crate::surface::ExtrudedSurface;
use crate::xform::{Chain, Conjugated, RotateZ, Scale, SuperScale, Translate, XForm};

/// Radius of the helix carrying [`coil`] and [`tapered_horn`].
const HELIX_RADIUS: f64 = 3.0;

/// Unit-radius cylinder from `start` to `end`.
///
/// # Example
///
/// ```rust
/// use sweep_surface::{shapes, Vec3};
/// let tube = shapes::cylinder(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
/// assert!(tube.position(0.0, 0.5).is_ok());
/// ```
pub fn cylinder(start: Vec3, end: Vec3) -> ExtrudedSurface {
    ExtrudedSurface::new(Arc::new(Circle), Arc::new(Line::new(start, end)))
}

/// Round tube of radius `tube_radius` wound `turns` times around the z axis
/// while rising to `height`.
pub fn coil(tube_radius: f64, turns: f64, height: f64) -> ExtrudedSurface {
    let section = cross_section::Transformed::fixed(Arc::new(Circle), Scale::uniform(tube_radius));
    let helix = Helix::new((0.0, height), (0.0, TAU * turns)).with_radius(HELIX_RADIUS);
    ExtrudedSurface::new(Arc::new(section), Arc::new(helix))
}

/// Tube whose profile is the superellipse `|x|^k + |y|^k = 1`.
///
/// # Errors
///
/// Propagates [`SuperScale::new`] rejection of a non-positive exponent.
pub fn superellipse_tube(exponent: f64, start: Vec3, end: Vec3) -> GeometryResult<ExtrudedSurface> {
    let squash = SuperScale::new(exponent, exponent, 2.0)?;
    let section = cross_section::Transformed::fixed(Arc::new(Circle), squash);
    Ok(ExtrudedSurface::new(Arc::new(section), Arc::new(Line::new(start, end))))
}

/// Coiled horn whose profile radius shrinks linearly from 1 to `end_scale`.
pub fn tapered_horn(turns: f64, height: f64, end_scale: f64) -> ExtrudedSurface {
    let section = cross_section::Transformed::varying(Arc::new(Circle), move |_, _, v| {
        Arc::new(Scale::uniform(lerp_scalar(1.0, end_scale, v))) as Arc<dyn XForm>
    });
    let helix = Helix::new((0.0, height), (0.0, TAU * turns)).with_radius(HELIX_RADIUS);
    ExtrudedSurface::new(Arc::new(section), Arc::new(helix))
}

/// Unit-wide flat strip centred on the path, rotated by `twist` radians over
/// its length.
pub fn twisted_ribbon(twist: f64, start: Vec3, end: Vec3) -> ExtrudedSurface {
    let section = cross_section::Transformed::varying(Arc::new(cross_section::Line), move |_, _, v| {
        Arc::new(
            Chain::default()
                .then(Translate::new(Vec3::new(-0.5, 0.0, 0.0)))
                .then(RotateZ::new(twist * v)),
        ) as Arc<dyn XForm>
    });
    ExtrudedSurface::new(Arc::new(section), Arc::new(Line::new(start, end)))
}

/// Polar rose `r = cos(kθ)` swept straight from `start` to `end`.
pub fn rose_tube(petals: f64, start: Vec3, end: Vec3) -> ExtrudedSurface {
    ExtrudedSurface::new(
        Arc::new(RoseCurve::new(petals)),
        Arc::new(Line::new(start, end)),
    )
}

/// Unit circle pushed `amount` further from its centre by translating the
/// radius in cylindrical coordinates.
pub fn bulged_tube(amount: f64, start: Vec3, end: Vec3) -> ExtrudedSurface {
    let grow = Conjugated::radial(Translate::new(Vec3::new(amount, 0.0, 0.0)));
    let section = cross_section::Transformed::fixed(Arc::new(Circle), grow);
    ExtrudedSurface::new(Arc::new(section), Arc::new(Line::new(start, end)))
}
