//! Primitive paths.

use config::constants::DEFAULT_UP_AXIS;

use super::Path;
use crate::error::{GeometryError, GeometryResult};
use crate::linalg::{lerp, lerp_scalar, normalize, Vec3};

/// Straight segment from `start` to `end`.
///
/// # Normal convention
///
/// A straight line has no curvature, so its normal is chosen as
/// `up × tangent` (pointing to the "right" of travel), with `up = +z` unless
/// overridden by [`Line::with_up`]. When the tangent is parallel to `up` the
/// normal is undefined and [`Path::normal`] returns
/// [`GeometryError::Domain`]; there is no silent fallback axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Vec3,
    end: Vec3,
    up: Vec3,
}

impl Line {
    /// Segment from `start` to `end` with the default up axis.
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            up: Vec3::from_array(DEFAULT_UP_AXIS),
        }
    }

    /// Replaces the reference axis used by the normal convention.
    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    /// First point.
    pub fn start(&self) -> Vec3 {
        self.start
    }

    /// Last point.
    pub fn end(&self) -> Vec3 {
        self.end
    }
}

impl Path for Line {
    fn position(&self, v: f64) -> Vec3 {
        lerp(self.start, self.end, v)
    }

    fn tangent(&self, _v: f64) -> GeometryResult<Vec3> {
        normalize(self.end - self.start, "line path has zero length")
    }

    fn normal(&self, v: f64) -> GeometryResult<Vec3> {
        let tangent = self.tangent(v)?;
        normalize(self.up.cross(tangent), "line normal").map_err(|_| {
            GeometryError::domain(format!(
                "line tangent {tangent} is parallel to up axis {}",
                self.up
            ))
        })
    }
}

/// Circular helix about the z axis.
///
/// `position(v) = (r·cos φ(v), r·sin φ(v), z(v))` with `φ` and `z`
/// interpolated linearly between their end values. The tangent and normal are
/// the normalized first and second derivatives in closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helix {
    heights: (f64, f64),
    angles: (f64, f64),
    radius: f64,
}

impl Helix {
    /// Unit-radius helix rising from `heights.0` to `heights.1` while turning
    /// from `angles.0` to `angles.1` radians.
    pub fn new(heights: (f64, f64), angles: (f64, f64)) -> Self {
        Self {
            heights,
            angles,
            radius: 1.0,
        }
    }

    /// Replaces the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Radius of the supporting cylinder.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn angle(&self, v: f64) -> f64 {
        lerp_scalar(self.angles.0, self.angles.1, v)
    }

    fn turn_rate(&self) -> f64 {
        self.angles.1 - self.angles.0
    }

    fn rise_rate(&self) -> f64 {
        self.heights.1 - self.heights.0
    }
}

impl Path for Helix {
    fn position(&self, v: f64) -> Vec3 {
        let (sin, cos) = self.angle(v).sin_cos();
        Vec3::new(
            self.radius * cos,
            self.radius * sin,
            lerp_scalar(self.heights.0, self.heights.1, v),
        )
    }

    fn tangent(&self, v: f64) -> GeometryResult<Vec3> {
        let (sin, cos) = self.angle(v).sin_cos();
        let speed = self.radius * self.turn_rate();
        normalize(
            Vec3::new(-speed * sin, speed * cos, self.rise_rate()),
            "helix does not move",
        )
    }

    fn normal(&self, v: f64) -> GeometryResult<Vec3> {
        let (sin, cos) = self.angle(v).sin_cos();
        let accel = self.radius * self.turn_rate() * self.turn_rate();
        normalize(Vec3::new(-accel * cos, -accel * sin, 0.0), "helix normal").map_err(|_| {
            GeometryError::domain("helix that does not turn has no curvature normal")
        })
    }
}
