//! Primitive profile curves.

use std::f64::consts::TAU;

use super::CrossSection;
use crate::linalg::Vec3;

/// Unit circle, `θ = 2πu`. Independent of `v`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle;

impl CrossSection for Circle {
    fn position(&self, u: f64, _v: f64) -> Vec3 {
        let (sin, cos) = (TAU * u).sin_cos();
        Vec3::new(cos, sin, 0.0)
    }
}

/// Unit segment along local x: `(u, 0, 0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Line;

impl CrossSection for Line {
    fn position(&self, u: f64, _v: f64) -> Vec3 {
        Vec3::new(u, 0.0, 0.0)
    }
}

/// Lissajous figure `(cos(a·2πu), sin(b·2πu), 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lissajous {
    /// Frequency of the x component.
    pub a: f64,
    /// Frequency of the y component.
    pub b: f64,
}

impl Lissajous {
    /// Figure with frequencies `a` and `b`.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

impl CrossSection for Lissajous {
    fn position(&self, u: f64, _v: f64) -> Vec3 {
        let theta = TAU * u;
        Vec3::new((self.a * theta).cos(), (self.b * theta).sin(), 0.0)
    }
}

/// Polar rose `r = cos(kθ)`, `θ = 2πu`.
///
/// Odd integer `k` traces `k` petals twice per turn; even `k` gives `2k`
/// petals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoseCurve {
    /// Angular frequency of the radius.
    pub k: f64,
}

impl RoseCurve {
    /// Rose with frequency `k`.
    pub fn new(k: f64) -> Self {
        Self { k }
    }
}

impl CrossSection for RoseCurve {
    fn position(&self, u: f64, _v: f64) -> Vec3 {
        let theta = TAU * u;
        let radius = (self.k * theta).cos();
        let (sin, cos) = theta.sin_cos();
        Vec3::new(radius * cos, radius * sin, 0.0)
    }
}
