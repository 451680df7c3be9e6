//! # Cross-Sections
//!
//! Planar (or near-planar) profile curves swept along a path. A cross-section
//! maps `u ∈ [0, 1]` around the profile and `v ∈ [0, 1]` along the sweep to a
//! local point whose x and y lie in the profile plane; z, when non-zero,
//! pushes the point along the sweep direction.
//!
//! Primitives ([`Circle`], [`Line`], [`Lissajous`], [`RoseCurve`]) are combined
//! with [`Transformed`], [`Union`] and [`Combine`].

mod compose;
mod primitives;

pub use compose::{Combine, CombineOp, Transformed, Union};
pub use primitives::{Circle, Line, Lissajous, RoseCurve};

use std::fmt;

use crate::linalg::Vec3;

/// A profile curve, pure in `(u, v)`.
pub trait CrossSection: fmt::Debug + Send + Sync {
    /// Local point at progress `u` around the profile and `v` along the sweep.
    fn position(&self, u: f64, v: f64) -> Vec3;
}
