//! Fixed-or-computed transform parameters for the `Transformed` wrappers.

use std::fmt;
use std::sync::Arc;

use super::XForm;
use crate::linalg::Vec3;

/// Produces a cross-section transform from the untransformed point and `(u, v)`.
pub type SectionXFormFn = dyn Fn(Vec3, f64, f64) -> Arc<dyn XForm> + Send + Sync;

/// Produces a path transform from the untransformed point and `v`.
pub type PathXFormFn = dyn Fn(Vec3, f64) -> Arc<dyn XForm> + Send + Sync;

/// Transform applied by a transformed cross-section.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use sweep_surface::xform::{Scale, SectionXForm, XForm};
///
/// // Radius shrinks linearly along the sweep.
/// let taper = SectionXForm::varying(|_, _, v| {
///     Arc::new(Scale::uniform(1.0 - 0.5 * v)) as Arc<dyn XForm>
/// });
/// # let _ = taper;
/// ```
#[derive(Clone)]
pub enum SectionXForm {
    /// The same transform at every `(u, v)`.
    Fixed(Arc<dyn XForm>),
    /// A transform chosen per evaluation.
    Varying(Arc<SectionXFormFn>),
}

impl SectionXForm {
    /// Wraps a fixed transform.
    pub fn fixed(xform: impl XForm + 'static) -> Self {
        Self::Fixed(Arc::new(xform))
    }

    /// Wraps a transform-producing function.
    pub fn varying<F>(f: F) -> Self
    where
        F: Fn(Vec3, f64, f64) -> Arc<dyn XForm> + Send + Sync + 'static,
    {
        Self::Varying(Arc::new(f))
    }

    /// Returns the transform to use for this evaluation.
    pub fn resolve(&self, point: Vec3, u: f64, v: f64) -> Arc<dyn XForm> {
        match self {
            Self::Fixed(xform) => Arc::clone(xform),
            Self::Varying(f) => f(point, u, v),
        }
    }
}

impl fmt::Debug for SectionXForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(xform) => f.debug_tuple("Fixed").field(xform).finish(),
            Self::Varying(_) => f.write_str("Varying(<fn>)"),
        }
    }
}

/// Transform applied by a transformed path.
#[derive(Clone)]
pub enum PathXForm {
    /// The same transform at every `v`.
    Fixed(Arc<dyn XForm>),
    /// A transform chosen per evaluation.
    Varying(Arc<PathXFormFn>),
}

impl PathXForm {
    /// Wraps a fixed transform.
    pub fn fixed(xform: impl XForm + 'static) -> Self {
        Self::Fixed(Arc::new(xform))
    }

    /// Wraps a transform-producing function.
    pub fn varying<F>(f: F) -> Self
    where
        F: Fn(Vec3, f64) -> Arc<dyn XForm> + Send + Sync + 'static,
    {
        Self::Varying(Arc::new(f))
    }

    /// Returns the transform to use for this evaluation.
    pub fn resolve(&self, point: Vec3, v: f64) -> Arc<dyn XForm> {
        match self {
            Self::Fixed(xform) => Arc::clone(xform),
            Self::Varying(f) => f(point, v),
        }
    }
}

impl fmt::Debug for PathXForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(xform) => f.debug_tuple("Fixed").field(xform).finish(),
            Self::Varying(_) => f.write_str("Varying(<fn>)"),
        }
    }
}
