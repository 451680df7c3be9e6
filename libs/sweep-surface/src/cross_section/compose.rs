//! Cross-section combinators.

use std::fmt;
use std::sync::Arc;

use log::trace;

use super::CrossSection;
use crate::error::{GeometryError, GeometryResult};
use crate::linalg::Vec3;
use crate::xform::{SectionXForm, XForm};

/// A cross-section deformed by a fixed or `(point, u, v)`-dependent transform.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use sweep_surface::cross_section::{Circle, CrossSection, Transformed};
/// use sweep_surface::xform::{Scale, XForm};
///
/// // Radius tapers from 1 to 0.5 along the sweep.
/// let taper = Transformed::varying(Arc::new(Circle), |_, _, v| {
///     Arc::new(Scale::uniform(1.0 - 0.5 * v)) as Arc<dyn XForm>
/// });
/// assert!((taper.position(0.0, 1.0).x - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Transformed {
    base: Arc<dyn CrossSection>,
    xform: SectionXForm,
}

impl Transformed {
    /// Applies `xform` to every point of `base`.
    pub fn new(base: Arc<dyn CrossSection>, xform: SectionXForm) -> Self {
        Self { base, xform }
    }

    /// Applies one transform everywhere.
    pub fn fixed(base: Arc<dyn CrossSection>, xform: impl XForm + 'static) -> Self {
        Self::new(base, SectionXForm::fixed(xform))
    }

    /// Chooses the transform per evaluation from the base point and `(u, v)`.
    pub fn varying<F>(base: Arc<dyn CrossSection>, f: F) -> Self
    where
        F: Fn(Vec3, f64, f64) -> Arc<dyn XForm> + Send + Sync + 'static,
    {
        Self::new(base, SectionXForm::varying(f))
    }
}

impl CrossSection for Transformed {
    fn position(&self, u: f64, v: f64) -> Vec3 {
        let point = self.base.position(u, v);
        self.xform.resolve(point, u, v).transform(point)
    }
}

/// Sections traced one after another, each over an equal share of `u`.
///
/// Section `i` of `N` covers `u ∈ [i/N, (i+1)/N)` and is evaluated at the
/// fraction of that arc. `u = 1` belongs to the last section at its own
/// `u = 1`.
#[derive(Debug, Clone)]
pub struct Union {
    sections: Vec<Arc<dyn CrossSection>>,
}

impl Union {
    /// Concatenates `sections`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidParameter`] when `sections` is empty.
    pub fn new(sections: Vec<Arc<dyn CrossSection>>) -> GeometryResult<Self> {
        if sections.is_empty() {
            return Err(GeometryError::invalid_parameter(
                "Union needs at least one section",
            ));
        }
        Ok(Self { sections })
    }

    /// Number of concatenated sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Splits `u` into `(section index, fraction within that section)`.
    ///
    /// The index is clamped into range, so `u = 1` resolves to the last
    /// section with fraction `1.0`.
    pub fn locate(&self, u: f64) -> (usize, f64) {
        let count = self.sections.len();
        let scaled = u * count as f64;
        let index = (scaled.floor().max(0.0) as usize).min(count - 1);
        if index as f64 != scaled.floor() {
            trace!("union: u = {u} clamped to section {index}");
        }
        (index, scaled - index as f64)
    }
}

impl CrossSection for Union {
    fn position(&self, u: f64, v: f64) -> Vec3 {
        let (index, fraction) = self.locate(u);
        self.sections[index].position(fraction, v)
    }
}

/// Binary operation folding the points of a [`Combine`].
pub type CombineOp = dyn Fn(Vec3, Vec3) -> Vec3 + Send + Sync;

/// Sections evaluated at the same `(u, v)` and folded left to right.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use sweep_surface::cross_section::{Circle, Combine, CrossSection, Line};
///
/// let shifted = Combine::sum(vec![Arc::new(Circle), Arc::new(Line)]).unwrap();
/// let p = shifted.position(0.5, 0.0);
/// assert!((p.x - -0.5).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct Combine {
    op: Arc<CombineOp>,
    sections: Vec<Arc<dyn CrossSection>>,
}

impl Combine {
    /// Folds the section points with `op`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidParameter`] when `sections` is empty.
    pub fn new<F>(op: F, sections: Vec<Arc<dyn CrossSection>>) -> GeometryResult<Self>
    where
        F: Fn(Vec3, Vec3) -> Vec3 + Send + Sync + 'static,
    {
        if sections.is_empty() {
            return Err(GeometryError::invalid_parameter(
                "Combine needs at least one section",
            ));
        }
        Ok(Self {
            op: Arc::new(op),
            sections,
        })
    }

    /// Vector sum of the section points.
    pub fn sum(sections: Vec<Arc<dyn CrossSection>>) -> GeometryResult<Self> {
        Self::new(|a, b| a + b, sections)
    }
}

impl fmt::Debug for Combine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combine")
            .field("sections", &self.sections)
            .finish_non_exhaustive()
    }
}

impl CrossSection for Combine {
    fn position(&self, u: f64, v: f64) -> Vec3 {
        let mut points = self.sections.iter().map(|section| section.position(u, v));
        // Non-empty by construction.
        let first = points.next().unwrap_or(Vec3::ZERO);
        points.fold(first, |acc, p| (self.op)(acc, p))
    }
}
