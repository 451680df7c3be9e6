//! # UV Mesh Sampling
//!
//! Reference consumer of [`ParametricSurface`]: samples a regular
//! `(u_steps + 1) × (v_steps + 1)` grid and stitches neighbouring samples
//! into quads `(i, j), (i+1, j), (i+1, j+1), (i, j+1)`.
//!
//! Samples are independent, so the grid is evaluated in parallel with
//! `rayon`. A single failing sample fails the whole build.

use config::constants::{validate_steps, GlobalConfig, DEFAULT_U_STEPS, DEFAULT_V_STEPS};
use log::debug;
use rayon::prelude::*;

use crate::error::{GeometryError, GeometryResult};
use crate::linalg::Vec3;
use crate::surface::ParametricSurface;

/// Grid resolution for [`build_quad_mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshParams {
    /// Quads around the cross-section.
    pub u_steps: u32,
    /// Quads along the path.
    pub v_steps: u32,
    /// Connect the last u column back to the first instead of sampling
    /// `u = 1` again. Use for closed profiles such as circles.
    pub close_u: bool,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            u_steps: DEFAULT_U_STEPS,
            v_steps: DEFAULT_V_STEPS,
            close_u: false,
        }
    }
}

impl MeshParams {
    /// Open grid with the given resolution.
    pub fn new(u_steps: u32, v_steps: u32) -> Self {
        Self {
            u_steps,
            v_steps,
            close_u: false,
        }
    }

    /// Resolution taken from a validated workspace configuration.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.u_steps, config.v_steps)
    }

    /// Wraps the grid around in u.
    pub fn closed(mut self) -> Self {
        self.close_u = true;
        self
    }

    fn validate(&self) -> GeometryResult<()> {
        validate_steps(self.u_steps, self.v_steps)?;
        if self.close_u && self.u_steps < 3 {
            return Err(GeometryError::invalid_parameter(format!(
                "closed grid needs at least 3 u steps: {}",
                self.u_steps
            )));
        }
        Ok(())
    }

    fn columns(&self) -> usize {
        if self.close_u {
            self.u_steps as usize
        } else {
            self.u_steps as usize + 1
        }
    }

    fn rows(&self) -> usize {
        self.v_steps as usize + 1
    }
}

/// Grid indices and parameters, row-major in `i`:
/// `((i, j), (i / u_steps, j / v_steps))` for `i ∈ 0..=u_steps`,
/// `j ∈ 0..=v_steps`.
///
/// # Examples
/// ```
/// use sweep_surface::mesh::uv_samples;
/// let samples: Vec<_> = uv_samples(2, 1).collect();
/// assert_eq!(samples.len(), 6);
/// assert_eq!(samples[3], ((1, 1), (0.5, 1.0)));
/// ```
pub fn uv_samples(
    u_steps: u32,
    v_steps: u32,
) -> impl Iterator<Item = ((usize, usize), (f64, f64))> {
    (0..=u_steps as usize).flat_map(move |i| {
        let u = i as f64 / u_steps as f64;
        (0..=v_steps as usize).map(move |j| ((i, j), (u, j as f64 / v_steps as f64)))
    })
}

/// Quad mesh sampled from a parametric surface.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadMesh {
    vertices: Vec<Vec3>,
    quads: Vec<[u32; 4]>,
    rows: usize,
}

impl QuadMesh {
    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of quads.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Vertex positions, `vertices[i * (v_steps + 1) + j]` for sample `(i, j)`.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Quad vertex indices.
    #[inline]
    pub fn quads(&self) -> &[[u32; 4]] {
        &self.quads
    }

    /// Position of grid sample `(i, j)`, or `None` outside the grid.
    pub fn vertex_at(&self, i: usize, j: usize) -> Option<Vec3> {
        if j >= self.rows {
            return None;
        }
        self.vertices.get(i * self.rows + j).copied()
    }

    /// Each quad split along its `(0, 2)` diagonal.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        self.quads
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
            .collect()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }
}

/// Samples `surface` on the grid described by `params` and stitches quads.
///
/// # Errors
///
/// Invalid `params`, or the first sample error reported by the surface.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use sweep_surface::{build_quad_mesh, cross_section::Circle, path::Line, ExtrudedSurface, MeshParams, Vec3};
///
/// let surface = ExtrudedSurface::new(Arc::new(Circle), Arc::new(Line::new(Vec3::ZERO, Vec3::X)));
/// let mesh = build_quad_mesh(&surface, &MeshParams::new(8, 2).closed()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8 * 3);
/// assert_eq!(mesh.quad_count(), 8 * 2);
/// ```
pub fn build_quad_mesh<S>(surface: &S, params: &MeshParams) -> GeometryResult<QuadMesh>
where
    S: ParametricSurface + ?Sized,
{
    params.validate()?;
    let columns = params.columns();
    let rows = params.rows();

    let samples: Vec<_> = uv_samples(params.u_steps, params.v_steps)
        .filter(|((i, _), _)| *i < columns)
        .collect();
    let vertices = samples
        .par_iter()
        .map(|&(_, (u, v))| surface.position(u, v))
        .collect::<GeometryResult<Vec<Vec3>>>()?;

    let index = |i: usize, j: usize| (i * rows + j) as u32;
    let mut quads = Vec::with_capacity(params.u_steps as usize * params.v_steps as usize);
    for i in 0..params.u_steps as usize {
        let next = (i + 1) % columns;
        for j in 0..params.v_steps as usize {
            quads.push([index(i, j), index(next, j), index(next, j + 1), index(i, j + 1)]);
        }
    }

    debug!(
        "sampled {}x{} grid: {} vertices, {} quads",
        columns,
        rows,
        vertices.len(),
        quads.len()
    );
    Ok(QuadMesh {
        vertices,
        quads,
        rows,
    })
}
