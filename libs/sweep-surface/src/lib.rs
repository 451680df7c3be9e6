//! # Sweep Surface
//!
//! Parametric surfaces generated by sweeping a 2D cross-section curve along a
//! 3D path curve.
//!
//! ## Architecture
//!
//! ```text
//! surface.position(u, v)
//!   ├─ path.position(v), path.frenet_frame(v)   → origin + (T, N, B)
//!   └─ cross_section.position(u, v)              → local (x, y, z)
//!        result = origin + N·x + B·y + T·z
//! ```
//!
//! Both curve families, and the coordinate transforms that deform them, are
//! small traits composed at runtime through `Arc<dyn ...>` wrappers
//! (`Transformed`, `Conjugated`, `Union`, `Combine`). Every evaluation is a pure
//! function of its parameters, so a surface can be sampled from many threads.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use sweep_surface::{cross_section::Circle, path::Line, ExtrudedSurface, Vec3};
//!
//! let surface = ExtrudedSurface::new(
//!     Arc::new(Circle),
//!     Arc::new(Line::new(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0))),
//! );
//! let p = surface.position(0.0, 0.5).unwrap();
//! assert!((p - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-12);
//! ```

pub mod cross_section;
pub mod error;
pub mod linalg;
pub mod mesh;
pub mod path;
pub mod shapes;
pub mod surface;
pub mod xform;

pub use cross_section::CrossSection;
pub use error::{GeometryError, GeometryResult};
pub use linalg::{Mat3, Vec3};
pub use mesh::{build_quad_mesh, MeshParams, QuadMesh};
pub use path::{FrenetFrame, Path};
pub use surface::{ExtrudedSurface, ParametricSurface};
pub use xform::XForm;
