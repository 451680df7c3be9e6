//! # Config Crate
//!
//! Centralized configuration constants for the sweep-surface evaluator.
//! Tolerances, singularity sentinels and default sampling resolutions are
//! defined here so the geometry crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_U_STEPS, DEFAULT_V_STEPS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Grid resolution used when a caller does not pick one
//! assert!(DEFAULT_U_STEPS > DEFAULT_V_STEPS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Documented Singularities**: Sentinel values are named, never inlined
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
