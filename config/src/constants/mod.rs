//! Centralized configuration values shared across the sweep-surface workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((1.0_f64 - (1.0 + 1e-11)).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Threshold below which a vector length or a matrix determinant is treated
/// as zero.
///
/// Normalization and matrix inversion refuse inputs under this magnitude and
/// report a domain error instead of producing infinities.
///
/// # Examples
/// ```
/// use config::constants::SINGULARITY_TOLERANCE;
/// assert!(SINGULARITY_TOLERANCE > 0.0);
/// ```
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

/// Step used by central-difference Jacobian estimates.
///
/// # Examples
/// ```
/// use config::constants::FINITE_DIFFERENCE_STEP;
/// assert!(FINITE_DIFFERENCE_STEP < 1e-3);
/// ```
pub const FINITE_DIFFERENCE_STEP: f64 = 1e-6;

// =============================================================================
// SINGULARITY SENTINELS
// =============================================================================

/// Value reported for the SuperScale derivative at exactly zero.
///
/// The power law `sign(x)·|x|^(2/k)` has no finite derivative at the origin
/// (the sign jump contributes a Dirac term). This is an approximation, not the
/// true derivative.
///
/// # Examples
/// ```
/// use config::constants::SUPERSCALE_ZERO_DERIVATIVE;
/// assert_eq!(SUPERSCALE_ZERO_DERIVATIVE, 1.0);
/// ```
pub const SUPERSCALE_ZERO_DERIVATIVE: f64 = 1.0;

/// Global "up" direction used by the straight-line path normal convention.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_UP_AXIS;
/// assert_eq!(DEFAULT_UP_AXIS, [0.0, 0.0, 1.0]);
/// ```
pub const DEFAULT_UP_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of quads around the cross-section (u direction).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_U_STEPS;
/// assert_eq!(DEFAULT_U_STEPS, 24);
/// ```
pub const DEFAULT_U_STEPS: u32 = 24;

/// Default number of quads along the path (v direction).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_V_STEPS;
/// assert_eq!(DEFAULT_V_STEPS, 10);
/// ```
pub const DEFAULT_V_STEPS: u32 = 10;

/// Checks that both grid axes have at least one quad.
///
/// # Examples
/// ```
/// use config::constants::validate_steps;
/// assert!(validate_steps(24, 10).is_ok());
/// assert!(validate_steps(24, 0).is_err());
/// ```
pub fn validate_steps(u_steps: u32, v_steps: u32) -> Result<(), ConfigError> {
    if u_steps == 0 {
        return Err(ConfigError::InvalidSteps { axis: 'u', value: u_steps });
    }
    if v_steps == 0 {
        return Err(ConfigError::InvalidSteps { axis: 'v', value: v_steps });
    }
    Ok(())
}

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::{GlobalConfig, DEFAULT_U_STEPS};
/// let config = GlobalConfig::default();
/// assert_eq!(config.u_steps, DEFAULT_U_STEPS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Default quad count in the u direction.
    pub u_steps: u32,
    /// Default quad count in the v direction.
    pub v_steps: u32,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting an empty grid axis.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(48, 12).expect("valid config");
    /// assert_eq!(cfg.u_steps, 48);
    /// ```
    pub fn new(u_steps: u32, v_steps: u32) -> Result<Self, ConfigError> {
        validate_steps(u_steps, v_steps)?;
        Ok(Self { u_steps, v_steps })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            u_steps: DEFAULT_U_STEPS,
            v_steps: DEFAULT_V_STEPS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a grid axis has no quads.
    InvalidSteps {
        /// Parameter axis, `'u'` or `'v'`.
        axis: char,
        /// Rejected value.
        value: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSteps { axis, value } => {
                write!(f, "{axis}_steps must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
