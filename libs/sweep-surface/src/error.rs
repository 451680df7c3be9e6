//! # Geometry Errors
//!
//! Error types for curve, transform and surface evaluation.
//!
//! Singularities are reported as distinct variants so callers can decide to
//! skip or clamp a sample instead of aborting a whole mesh.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building or evaluating swept geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A (near-)zero vector was normalized.
    #[error("Cannot normalize zero-length vector: {context}")]
    ZeroLengthVector {
        /// What was being normalized
        context: String,
    },

    /// A matrix with vanishing determinant was inverted.
    #[error("Singular matrix (determinant {determinant:e}): {context}")]
    SingularMatrix {
        /// Determinant that fell under the tolerance
        determinant: f64,
        /// What was being inverted
        context: String,
    },

    /// A transform without an inverse was used where one is required.
    #[error("Transform '{name}' has no inverse")]
    NotInvertible {
        /// Name of the offending transform
        name: String,
    },

    /// A transform without an analytic Jacobian was used where one is required.
    #[error("Transform '{name}' does not provide a Jacobian")]
    MissingJacobian {
        /// Name of the offending transform
        name: String,
    },

    /// Evaluation at a documented singular point.
    #[error("Domain error: {message}")]
    Domain {
        /// Description of the singularity
        message: String,
    },

    /// Rejected construction parameters.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the rejected value
        message: String,
    },

    /// Invalid workspace configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GeometryError {
    /// Creates a zero-length vector error.
    pub fn zero_length(context: impl Into<String>) -> Self {
        Self::ZeroLengthVector {
            context: context.into(),
        }
    }

    /// Creates a singular matrix error.
    pub fn singular(determinant: f64, context: impl Into<String>) -> Self {
        Self::SingularMatrix {
            determinant,
            context: context.into(),
        }
    }

    /// Creates a not-invertible error.
    pub fn not_invertible(name: impl Into<String>) -> Self {
        Self::NotInvertible { name: name.into() }
    }

    /// Creates a missing Jacobian error.
    pub fn missing_jacobian(name: impl Into<String>) -> Self {
        Self::MissingJacobian { name: name.into() }
    }

    /// Creates a domain error.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::singular(0.0, "path jacobian");
        assert!(err.to_string().contains("Singular matrix"));
        assert!(err.to_string().contains("path jacobian"));

        let err = GeometryError::not_invertible("Sinusoidal");
        assert_eq!(err.to_string(), "Transform 'Sinusoidal' has no inverse");
    }

    #[test]
    fn test_config_error_converts() {
        let err: GeometryError = ConfigError::InvalidSteps { axis: 'u', value: 0 }.into();
        assert!(matches!(err, GeometryError::Config(_)));
        assert!(err.to_string().contains("u_steps"));
    }

    /// Errors cross thread boundaries when sampling in parallel.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
