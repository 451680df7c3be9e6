//! Randomized checks of the transform contracts:
//! analytic Jacobians agree with central differences, and inverses undo
//! their transforms.

use std::sync::Arc;

use config::constants::FINITE_DIFFERENCE_STEP;
use proptest::prelude::*;
use sweep_surface::xform::{
    finite_difference_jacobian, CartesianToCylindrical, Chain, Conjugated,
    CylindricalToCartesian, RotateZ, Scale, Sinusoidal, SuperScale, Translate, XForm,
};
use sweep_surface::Vec3;

/// Relative tolerance for Jacobian entries.
const JACOBIAN_TOL: f64 = 1e-5;

/// Absolute tolerance for round trips.
const ROUND_TRIP_TOL: f64 = 1e-9;

fn coordinate() -> impl Strategy<Value = f64> {
    -2.0f64..2.0
}

/// Keeps clear of zero, where power laws lose their derivative.
fn away_from_zero() -> impl Strategy<Value = f64> {
    prop_oneof![-2.0f64..-0.2, 0.2f64..2.0]
}

fn point() -> impl Strategy<Value = Vec3> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn point_off_zero() -> impl Strategy<Value = Vec3> {
    (away_from_zero(), away_from_zero(), away_from_zero())
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

/// Right half-plane: off the z axis and away from the atan2 branch cut.
fn point_off_axis() -> impl Strategy<Value = Vec3> {
    (0.2f64..2.0, coordinate(), coordinate()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn exponent() -> impl Strategy<Value = f64> {
    0.5f64..6.0
}

fn jacobian_mismatch(xform: &dyn XForm, point: Vec3) -> Result<(), TestCaseError> {
    let analytic = xform
        .jacobian(point)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let numeric = finite_difference_jacobian(xform, point, FINITE_DIFFERENCE_STEP);
    let scale = analytic
        .to_cols_array()
        .iter()
        .fold(1.0_f64, |acc, entry| acc.max(entry.abs()));
    prop_assert!(
        analytic.abs_diff_eq(numeric, JACOBIAN_TOL * scale),
        "{} at {point}: analytic {analytic:?} numeric {numeric:?}",
        xform.name()
    );
    Ok(())
}

fn round_trip(xform: &dyn XForm, point: Vec3) -> Result<(), TestCaseError> {
    let inverse = xform
        .inverse()
        .ok_or_else(|| TestCaseError::fail(format!("{} has no inverse", xform.name())))?;
    let forward_back = inverse.transform(xform.transform(point));
    let back_forward = xform.transform(inverse.transform(point));
    prop_assert!(forward_back.abs_diff_eq(point, ROUND_TRIP_TOL), "{forward_back} != {point}");
    prop_assert!(back_forward.abs_diff_eq(point, ROUND_TRIP_TOL), "{back_forward} != {point}");
    Ok(())
}

proptest! {
    #[test]
    fn scale_jacobian(sx in coordinate(), sy in coordinate(), sz in coordinate(), p in point()) {
        jacobian_mismatch(&Scale::new(sx, sy, sz), p)?;
    }

    #[test]
    fn translate_jacobian(offset in point(), p in point()) {
        jacobian_mismatch(&Translate::new(offset), p)?;
    }

    #[test]
    fn rotate_z_jacobian(angle in -6.3f64..6.3, p in point()) {
        jacobian_mismatch(&RotateZ::new(angle), p)?;
    }

    #[test]
    fn superscale_jacobian(n in exponent(), m in exponent(), k in exponent(), p in point_off_zero()) {
        let superscale = SuperScale::new(n, m, k).map_err(|e| TestCaseError::fail(e.to_string()))?;
        jacobian_mismatch(&superscale, p)?;
    }

    #[test]
    fn sinusoidal_jacobian(p in point()) {
        jacobian_mismatch(&Sinusoidal, p)?;
    }

    #[test]
    fn cylindrical_jacobians(p in point_off_axis(), q in point()) {
        jacobian_mismatch(&CartesianToCylindrical, p)?;
        jacobian_mismatch(&CylindricalToCartesian, q)?;
    }

    #[test]
    fn radial_scale_jacobian(
        sx in 0.3f64..2.0,
        sy in 0.3f64..2.0,
        sz in 0.3f64..2.0,
        p in point_off_axis(),
    ) {
        jacobian_mismatch(&Conjugated::radial(Scale::new(sx, sy, sz)), p)?;
    }

    #[test]
    fn conjugated_sinusoid_jacobian(angle in -3.0f64..3.0, offset in point(), p in point()) {
        let basis: Arc<dyn XForm> = Arc::new(
            Chain::default().then(RotateZ::new(angle)).then(Translate::new(offset)),
        );
        let conjugated = Conjugated::new(Arc::new(Sinusoidal), basis)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        jacobian_mismatch(&conjugated, p)?;
    }

    #[test]
    fn chain_jacobian(angle in -3.0f64..3.0, factors in point(), p in point()) {
        let chain = Chain::default()
            .then(RotateZ::new(angle))
            .then(Sinusoidal)
            .then(Scale::new(factors.x, factors.y, factors.z));
        jacobian_mismatch(&chain, p)?;
    }

    #[test]
    fn affine_round_trips(
        factors in point_off_zero(),
        offset in point(),
        angle in -6.3f64..6.3,
        p in point(),
    ) {
        round_trip(&Scale::new(factors.x, factors.y, factors.z), p)?;
        round_trip(&Translate::new(offset), p)?;
        round_trip(&RotateZ::new(angle), p)?;
        let chain = Chain::default()
            .then(RotateZ::new(angle))
            .then(Translate::new(offset))
            .then(Scale::new(factors.x, factors.y, factors.z));
        round_trip(&chain, p)?;
    }

    #[test]
    fn superscale_round_trip(n in exponent(), m in exponent(), k in exponent(), p in point()) {
        let superscale = SuperScale::new(n, m, k).map_err(|e| TestCaseError::fail(e.to_string()))?;
        round_trip(&superscale, p)?;
    }

    #[test]
    fn cylindrical_round_trip(p in point_off_axis()) {
        round_trip(&CartesianToCylindrical, p)?;
    }

    #[test]
    fn radial_translate_round_trip(
        ds in 0.0f64..0.15,
        dphi in -1.0f64..1.0,
        dz in coordinate(),
        p in point_off_axis(),
    ) {
        round_trip(&Conjugated::radial(Translate::new(Vec3::new(ds, dphi, dz))), p)?;
    }
}
