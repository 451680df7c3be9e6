//! End-to-end sweeps through the public API.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::sync::Arc;

use approx::assert_relative_eq;
use sweep_surface::cross_section::{self, Circle, Union};
use sweep_surface::path::{self, Helix, Line};
use sweep_surface::xform::{Scale, Translate};
use sweep_surface::{
    build_quad_mesh, shapes, CrossSection, ExtrudedSurface, GeometryError, MeshParams, Path,
    Vec3,
};

const TOL: f64 = 1e-9;

fn tube(path: impl Path + 'static) -> ExtrudedSurface {
    ExtrudedSurface::new(Arc::new(Circle), Arc::new(path))
}

#[test]
fn circle_along_x_is_a_unit_cylinder() {
    let surface = tube(Line::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)));
    for i in 0..=8 {
        for j in 0..=4 {
            let (u, v) = (i as f64 / 8.0, j as f64 / 4.0);
            let p = surface.position(u, v).unwrap();
            assert_relative_eq!(p.x, 3.0 * v, epsilon = TOL);
            assert_relative_eq!(p.y.hypot(p.z), 1.0, epsilon = TOL);
        }
    }
}

#[test]
fn line_along_up_axis_needs_another_up() {
    let vertical = tube(Line::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)));
    assert!(matches!(
        vertical.position(0.0, 0.5),
        Err(GeometryError::Domain { .. })
    ));

    let fixed = tube(Line::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)).with_up(Vec3::X));
    let p = fixed.position(0.25, 0.5).unwrap();
    assert_relative_eq!(p.z, 1.0, epsilon = TOL);
    assert_relative_eq!(p.x.hypot(p.y), 1.0, epsilon = TOL);
}

#[test]
fn helix_tube_keeps_its_radius_around_the_spine() {
    let helix = Helix::new((0.0, 4.0), (0.0, 2.0 * TAU)).with_radius(2.0);
    let spine = helix;
    let surface = ExtrudedSurface::new(
        Arc::new(cross_section::Transformed::fixed(
            Arc::new(Circle),
            Scale::uniform(0.25),
        )),
        Arc::new(helix),
    );
    for j in 0..=16 {
        let v = j as f64 / 16.0;
        let center = spine.position(v);
        let tangent = spine.tangent(v).unwrap();
        for i in 0..12 {
            let p = surface.position(i as f64 / 12.0, v).unwrap();
            let offset = p - center;
            assert_relative_eq!(offset.length(), 0.25, epsilon = TOL);
            assert_relative_eq!(offset.dot(tangent), 0.0, epsilon = TOL);
        }
    }
}

#[test]
fn helix_frames_are_orthonormal() {
    let helix = Helix::new((-1.0, 3.0), (PI, -PI)).with_radius(1.5);
    for j in 0..=20 {
        let frame = helix.frenet_frame(j as f64 / 20.0).unwrap();
        let m = frame.to_matrix();
        assert!((m.transpose() * m).abs_diff_eq(sweep_surface::Mat3::IDENTITY, TOL));
        assert_relative_eq!(m.determinant(), 1.0, epsilon = TOL);
    }
}

#[test]
fn union_profile_traces_each_piece_in_turn() {
    let shifted: Arc<dyn CrossSection> = Arc::new(cross_section::Transformed::fixed(
        Arc::new(cross_section::Line),
        Translate::new(Vec3::new(0.0, 1.0, 0.0)),
    ));
    let profile = Union::new(vec![Arc::new(cross_section::Line), shifted]).unwrap();

    assert_relative_eq!(profile.position(0.25, 0.0).x, 0.5, epsilon = TOL);
    assert_relative_eq!(profile.position(0.25, 0.0).y, 0.0, epsilon = TOL);
    assert_relative_eq!(profile.position(0.75, 0.0).y, 1.0, epsilon = TOL);
    let end = profile.position(1.0, 0.0);
    assert_relative_eq!(end.x, 1.0, epsilon = TOL);
    assert_relative_eq!(end.y, 1.0, epsilon = TOL);

    let surface = ExtrudedSurface::new(
        Arc::new(profile),
        Arc::new(Line::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0))),
    );
    // Line normal is +y and binormal +z for a path along x.
    let p = surface.position(0.75, 1.0).unwrap();
    assert_relative_eq!(p.x, 1.0, epsilon = TOL);
    assert_relative_eq!(p.y, 0.5, epsilon = TOL);
    assert_relative_eq!(p.z, 1.0, epsilon = TOL);
}

#[test]
fn translated_path_moves_the_whole_surface() {
    let base: Arc<dyn Path> = Arc::new(Helix::new((0.0, 1.0), (0.0, FRAC_PI_2)));
    let offset = Vec3::new(5.0, -2.0, 1.0);
    let moved = ExtrudedSurface::new(
        Arc::new(Circle),
        Arc::new(path::Transformed::fixed(Arc::clone(&base), Translate::new(offset))),
    );
    let original = ExtrudedSurface::new(Arc::new(Circle), base);
    for (u, v) in [(0.0, 0.0), (0.3, 0.5), (0.9, 1.0)] {
        let a = original.position(u, v).unwrap();
        let b = moved.position(u, v).unwrap();
        assert!((b - a).abs_diff_eq(offset, TOL), "{a} -> {b}");
    }
}

#[test]
fn coil_mesh_stays_within_tube_of_axis() {
    let coil = shapes::coil(0.5, 2.0, 6.0);
    let mesh = build_quad_mesh(&coil, &MeshParams::new(16, 48).closed()).unwrap();
    assert_eq!(mesh.vertex_count(), 16 * 49);
    assert_eq!(mesh.quad_count(), 16 * 48);
    for vertex in mesh.vertices() {
        let radial = vertex.x.hypot(vertex.y);
        assert!((2.5 - TOL..=3.5 + TOL).contains(&radial), "{vertex}");
    }
}

#[test]
fn mesh_sampling_is_deterministic() {
    let horn = shapes::tapered_horn(1.5, 4.0, 0.2);
    let params = MeshParams::new(20, 30).closed();
    let first = build_quad_mesh(&horn, &params).unwrap();
    let second = build_quad_mesh(&horn, &params).unwrap();
    assert_eq!(first, second);
}
