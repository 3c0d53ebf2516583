//! End-to-end projection scenarios
//!
//! Drives solids through the recording backend the same way the app drives
//! the GPU backend, then checks where the geometry lands on screen.

use std::f32::consts::{FRAC_PI_2, TAU};

use hyperview_core::projection::{project_to_3d, to_screen};
use hyperview_core::{
    Camera, CameraSettings, Cube, FrameUniforms, Hypercube, ProgramKind, RecordingBackend,
    RotatingSolid, RotationPlane, SolidRenderer, Tumble, Vec3, Vec4,
};

const EPSILON: f32 = 1e-4;

fn front_camera() -> Camera {
    // Looking down -Z from +Z so screen axes line up with world X/Y
    Camera::new(CameraSettings {
        position: Vec3::new(0.0, 0.0, 6.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        ..CameraSettings::default()
    })
    .with_viewport(800, 800)
}

#[test]
fn test_hypercube_fits_on_screen() {
    let mut backend = RecordingBackend::new();
    let renderer = SolidRenderer::new(&mut backend, Hypercube::new(1.0)).unwrap();
    renderer.render(&mut backend, &front_camera()).unwrap();

    let scene = &backend.last_draw().unwrap().scene;
    assert_eq!(scene.visible_vertex_count(), 16);
    for v in &scene.vertices {
        assert!(v.clip.w > 0.0);
    }
}

#[test]
fn test_unrotated_hypercube_is_symmetric_on_screen() {
    let mut backend = RecordingBackend::new();
    let solid = Hypercube::new(1.0).with_tumble(Tumble::still());
    let renderer = SolidRenderer::new(&mut backend, solid).unwrap();
    renderer.render(&mut backend, &front_camera()).unwrap();

    let scene = &backend.last_draw().unwrap().scene;
    let points: Vec<[f32; 2]> = scene
        .vertices
        .iter()
        .map(|v| to_screen(v.clip, 800, 800))
        .collect();

    // The projection has no preferred side, so the screen-space centroid
    // sits at the viewport center.
    let n = points.len() as f32;
    let cx = points.iter().map(|p| p[0]).sum::<f32>() / n;
    let cy = points.iter().map(|p| p[1]).sum::<f32>() / n;
    assert!((cx - 400.0).abs() < 1e-2, "cx = {}", cx);
    assert!((cy - 400.0).abs() < 1e-2, "cy = {}", cy);
}

#[test]
fn test_full_turn_returns_to_start() {
    let camera = Camera::default();
    let mut hypercube = Hypercube::new(1.0)
        .with_tumble(Tumble::still())
        .with_plane(RotationPlane::ZW)
        .with_rotation_speed(1.0);

    let start = FrameUniforms::new(&camera, &hypercube);
    let mut elapsed = 0.0;
    while elapsed + 0.125 <= TAU {
        hypercube.update(0.125);
        elapsed += 0.125;
    }
    hypercube.update(TAU - elapsed);
    let end = FrameUniforms::new(&camera, &hypercube);

    for corner in [Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(-1.0, 1.0, -1.0, 1.0)] {
        let a = project_to_3d(corner, &start);
        let b = project_to_3d(corner, &end);
        assert!((a - b).length() < EPSILON, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_switching_plane_mid_rotation() {
    let camera = Camera::default();
    let mut hypercube = Hypercube::new(1.0).with_tumble(Tumble::still()).with_rotation_speed(FRAC_PI_2);
    hypercube.update(1.0);

    let before = FrameUniforms::new(&camera, &hypercube);
    hypercube.set_plane(RotationPlane::XY);
    let after = FrameUniforms::new(&camera, &hypercube);

    // Same angle, different generator
    assert!((hypercube.current_angle() - FRAC_PI_2).abs() < EPSILON);
    assert_ne!(before.model4d, after.model4d);

    // XY only mixes x and y, so a point on the W axis is unaffected
    let w = Vec4::new(0.0, 0.0, 0.0, 1.0);
    let p = project_to_3d(w, &after);
    let mut unrotated = after;
    unrotated.model4d = hyperview_math::mat4::IDENTITY;
    assert!((p - project_to_3d(w, &unrotated)).length() < EPSILON);
}

#[test]
fn test_cube_and_hypercube_share_backend() {
    let mut backend = RecordingBackend::new();
    let mut cube = SolidRenderer::new(&mut backend, Cube::new(1.0)).unwrap();
    let mut hypercube = SolidRenderer::new(&mut backend, Hypercube::new(1.0)).unwrap();
    assert_eq!(backend.mesh_count(), 2);
    assert_eq!(backend.program_count(), 2);

    let camera = Camera::default().with_viewport(1280, 720);

    cube.update(0.016);
    cube.render(&mut backend, &camera).unwrap();
    assert_eq!(backend.last_draw().unwrap().scene.vertices.len(), 24);

    hypercube.update(0.016);
    hypercube.render(&mut backend, &camera).unwrap();
    let draw = backend.last_draw().unwrap();
    assert_eq!(draw.scene.vertices.len(), 16);
    assert_eq!(hypercube.solid().kind().program(), ProgramKind::Projected4D);
    assert!(draw.scene.vertices.iter().all(|v| v.clip.w.is_finite()));
}
