// Host-side tests for pointer tracking, the per-frame rotation step and the
// view that ties them to a renderer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod curve {
        include!("../src/core/curve.rs");
    }
    pub mod interp {
        include!("../src/core/interp.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod view {
        include!("../src/core/view.rs");
    }
}

use crate::core::camera::Camera;
use crate::core::motion::*;
use crate::core::scene::{LineRenderer, SpiralGroup, Strand};
use crate::core::view::SpiralView;
use glam::{Vec2, Vec3};

const EPS: f32 = 1e-6;

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Vec3>,
    sizes: Vec<(u32, u32)>,
    fail: bool,
}

impl LineRenderer for RecordingRenderer {
    type Error = &'static str;

    fn render(&mut self, group: &SpiralGroup, _camera: &Camera) -> Result<(), Self::Error> {
        if self.fail {
            return Err("surface lost");
        }
        self.frames.push(group.rotation);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }
}

fn small_group() -> SpiralGroup {
    SpiralGroup {
        strands: vec![Strand {
            points: vec![Vec3::ZERO, Vec3::X],
            opacity: 0.5,
        }],
        color: [1.0, 1.0, 1.0],
        rotation: Vec3::ZERO,
    }
}

// ---------------- Pointer ----------------

#[test]
fn pointer_top_left_maps_to_negative_y_positive_x() {
    let mut p = PointerState::default();
    p.update(0.0, 0.0, 1280.0, 720.0);
    assert_eq!(p.normalized, Vec2::new(-1.0, 1.0));
    assert!((p.target_rotation.y + 0.08).abs() < EPS);
    assert!((p.target_rotation.x - 0.08).abs() < EPS);
}

#[test]
fn pointer_bottom_right_maps_to_positive_y_negative_x() {
    let mut p = PointerState::default();
    p.update(1280.0, 720.0, 1280.0, 720.0);
    assert!((p.target_rotation.y - 0.08).abs() < EPS);
    assert!((p.target_rotation.x + 0.08).abs() < EPS);
}

#[test]
fn pointer_centre_is_neutral() {
    let mut p = PointerState::default();
    p.update(400.0, 300.0, 800.0, 600.0);
    assert!(p.normalized.length() < EPS);
    assert!(p.target_rotation.length() < EPS);
}

#[test]
fn pointer_last_write_wins() {
    let mut p = PointerState::default();
    p.update(0.0, 0.0, 800.0, 600.0);
    p.update(800.0, 300.0, 800.0, 600.0);
    assert!((p.target_rotation.y - 0.08).abs() < EPS);
    assert!(p.target_rotation.x.abs() < EPS);
}

#[test]
fn degenerate_viewport_is_ignored() {
    let mut p = PointerState::default();
    p.update(10.0, 10.0, 800.0, 600.0);
    let before = p;
    p.update(5.0, 5.0, 0.0, 600.0);
    p.update(5.0, 5.0, 800.0, f32::NAN);
    assert_eq!(p, before);
}

// ---------------- Rotation step ----------------

#[test]
fn step_at_target_only_adds_auto_spin() {
    let mut rot = Vec3::new(0.04, 1.0, -0.02);
    step_rotation(&mut rot, Vec2::new(0.04, -0.02));
    assert!((rot.x - 0.04).abs() < EPS);
    assert!((rot.y - 1.003).abs() < EPS);
    assert!((rot.z + 0.02).abs() < EPS);
}

#[test]
fn step_eases_five_percent_toward_target() {
    let mut rot = Vec3::ZERO;
    step_rotation(&mut rot, Vec2::new(1.0, -2.0));
    assert!((rot.x - 0.05).abs() < EPS);
    assert!((rot.z + 0.1).abs() < EPS);
}

#[test]
fn horizontal_pointer_leans_about_z_not_y() {
    let mut p = PointerState::default();
    p.update(800.0, 300.0, 800.0, 600.0); // far right, vertically centred
    let mut rot = Vec3::ZERO;
    for _ in 0..10 {
        step_rotation(&mut rot, p.target_rotation);
    }
    assert!(rot.x.abs() < EPS);
    assert!(rot.z > 0.0);
    assert!((rot.y - 0.03).abs() < 1e-5);
}

#[test]
fn easing_converges_to_target() {
    let mut rot = Vec3::ZERO;
    let target = Vec2::new(0.08, -0.08);
    for _ in 0..400 {
        step_rotation(&mut rot, target);
    }
    assert!((rot.x - 0.08).abs() < 1e-5);
    assert!((rot.z + 0.08).abs() < 1e-5);
}

// ---------------- View ----------------

#[test]
fn tick_rotates_then_renders() {
    let mut view = SpiralView::new(
        small_group(),
        Camera::default(),
        Some(RecordingRenderer::default()),
    );
    view.tick().unwrap();
    view.tick().unwrap();
    let r = view.renderer().unwrap();
    assert_eq!(r.frames.len(), 2);
    assert!((r.frames[1].y - 0.006).abs() < EPS);
}

#[test]
fn tick_without_renderer_still_animates() {
    let mut view: SpiralView<RecordingRenderer> =
        SpiralView::new(small_group(), Camera::default(), None);
    view.on_pointer_move(0.0, 0.0, 100.0, 100.0);
    assert!(view.tick().is_ok());
    assert!((view.group.rotation.y - 0.003).abs() < EPS);
    assert!((view.group.rotation.x - 0.004).abs() < EPS);
    assert!((view.group.rotation.z + 0.004).abs() < EPS);
}

#[test]
fn render_errors_are_reported() {
    let mut view = SpiralView::new(
        small_group(),
        Camera::default(),
        Some(RecordingRenderer {
            fail: true,
            ..Default::default()
        }),
    );
    assert_eq!(view.tick(), Err("surface lost"));
    // the state still advanced
    assert!((view.group.rotation.y - 0.003).abs() < EPS);
}

#[test]
fn resize_updates_camera_and_surface() {
    let mut view = SpiralView::new(
        small_group(),
        Camera::for_size(100.0, 100.0),
        Some(RecordingRenderer::default()),
    );
    assert!(view.resize(800.0, 400.0, 3.0));
    assert!((view.camera.aspect - 2.0).abs() < EPS);
    assert_eq!(view.renderer().unwrap().sizes, vec![(1600, 800)]);
}

#[test]
fn resize_is_noop_without_renderer_or_size() {
    let mut view: SpiralView<RecordingRenderer> =
        SpiralView::new(small_group(), Camera::for_size(100.0, 100.0), None);
    assert!(!view.resize(800.0, 400.0, 1.0));
    assert!((view.camera.aspect - 1.0).abs() < EPS);

    let mut view = SpiralView::new(
        small_group(),
        Camera::for_size(100.0, 100.0),
        Some(RecordingRenderer::default()),
    );
    assert!(!view.resize(0.0, 400.0, 1.0));
    assert!(view.renderer().unwrap().sizes.is_empty());
}
