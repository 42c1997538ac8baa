// Host-side tests for the scene aggregate: tilt easing, spring integration,
// parallax poses, and breakpoint re-anchoring working together.
// The main crate is wasm-only, so we include the pure-Rust modules directly;
// the sibling layout keeps their `super::` imports resolvable.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geom {
        include!("../src/core/geom.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use engine::geom::Rect;
use engine::input::{drive, PointerDrive};
use engine::layout::LayoutTable;
use engine::scene::{parse_f32_or, ContainerPose, Scene, TagPose, TagSpec};
use glam::Vec2;

fn spec(id: &str, rot: f32, depth: f32) -> TagSpec {
    TagSpec {
        id: id.to_owned(),
        base_rotation_deg: rot,
        depth,
    }
}

fn make_scene() -> Scene {
    let specs = vec![spec("tri", -6.0, 20.0), spec("oval", 4.0, 26.0)];
    let mut scene = Scene::new(specs, LayoutTable::default());
    scene.relayout(2000.0);
    scene
}

/// A full-right pointer sample: deflection (1, 0).
fn full_right() -> PointerDrive {
    drive(
        Rect::new(0.0, 0.0, 800.0, 500.0),
        Vec2::new(800.0, 250.0),
    )
}

#[test]
fn malformed_numeric_attributes_fall_back() {
    assert_eq!(parse_f32_or(Some("-6.5"), 0.0), -6.5);
    assert_eq!(parse_f32_or(Some("  18 "), 0.0), 18.0); // markup whitespace
    assert_eq!(parse_f32_or(Some("abc"), 0.0), 0.0);
    assert_eq!(parse_f32_or(Some(""), 20.0), 20.0);
    assert_eq!(parse_f32_or(Some("12deg"), 0.0), 0.0); // units are not stripped
    assert_eq!(parse_f32_or(None, 20.0), 20.0);
}

#[test]
fn css_transforms_compose_in_fixed_order() {
    let container = ContainerPose {
        rotate_y_deg: 12.0,
        rotate_x_deg: -10.0,
    };
    assert_eq!(container.css_transform(), "rotateY(12deg) rotateX(-10deg)");

    let pose = TagPose {
        x: -240.0,
        y: 260.0,
        depth: 20.0,
        rotation_deg: -6.5,
    };
    assert_eq!(
        pose.css_transform(),
        "translate(-50%, -50%) translate3d(-240px, 260px, 20px) rotate(-6.5deg)"
    );
}

#[test]
fn empty_scene_ticks_to_nothing() {
    let mut scene = Scene::new(Vec::new(), LayoutTable::default());
    assert!(scene.is_empty());

    scene.relayout(2000.0);
    let mut poses: Vec<TagPose> = vec![TagPose::default(); 3]; // stale junk
    let container = scene.tick(&mut poses);
    assert!(poses.is_empty());
    assert_eq!(container, ContainerPose::default());
}

#[test]
fn poses_come_out_in_markup_order_and_duplicates_collapse() {
    let specs = vec![
        spec("tri", 0.0, 20.0),
        spec("oval", 0.0, 20.0),
        spec("tri", 9.0, 9.0),
    ];
    let scene = Scene::new(specs, LayoutTable::default());
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.tag_order(), ["tri".to_owned(), "oval".to_owned()]);
    // The first spec wins; the duplicate's values are discarded.
    let tri = scene.tag("tri").expect("tri registered");
    assert_eq!(tri.depth, 20.0);
}

#[test]
fn undisturbed_scene_ticks_in_place() {
    let mut scene = make_scene();
    let mut poses: Vec<TagPose> = vec![TagPose::default(); 7]; // stale junk
    let container = scene.tick(&mut poses);

    assert_eq!(container.rotate_y_deg, 0.0);
    assert_eq!(container.rotate_x_deg, 0.0);
    assert_eq!(poses.len(), 2, "buffer is cleared before refill");
    // Desktop anchors, verbatim
    assert_eq!(poses[0].x, -240.0);
    assert_eq!(poses[0].y, 260.0);
    assert_eq!(poses[0].rotation_deg, -6.0);
    assert_eq!(poses[1].x, 0.0);
    assert_eq!(poses[1].y, 240.0);
    assert_eq!(poses[1].depth, 26.0);
}

#[test]
fn relayout_moves_anchors_between_size_classes() {
    let mut scene = make_scene();
    let mut poses = Vec::new();

    scene.relayout(400.0);
    scene.tick(&mut poses);
    assert_eq!((poses[0].x, poses[0].y), (0.0, 210.0), "phone tri anchor");
    assert_eq!((poses[1].x, poses[1].y), (0.0, 310.0), "phone oval anchor");

    scene.relayout(2000.0);
    scene.tick(&mut poses);
    assert_eq!((poses[0].x, poses[0].y), (-240.0, 260.0), "desktop tri anchor");
}

#[test]
fn tags_missing_from_the_table_anchor_at_origin() {
    let mut scene = Scene::new(vec![spec("badge", 0.0, 20.0)], LayoutTable::default());
    scene.relayout(2000.0);
    let mut poses = Vec::new();
    scene.tick(&mut poses);
    assert_eq!((poses[0].x, poses[0].y), (0.0, 0.0));
}

#[test]
fn applying_drive_writes_targets_without_integrating() {
    let mut scene = make_scene();
    scene.apply_drive(full_right());

    // Targets landed
    assert_eq!(scene.tilt().target, Vec2::new(12.0, 0.0));
    let tri = scene.tag("tri").expect("tri registered");
    assert!((tri.spring.target - 10.0).abs() < 1e-4);
    // Nothing moved yet; that is the tick's job
    assert_eq!(scene.tilt().current, Vec2::ZERO);
    assert_eq!(tri.spring.angle, 0.0);
}

#[test]
fn sustained_drive_converges_to_parallax_offsets() {
    let mut scene = make_scene();
    scene.apply_drive(full_right());

    let mut poses = Vec::new();
    for _ in 0..400 {
        scene.tick(&mut poses);
    }
    let container = scene.tick(&mut poses);

    // Tilt settles at the full-deflection angles
    assert!((container.rotate_y_deg - 12.0).abs() < 0.01);
    assert!(container.rotate_x_deg.abs() < 0.01);

    // Each tag shifts against the tilt by its own depth
    assert!((poses[0].x - (-240.0 - 20.0)).abs() < 0.05, "tri x {}", poses[0].x);
    assert!((poses[1].x - (0.0 - 26.0)).abs() < 0.05, "oval x {}", poses[1].x);
    assert!((poses[0].y - 260.0).abs() < 0.05, "tri y {}", poses[0].y);

    // Swing settles at base + shared target
    assert!((poses[0].rotation_deg - (-6.0 + 10.0)).abs() < 0.1);
    assert!((poses[1].rotation_deg - (4.0 + 10.0)).abs() < 0.1);
}

#[test]
fn deeper_tags_shift_further() {
    let mut scene = make_scene();
    scene.apply_drive(full_right());
    let mut poses = Vec::new();
    for _ in 0..400 {
        scene.tick(&mut poses);
    }
    let tri_shift = (poses[0].x - (-240.0)).abs();
    let oval_shift = (poses[1].x - 0.0).abs();
    assert!(
        oval_shift > tri_shift,
        "depth 26 should out-shift depth 20 ({oval_shift} vs {tri_shift})"
    );
}

#[test]
fn pointer_leave_relaxes_everything_back() {
    let mut scene = make_scene();
    let mut poses = Vec::new();

    scene.apply_drive(full_right());
    for _ in 0..60 {
        scene.tick(&mut poses);
    }
    assert!(poses[0].x < -250.0, "scene should be visibly displaced first");

    scene.apply_drive(PointerDrive::NEUTRAL);
    for _ in 0..500 {
        scene.tick(&mut poses);
    }
    assert!((poses[0].x - (-240.0)).abs() < 0.01, "tri x {}", poses[0].x);
    assert!((poses[0].rotation_deg - (-6.0)).abs() < 0.01);
    assert!(scene.tilt().current.length() < 0.01);
}

#[test]
fn tilt_eases_monotonically_with_no_overshoot() {
    let mut scene = make_scene();
    scene.apply_drive(full_right());
    let mut poses = Vec::new();

    let mut prev_gap = 12.0_f32;
    for _ in 0..200 {
        let container = scene.tick(&mut poses);
        let gap = (12.0 - container.rotate_y_deg).abs();
        assert!(gap <= prev_gap + 1e-4, "tilt moved away from its target");
        assert!(
            container.rotate_y_deg <= 12.0 + 1e-3,
            "tilt overshot to {}",
            container.rotate_y_deg
        );
        prev_gap = gap;
    }
    assert!(prev_gap < 0.01, "tilt still {prev_gap} away after 200 frames");
}

#[test]
fn one_tick_moves_a_bounded_step() {
    let mut scene = make_scene();
    scene.apply_drive(full_right());
    let mut poses = Vec::new();
    let container = scene.tick(&mut poses);

    // One easing step of the 12 degree gap
    assert!((container.rotate_y_deg - 0.96).abs() < 1e-3);
    // Spring's first step is stiffness * damping of the gap
    let swing = poses[0].rotation_deg - (-6.0);
    assert!(swing > 0.0 && swing < 1.0, "first swing step {swing}");
}
