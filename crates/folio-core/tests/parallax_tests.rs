// Host-side tests for scrubbed scroll tweens.

use folio_core::parallax::{Extent, ScrollTween};

#[test]
fn progress_is_clamped() {
    let t = ScrollTween {
        start: 100.0,
        end: 300.0,
        from: 0.0,
        to: 10.0,
    };
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(200.0), 0.5);
    assert_eq!(t.progress(1000.0), 1.0);
    assert_eq!(t.value_at(200.0), 5.0);
}

#[test]
fn zero_length_tween_snaps() {
    let t = ScrollTween {
        start: 50.0,
        end: 50.0,
        from: 1.0,
        to: 0.0,
    };
    assert_eq!(t.value_at(49.0), 1.0);
    assert_eq!(t.value_at(50.0), 0.0);
}

#[test]
fn hero_shift_starts_when_bottom_meets_viewport_bottom() {
    let hero = Extent::new(0.0, 1000.0);
    let t = ScrollTween::hero_shift(hero, 800.0);
    assert_eq!(t.start, 200.0);
    assert_eq!(t.end, 10_200.0);
    assert_eq!(t.value_at(0.0), 0.0);
    assert_eq!(t.value_at(10_200.0), 300.0);
}

#[test]
fn hero_dim_runs_until_hero_leaves() {
    let hero = Extent::new(0.0, 1000.0);
    let t = ScrollTween::hero_dim(hero, 800.0);
    assert_eq!(t.start, 200.0);
    assert_eq!(t.end, 1000.0);
    assert_eq!(t.value_at(0.0), 1.0);
    assert!((t.value_at(1000.0) - 0.4).abs() < 1e-9);
    assert!((t.value_at(600.0) - 0.7).abs() < 1e-9);
}

#[test]
fn image_shift_starts_as_frame_enters() {
    let frame = Extent::new(2000.0, 400.0);
    assert_eq!(frame.height(), 400.0);
    let t = ScrollTween::image_shift(frame, 900.0);
    assert_eq!(t.start, 1100.0);
    assert_eq!(t.value_at(1100.0), 0.0);
    assert!(t.value_at(6100.0) > 94.0 && t.value_at(6100.0) < 96.0);
}
