// Host-side tests for the per-surface ripple state machine.

use folio_core::{RippleConfig, RipplePhase, RippleState, EXIT_START_THRESHOLD};
use glam::Vec2;

fn warmed_up(pos: Vec2) -> RippleState {
    let mut s = RippleState::default();
    s.pointer_move(pos);
    for _ in 0..20 {
        s.step();
    }
    assert_eq!(s.intensity(), 1.0);
    s
}

#[test]
fn interpolation_converges_geometrically() {
    let mut s = RippleState::default();
    let target = Vec2::new(100.0, 50.0);
    s.pointer_move(target);

    let initial = target.distance(s.interpolated());
    let mut prev_err = initial;
    for n in 1..=60 {
        s.step();
        let expected = target - target * 0.92_f32.powi(n);
        assert!(
            s.interpolated().distance(expected) < 1e-2,
            "frame {}: got {:?}, expected {:?}",
            n,
            s.interpolated(),
            expected
        );
        let err = target.distance(s.interpolated());
        assert!(err < prev_err, "error must shrink every frame");
        prev_err = err;
    }
    assert!(prev_err > 0.0, "easing never lands exactly on the target");
}

#[test]
fn sixty_frames_settle_within_one_percent() {
    let mut s = RippleState::default();
    let target = Vec2::new(100.0, 50.0);
    s.pointer_move(target);
    let initial = target.distance(s.interpolated());
    for _ in 0..60 {
        s.step();
    }
    let remaining = target.distance(s.interpolated());
    let bound = 0.92_f32.powi(60) * initial;
    assert!(remaining <= bound * 1.001, "remaining={} bound={}", remaining, bound);
    assert!(remaining < 0.01 * initial);
}

#[test]
fn intensity_rises_monotonically_while_active() {
    let mut s = RippleState::default();
    s.pointer_move(Vec2::new(10.0, 10.0));
    let rise = s.config().rise_per_frame;
    let mut prev = s.intensity();
    for _ in 0..30 {
        s.step();
        let now = s.intensity();
        assert!(now >= prev);
        assert!(now - prev <= rise + 1e-6);
        assert!((0.0..=1.0).contains(&now));
        assert_eq!(s.exit_progress(), 0.0);
        prev = now;
    }
    assert_eq!(s.phase(), RipplePhase::Active);
}

#[test]
fn intensity_falls_monotonically_after_leave() {
    let mut s = warmed_up(Vec2::new(40.0, 40.0));
    s.pointer_leave(Vec2::new(0.0, 40.0));
    let decay = s.config().decay_per_frame;
    let mut prev = s.intensity();
    for _ in 0..80 {
        s.step();
        let now = s.intensity();
        assert!(now <= prev);
        assert!(prev - now <= decay + 1e-6);
        assert!((0.0..=1.0).contains(&now));
        prev = now;
    }
}

#[test]
fn exit_waits_for_intensity_threshold() {
    let mut s = warmed_up(Vec2::new(40.0, 40.0));
    s.pointer_leave(Vec2::new(0.0, 40.0));
    assert_eq!(s.phase(), RipplePhase::Decaying);

    loop {
        s.step();
        if s.intensity() >= EXIT_START_THRESHOLD {
            assert_eq!(s.exit_progress(), 0.0);
            assert_eq!(s.phase(), RipplePhase::Decaying);
        } else {
            assert!(s.exit_progress() > 0.0);
            assert_eq!(s.phase(), RipplePhase::Exiting);
            break;
        }
    }
}

#[test]
fn leave_after_full_intensity_returns_to_idle() {
    let mut s = warmed_up(Vec2::new(200.0, 120.0));
    s.pointer_leave(Vec2::new(200.0, 0.0));

    let mut decay_frames = 0;
    while s.exit_progress() == 0.0 {
        s.step();
        decay_frames += 1;
        assert!(decay_frames < 100, "decay never reached the threshold");
    }
    assert!(
        (30..=32).contains(&decay_frames),
        "decay took {} frames",
        decay_frames
    );

    let mut exit_frames = 0;
    while s.phase() != RipplePhase::Idle {
        let before = s.exit_progress();
        s.step();
        exit_frames += 1;
        if s.phase() != RipplePhase::Idle {
            assert!(s.exit_progress() > before, "exit progress keeps climbing");
        }
        assert!(exit_frames < 100, "exit never completed");
    }
    assert!(
        (22..=26).contains(&exit_frames),
        "exit took {} frames",
        exit_frames
    );
    assert_eq!(s.intensity(), 0.0);
    assert_eq!(s.exit_progress(), 0.0);
    assert_eq!(s.uniforms().effect_strength(), 0.0);
}

#[test]
fn idle_state_stays_idle() {
    let mut s = RippleState::default();
    for _ in 0..10 {
        s.step();
        assert_eq!(s.phase(), RipplePhase::Idle);
        assert_eq!(s.intensity(), 0.0);
        assert_eq!(s.exit_progress(), 0.0);
    }
}

#[test]
fn pointer_move_preempts_exit() {
    let mut s = warmed_up(Vec2::new(50.0, 50.0));
    s.pointer_leave(Vec2::new(0.0, 50.0));
    while s.phase() != RipplePhase::Exiting {
        s.step();
    }
    let intensity_before = s.intensity();

    s.pointer_move(Vec2::new(60.0, 60.0));
    s.step();
    assert_eq!(s.phase(), RipplePhase::Active);
    assert_eq!(s.exit_progress(), 0.0);
    assert!(s.intensity() > intensity_before);
}

#[test]
fn exit_position_is_frozen_until_next_leave() {
    let mut s = warmed_up(Vec2::new(50.0, 50.0));
    let exit = Vec2::new(0.0, 25.0);
    s.pointer_leave(exit);
    for _ in 0..40 {
        s.step();
        assert_eq!(s.exit_start(), exit);
        assert_eq!(s.uniforms().exit_start, exit);
    }
}

#[test]
fn effect_center_slides_to_exit_point() {
    let mut s = warmed_up(Vec2::new(300.0, 300.0));
    let exit = Vec2::new(300.0, 0.0);
    s.pointer_leave(exit);
    let mut last_progress = 0.0;
    while s.phase() != RipplePhase::Idle {
        let u = s.uniforms();
        let center = u.effect_center();
        let expected = u.mouse + (exit - u.mouse) * u.exit_progress;
        assert!(center.distance(expected) < 1e-3);
        last_progress = u.exit_progress;
        s.step();
    }
    assert!(last_progress > 0.9);
}

#[test]
fn custom_config_is_respected() {
    let config = RippleConfig {
        rise_per_frame: 0.5,
        ..RippleConfig::default()
    };
    let mut s = RippleState::new(config);
    s.pointer_move(Vec2::ONE);
    s.step();
    assert_eq!(s.intensity(), 0.5);
    s.step();
    assert_eq!(s.intensity(), 1.0);
}
