//! Per-surface ripple animation state.
//!
//! Every ripple canvas owns one [`RippleState`]. Pointer events only record
//! intent (target position, active flag, exit point); all easing and
//! envelope changes happen in [`RippleState::step`], which the frame loop
//! calls exactly once per displayed frame.

use crate::constants::*;
use glam::Vec2;

/// Tuning for a single ripple surface. Defaults mirror the site constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleConfig {
    pub smoothing: f32,
    pub rise_per_frame: f32,
    pub decay_per_frame: f32,
    pub exit_threshold: f32,
    pub exit_per_frame: f32,
    pub clock_step: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            smoothing: POINTER_SMOOTHING,
            rise_per_frame: INTENSITY_RISE_PER_FRAME,
            decay_per_frame: INTENSITY_DECAY_PER_FRAME,
            exit_threshold: EXIT_START_THRESHOLD,
            exit_per_frame: EXIT_PROGRESS_PER_FRAME,
            clock_step: CLOCK_STEP,
        }
    }
}

/// Where a surface is in its enter/leave envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RipplePhase {
    /// No distortion; the plain image is shown.
    Idle,
    /// Pointer is over the surface and intensity is climbing.
    Active,
    /// Pointer left; intensity is falling toward the exit threshold.
    Decaying,
    /// Intensity is below the threshold; the effect center slides to the exit point.
    Exiting,
}

/// Snapshot of everything the fragment stage needs for one draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleUniforms {
    pub mouse: Vec2,
    pub exit_start: Vec2,
    pub time: f32,
    pub intensity: f32,
    pub exit_progress: f32,
}

impl RippleUniforms {
    /// Effect center after blending live pointer and exit point.
    pub fn effect_center(&self) -> Vec2 {
        self.mouse.lerp(self.exit_start, self.exit_progress)
    }

    /// Combined strength driving every term of the shading.
    pub fn effect_strength(&self) -> f32 {
        self.intensity * (1.0 - self.exit_progress)
    }
}

// Exit progress this close to 1 counts as finished; repeated f32 adds of
// the step rarely land on exactly 1.0.
const EXIT_COMPLETE_EPSILON: f32 = 1e-4;

#[derive(Clone, Debug)]
pub struct RippleState {
    config: RippleConfig,
    target: Vec2,
    current: Vec2,
    exit_start: Vec2,
    active: bool,
    intensity: f32,
    exit_progress: f32,
    // f64 so the accumulator stays exact over long sessions
    clock: f64,
}

impl Default for RippleState {
    fn default() -> Self {
        Self::new(RippleConfig::default())
    }
}

impl RippleState {
    pub fn new(config: RippleConfig) -> Self {
        Self {
            config,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            exit_start: Vec2::ZERO,
            active: false,
            intensity: 0.0,
            exit_progress: 0.0,
            clock: 0.0,
        }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Pointer moved over the surface; `pos` is in device pixels.
    pub fn pointer_move(&mut self, pos: Vec2) {
        if !self.active {
            log::debug!("[ripple] pointer enter at ({:.1},{:.1})", pos.x, pos.y);
        }
        self.target = pos;
        self.active = true;
    }

    /// Pointer left the surface at `pos` (device pixels). The point is
    /// frozen as the exit position until the next enter.
    pub fn pointer_leave(&mut self, pos: Vec2) {
        log::debug!(
            "[ripple] pointer leave at ({:.1},{:.1}) intensity={:.2}",
            pos.x,
            pos.y,
            self.intensity
        );
        self.exit_start = pos;
        self.active = false;
    }

    /// Advance one frame: ease toward the target, tick the clock, update
    /// the intensity/exit envelope.
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.config.smoothing;
        self.clock += self.config.clock_step as f64;

        if self.active {
            self.intensity = (self.intensity + self.config.rise_per_frame).min(1.0);
            self.exit_progress = 0.0;
        } else if self.intensity > 0.0 || self.exit_progress > 0.0 {
            self.intensity = (self.intensity - self.config.decay_per_frame).max(0.0);
            if self.intensity < self.config.exit_threshold {
                self.exit_progress = (self.exit_progress + self.config.exit_per_frame).min(1.0);
                if self.exit_progress >= 1.0 - EXIT_COMPLETE_EPSILON {
                    self.intensity = 0.0;
                    self.exit_progress = 0.0;
                    log::debug!("[ripple] exit complete; surface idle");
                }
            }
        }
    }

    pub fn phase(&self) -> RipplePhase {
        if self.active {
            RipplePhase::Active
        } else if self.exit_progress > 0.0 {
            RipplePhase::Exiting
        } else if self.intensity > 0.0 {
            RipplePhase::Decaying
        } else {
            RipplePhase::Idle
        }
    }

    pub fn interpolated(&self) -> Vec2 {
        self.current
    }

    pub fn exit_start(&self) -> Vec2 {
        self.exit_start
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn exit_progress(&self) -> f32 {
        self.exit_progress
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Uniform values for the current frame. The clock is folded into one
    /// wave period so the shader never sees a large, imprecise float; the
    /// wave term is 2π-periodic in time, so the fold is invisible.
    pub fn uniforms(&self) -> RippleUniforms {
        RippleUniforms {
            mouse: self.current,
            exit_start: self.exit_start,
            time: self.clock.rem_euclid(std::f64::consts::TAU) as f32,
            intensity: self.intensity,
            exit_progress: self.exit_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_idle() {
        let s = RippleState::default();
        assert_eq!(s.phase(), RipplePhase::Idle);
        assert_eq!(s.uniforms().effect_strength(), 0.0);
    }

    #[test]
    fn clock_is_folded_into_one_period() {
        let mut s = RippleState::default();
        for _ in 0..1000 {
            s.step();
        }
        let t = s.uniforms().time;
        assert!((0.0..std::f32::consts::TAU).contains(&t));
        assert!(s.clock() > 15.0);
    }
}
