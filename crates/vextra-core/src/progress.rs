//! Scroll-through progress for a container, smoothed once per frame.
//!
//! `target` is recomputed from layout geometry on every scroll/resize event;
//! `current` chases it with a fixed-factor lerp on the animation loop. The
//! fixed factor has no notion of elapsed time, so its half-life depends on the
//! frame rate. [`ScrollProgress::step_for`] is the time-corrected variant.

use crate::constants::{
    PROGRESS_LERP_FACTOR, PROGRESS_SNAP_EPSILON, PROGRESS_TAIL_VIEWPORT_FRACTION,
    REFERENCE_FRAME_HZ,
};
use std::time::Duration;

/// Layout snapshot of the tracked container, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerGeometry {
    /// Distance from the viewport top to the container top (negative once scrolled past).
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl ContainerGeometry {
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }
}

/// Normalized scroll-through progress in \[0, 1\].
pub fn target_progress(geom: &ContainerGeometry) -> f64 {
    let scrolled_past = geom.viewport_height - geom.top;
    let total = geom.height.max(0.0) + geom.viewport_height * PROGRESS_TAIL_VIEWPORT_FRACTION;
    if total.is_nan() || total <= 0.0 || !scrolled_past.is_finite() {
        return 0.0;
    }
    (scrolled_past / total).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    pub target: f64,
    pub current: f64,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, geom: &ContainerGeometry) -> f64 {
        self.target = target_progress(geom);
        self.target
    }

    /// One frame of fixed-factor smoothing.
    pub fn step(&mut self) -> f64 {
        self.advance(PROGRESS_LERP_FACTOR)
    }

    /// Frame-rate independent smoothing: matches [`step`](Self::step) at 60 Hz.
    pub fn step_for(&mut self, dt: Duration) -> f64 {
        let frames = dt.as_secs_f64() * REFERENCE_FRAME_HZ;
        let factor = 1.0 - (1.0 - PROGRESS_LERP_FACTOR).powf(frames);
        self.advance(factor.clamp(0.0, 1.0))
    }

    fn advance(&mut self, factor: f64) -> f64 {
        let next = lerp(self.current, self.target, factor);
        self.current = if (self.target - next).abs() < PROGRESS_SNAP_EPSILON {
            self.target
        } else {
            next
        };
        self.current
    }

    pub fn is_settled(&self, eps: f64) -> bool {
        (self.target - self.current).abs() <= eps
    }

    /// Trunk fill height as a CSS percentage.
    pub fn fill_percent(&self) -> f64 {
        self.current * 100.0
    }

    pub fn glow_opacity(&self) -> f64 {
        if self.current > 0.0 {
            1.0
        } else {
            0.0
        }
    }
}
