use crate::constants::{PARALLAX_SCALE, SPARKLE_DELAY_STEP_SEC};

// Fixed tables so the page lays out identically on every load.

/// Sparkle positions as (x%, y%) of the parent section.
pub const SPARKLE_POSITIONS: [(u8, u8); 15] = [
    (15, 20),
    (85, 15),
    (25, 75),
    (70, 30),
    (45, 60),
    (90, 70),
    (10, 45),
    (55, 85),
    (35, 25),
    (80, 55),
    (20, 90),
    (65, 40),
    (40, 10),
    (75, 80),
    (50, 50),
];

pub const SPARKLE_SCALES: [f32; 15] = [
    0.6, 0.8, 0.5, 0.9, 0.7, 0.55, 0.85, 0.65, 0.75, 0.95, 0.5, 0.8, 0.6, 0.7, 0.9,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub x_pct: u8,
    pub y_pct: u8,
    pub scale: f32,
    pub delay_sec: f32,
}

impl Sparkle {
    /// Inline CSS custom properties consumed by the sparkle keyframes.
    pub fn style(&self) -> String {
        format!(
            "--sparkle-delay: {}s; --sparkle-x: {}%; --sparkle-y: {}%; --sparkle-scale: {}",
            self.delay_sec, self.x_pct, self.y_pct, self.scale
        )
    }
}

pub fn sparkles() -> impl Iterator<Item = Sparkle> {
    SPARKLE_POSITIONS
        .iter()
        .zip(SPARKLE_SCALES.iter())
        .enumerate()
        .map(|(i, (&(x, y), &scale))| Sparkle {
            x_pct: x,
            y_pct: y,
            scale,
            delay_sec: i as f32 * SPARKLE_DELAY_STEP_SEC,
        })
}

/// Vertical translation of a parallax container, in px.
pub fn parallax_offset(viewport_height: f64, top: f64, speed: f64) -> f64 {
    (viewport_height - top) * speed * PARALLAX_SCALE
}
