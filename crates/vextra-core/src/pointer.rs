//! Pointer-driven transforms: tilt cards, magnetic buttons, the showcase
//! parallax stack and the hero phone follower.
//!
//! Everything except [`PhoneFollower`] is stateless: each pointer sample is
//! turned into a fresh transform, so there is no drift between events.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Bounding box of an element in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Pointer position relative to the element center.
    #[inline]
    pub fn offset_from_center(&self, client: Vec2) -> Vec2 {
        client - self.center()
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// 3D rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// `rotate_x = dy / divisor`, `rotate_y = -dx / divisor`.
    pub fn from_offset(offset: Vec2, divisor: f32) -> Self {
        if divisor == 0.0 {
            return Self::NEUTRAL;
        }
        Self {
            rotate_x: offset.y / divisor,
            rotate_y: -offset.x / divisor,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Which flavor of tilt card the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltStyle {
    /// Problem/feature/roadmap cards: grow slightly while hovered.
    Card,
    /// Team member cards: steeper tilt and lift toward the viewer.
    TeamMember,
}

impl TiltStyle {
    pub fn divisor(self) -> f32 {
        match self {
            TiltStyle::Card => CARD_TILT_DIVISOR,
            TiltStyle::TeamMember => TEAM_TILT_DIVISOR,
        }
    }

    pub fn tilt_at(self, rect: &ElementRect, client: Vec2) -> Tilt {
        Tilt::from_offset(rect.offset_from_center(client), self.divisor())
    }

    pub fn transform(self, tilt: Tilt) -> String {
        let base = format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            PERSPECTIVE_PX, tilt.rotate_x, tilt.rotate_y
        );
        match self {
            TiltStyle::Card => format!(
                "{} scale3d({s}, {s}, {s})",
                base,
                s = CARD_HOVER_SCALE
            ),
            TiltStyle::TeamMember => format!("{} translateZ({}px)", base, TEAM_HOVER_LIFT_PX),
        }
    }

    /// Transform applied on pointer-leave.
    pub fn neutral_transform(self) -> String {
        let base = format!("perspective({}px) rotateX(0deg) rotateY(0deg)", PERSPECTIVE_PX);
        match self {
            TiltStyle::Card => format!("{} scale3d(1, 1, 1)", base),
            TiltStyle::TeamMember => format!("{} translateZ(0px)", base),
        }
    }
}

/// Translation that pulls a button toward the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Magnetic {
    pub offset: Vec2,
}

impl Magnetic {
    pub const NEUTRAL: Magnetic = Magnetic { offset: Vec2::ZERO };

    pub fn at(rect: &ElementRect, client: Vec2) -> Self {
        Self {
            offset: rect.offset_from_center(client) * MAGNETIC_DAMPING,
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.offset.x, self.offset.y)
    }
}

/// Per-card transform in the showcase stack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTransform {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub translate_z: f32,
}

impl CardTransform {
    pub fn css(&self) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg) translateZ({}px)",
            PERSPECTIVE_PX, self.rotate_y, self.rotate_x, self.translate_z
        )
    }
}

/// Transforms for `count` stacked cards from one pointer sample over the container.
///
/// Cards left of the middle tilt away, cards right of it tilt toward the
/// viewer, and each later card sits further forward.
pub fn showcase_transforms(
    container: &ElementRect,
    client: Vec2,
    count: usize,
) -> SmallVec<[CardTransform; 4]> {
    let offset = container.offset_from_center(client);
    let (nx, ny) = if container.has_area() {
        (offset.x / container.width, offset.y / container.height)
    } else {
        (0.0, 0.0)
    };
    (0..count)
        .map(|i| {
            let depth = (i as f32 - 1.0) * SHOWCASE_DEPTH_STEP;
            CardTransform {
                rotate_y: nx * SHOWCASE_ROTATE_Y_SPAN_DEG + depth * SHOWCASE_DEPTH_ROTATE_DEG,
                rotate_x: -ny * SHOWCASE_ROTATE_X_SPAN_DEG,
                translate_z: SHOWCASE_BASE_Z_PX + i as f32 * SHOWCASE_Z_STEP_PX,
            }
        })
        .collect()
}

/// Hero phone rotation that eases toward the pointer every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhoneFollower {
    target: Vec2,
    current: Vec2,
}

impl PhoneFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pointer(&mut self, rect: &ElementRect, client: Vec2) {
        self.target = rect.offset_from_center(client) / HERO_OFFSET_DIVISOR;
    }

    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * HERO_LERP_FACTOR;
        self.current
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn phone_transform(&self) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg) translateZ(0)",
            PERSPECTIVE_PX, self.current.x, -self.current.y
        )
    }

    pub fn glow_transform(&self) -> String {
        let glow = self.current * HERO_GLOW_MULTIPLIER;
        format!("translate({}px, {}px)", glow.x, glow.y)
    }
}
