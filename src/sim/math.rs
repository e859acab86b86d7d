//! Aim and collision math shared by every entity
//!
//! Everything in the playfield is a circle, so collision is a plain
//! center-distance test against the sum of radii.

use glam::Vec2;

/// Direction used when an aim is requested between coincident points
/// (straight up in canvas space, where y grows downward)
pub const DEFAULT_AIM: Vec2 = Vec2::new(0.0, -1.0);

/// Result of an aim calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    /// Unit vector from the origin point toward the target
    pub dir: Vec2,
    /// Raw (target - origin) offset
    pub delta: Vec2,
}

/// Aim from `b` toward `a`
///
/// Returns the unit direction plus the raw `a - b` delta. When the two points
/// coincide the direction falls back to [`DEFAULT_AIM`] instead of dividing
/// by zero.
pub fn calc_aim(a: Vec2, b: Vec2) -> Aim {
    let delta = a - b;
    Aim {
        dir: delta.try_normalize().unwrap_or(DEFAULT_AIM),
        delta,
    }
}

/// Anything with a circular collision footprint
pub trait Body {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
}

/// Circle-circle overlap, exclusive of exact tangency
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Check whether two bodies overlap
#[inline]
pub fn check_collision<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> bool {
    circles_overlap(a.center(), a.radius(), b.center(), b.radius())
}
