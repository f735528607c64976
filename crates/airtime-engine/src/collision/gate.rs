use glam::Vec2;

/// One-way collider policy.
///
/// Each flag names a direction of motion that the collider stops:
/// `bottom` blocks bodies moving down (+Y), `top` blocks bodies moving up,
/// `left` blocks bodies moving left (-X), `right` blocks bodies moving right.
/// A body moving along an unblocked direction passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalGate {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalGate {
    pub const SOLID: Self = Self {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    /// Parse side names out of a level tag such as `DirectionalCollider-TopLeft`.
    pub fn from_tag(tag: &str) -> Self {
        Self {
            top: tag.contains("Top"),
            bottom: tag.contains("Bottom"),
            left: tag.contains("Left"),
            right: tag.contains("Right"),
        }
    }

    /// Whether a body moving with `velocity` is stopped by this collider.
    ///
    /// A stationary probe is always blocked, so grounded checks treat one-way
    /// platforms as solid. Otherwise each moving axis is examined and any
    /// blocking axis blocks the whole move.
    pub fn is_blocking(&self, velocity: Vec2) -> bool {
        if velocity == Vec2::ZERO {
            return true;
        }
        (velocity.y > 0.0 && self.bottom)
            || (velocity.y < 0.0 && self.top)
            || (velocity.x < 0.0 && self.left)
            || (velocity.x > 0.0 && self.right)
    }
}
