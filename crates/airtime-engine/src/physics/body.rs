use glam::Vec2;

/// Gravity applied as `vy -= gravity * dt_s`. Y grows downward, so a
/// negative value pulls bodies down.
pub const DEFAULT_GRAVITY: f32 = -9.81;

/// Fraction of velocity removed per second.
pub const DEFAULT_FRICTION: f32 = 0.15;

/// Velocity state of a simulated body.
///
/// Velocity is in world units per millisecond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub velocity: Vec2,
    pub gravity: f32,
    pub friction: f32,
    pub gravity_enabled: bool,
    /// Result of the last grounded evaluation.
    pub on_ground: bool,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            gravity_enabled: true,
            on_ground: false,
        }
    }
}

impl PhysicsBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// A body that only moves when told to: no gravity, no friction.
    pub fn kinematic() -> Self {
        Self {
            gravity_enabled: false,
            friction: 0.0,
            ..Self::default()
        }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn without_gravity(mut self) -> Self {
        self.gravity_enabled = false;
        self
    }

    /// Gravity step. A grounded body moving down stops instead.
    pub fn apply_gravity(&mut self, dt_s: f32) {
        if !self.gravity_enabled {
            return;
        }
        if self.on_ground && self.velocity.y > 0.0 {
            self.velocity.y = 0.0;
        } else {
            self.velocity.y -= self.gravity * dt_s;
        }
    }

    pub fn apply_friction(&mut self, dt_s: f32) {
        self.velocity *= 1.0 - self.friction * dt_s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_pulls_down_in_y_down_space() {
        let mut b = PhysicsBody::new();
        b.apply_gravity(1.0);
        assert!((b.velocity.y - 9.81).abs() < 0.001);
    }

    #[test]
    fn grounded_body_moving_down_stops() {
        let mut b = PhysicsBody::new().with_velocity(Vec2::new(0.3, 0.4));
        b.on_ground = true;
        b.apply_gravity(0.016);
        assert_eq!(b.velocity.y, 0.0);
        assert_eq!(b.velocity.x, 0.3);
    }

    #[test]
    fn grounded_body_moving_up_keeps_falling_normally() {
        let mut b = PhysicsBody::new().with_velocity(Vec2::new(0.0, -2.5));
        b.on_ground = true;
        b.apply_gravity(0.1);
        assert!((b.velocity.y - (-2.5 + 0.981)).abs() < 0.001);
    }

    #[test]
    fn disabled_gravity_leaves_velocity_alone() {
        let mut b = PhysicsBody::kinematic().with_velocity(Vec2::new(1.0, 1.0));
        b.apply_gravity(1.0);
        b.apply_friction(1.0);
        assert_eq!(b.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn friction_removes_a_fraction_per_second() {
        let mut b = PhysicsBody::new().with_friction(0.5).with_velocity(Vec2::new(2.0, -4.0));
        b.apply_friction(0.5);
        assert!((b.velocity.x - 1.5).abs() < 0.001);
        assert!((b.velocity.y + 3.0).abs() < 0.001);
    }
}
