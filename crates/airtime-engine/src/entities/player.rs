//! The controllable character.
//!
//! Movement rules (walk, jump, dash) live here as methods over the player
//! state and its [`PhysicsBody`]; the systems decide when they run.

use glam::Vec2;
use crate::api::types::EntityId;
use crate::collision::filter::BodyClass;
use crate::components::collider::Collider;
use crate::components::entity::Entity;
use crate::core::geometry::Rect;
use crate::physics::body::PhysicsBody;

/// Collision tag carried by the player and looked for by pickups and zones.
pub const PLAYER_TAG: &str = "Player";
/// Touching a blocker with this tag kills the player.
pub const KILL_ZONE_TAG: &str = "KillZone";

pub const COLLISION_OVERRIDE: Rect = Rect::new(0.0, 5.0, 56.0, 150.0);
pub const GRAVITY: f32 = -12.0;
pub const FRICTION: f32 = 0.75;
/// Units per millisecond.
pub const WALK_SPEED: f32 = 2.0;
pub const JUMP_SPEED: f32 = -2.5;
pub const DASH_SPEED: f32 = 4.0;
pub const DASH_TIME_MS: u32 = 100;
/// Below this horizontal speed a grounded player without input stops dead.
pub const STOP_SPEED: f32 = 0.75;
/// Seconds to brake from `STOP_SPEED` to zero.
pub const STOP_TIME: f32 = 0.3;

/// Visual size used when a level gives none.
pub const DEFAULT_SIZE: Vec2 = Vec2::new(96.0, 160.0);

/// Logical controls, already mapped from key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Jump,
    Dash,
}

/// Animation the host should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerAnim {
    #[default]
    Idle,
    Walk,
    Jump,
    Dash,
}

impl PlayerAnim {
    /// Wire value written into render instances.
    pub fn code(self) -> f32 {
        match self {
            PlayerAnim::Idle => 0.0,
            PlayerAnim::Walk => 1.0,
            PlayerAnim::Jump => 2.0,
            PlayerAnim::Dash => 3.0,
        }
    }
}

/// What pressing a control asks the systems to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRequest {
    Jump,
    Dash,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Held {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    held: Held,
    /// +1 facing right, -1 facing left.
    pub facing: f32,
    pub dashing: bool,
    pub can_dash: bool,
    /// Velocity added by the running dash, removed when it ends.
    pub dash_vector: Vec2,
    pub was_grounded: bool,
    pub anim: PlayerAnim,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            held: Held::default(),
            facing: 1.0,
            dashing: false,
            can_dash: true,
            dash_vector: Vec2::ZERO,
            was_grounded: false,
            anim: PlayerAnim::Idle,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full player entity: collider, tuned body and state.
    pub fn spawn(id: EntityId, pos: Vec2, size: Vec2) -> Entity {
        Entity::new(id)
            .with_tag(PLAYER_TAG)
            .with_pos(pos)
            .with_size(size)
            .with_collider(
                Collider::new(BodyClass::Player)
                    .with_collision_tag(PLAYER_TAG)
                    .with_override(COLLISION_OVERRIDE),
            )
            .with_body(PhysicsBody::new().with_gravity(GRAVITY).with_friction(FRICTION))
            .with_player(Player::new())
    }

    /// Direction from held keys, each axis in `{-1, 0, 1}`.
    pub fn input_direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| pos as i32 as f32 - neg as i32 as f32;
        Vec2::new(
            axis(self.held.left, self.held.right),
            axis(self.held.up, self.held.down),
        )
    }

    /// Key-down. Repeats of an already held key are ignored.
    pub fn press(&mut self, control: Control) -> Option<PlayerRequest> {
        match control {
            Control::Left => self.held.left = true,
            Control::Right => self.held.right = true,
            Control::Up => self.held.up = true,
            Control::Down => self.held.down = true,
            Control::Jump => return Some(PlayerRequest::Jump),
            Control::Dash => return Some(PlayerRequest::Dash),
        }
        None
    }

    pub fn release(&mut self, control: Control) {
        match control {
            Control::Left => self.held.left = false,
            Control::Right => self.held.right = false,
            Control::Up => self.held.up = false,
            Control::Down => self.held.down = false,
            Control::Jump | Control::Dash => {}
        }
    }

    /// Horizontal control for one tick. Skipped by callers while dashing.
    pub fn walk(&mut self, body: &mut PhysicsBody, elapsed_ms: u32) {
        let dt_s = elapsed_ms as f32 / 1000.0;
        let dir = self.input_direction().x;
        if self.facing * dir < 0.0 {
            self.facing = dir.signum();
        }

        let vx = body.velocity.x;
        let mut next = (vx + dir * WALK_SPEED * dt_s).clamp(-WALK_SPEED, WALK_SPEED);

        if body.on_ground {
            if dir == 0.0 || dir * vx < 0.0 {
                if next.abs() <= STOP_SPEED {
                    next = 0.0;
                    self.anim = PlayerAnim::Idle;
                } else {
                    next -= next.signum() * STOP_SPEED * dt_s / STOP_TIME;
                }
            } else {
                self.anim = PlayerAnim::Walk;
            }
        } else {
            self.anim = PlayerAnim::Jump;
        }
        body.velocity.x = next;
    }

    /// Jump if standing on something. Returns whether it happened.
    pub fn jump(&mut self, body: &mut PhysicsBody) -> bool {
        if !body.on_ground {
            return false;
        }
        body.velocity.y = JUMP_SPEED;
        self.anim = PlayerAnim::Jump;
        true
    }

    /// Start a dash toward the held direction, or straight ahead.
    /// Returns whether it started; the caller schedules [`end_dash`](Self::end_dash).
    pub fn start_dash(&mut self, body: &mut PhysicsBody) -> bool {
        if self.dashing || !self.can_dash {
            return false;
        }
        self.dashing = true;
        self.can_dash = false;

        let mut dir = self.input_direction();
        if dir == Vec2::ZERO {
            dir = Vec2::new(self.facing, 0.0);
        }
        self.dash_vector = dir.normalize() * DASH_SPEED - body.velocity;
        body.velocity += self.dash_vector;
        body.gravity_enabled = false;
        body.friction = 0.0;
        self.anim = PlayerAnim::Dash;
        true
    }

    /// Remove the dash velocity. An axis whose sign flipped (the dash was
    /// stopped by a wall) is zeroed instead of bouncing back.
    pub fn end_dash(&mut self, body: &mut PhysicsBody) {
        if !self.dashing {
            return;
        }
        self.dashing = false;

        let v = body.velocity;
        let mut next = v - self.dash_vector;
        if next.x * v.x <= 0.0 {
            next.x = 0.0;
        }
        if next.y * v.y <= 0.0 {
            next.y = 0.0;
        }
        body.velocity = next;
        self.dash_vector = Vec2::ZERO;
        body.gravity_enabled = true;
        body.friction = FRICTION;
    }

    /// Keep held keys and facing across a level reload.
    pub fn carry_input_from(&mut self, previous: &Player) {
        self.held = previous.held;
        self.facing = previous.facing;
    }

    pub fn recharge_dash(&mut self) {
        self.can_dash = true;
    }

    /// Feed the latest grounded result. Recharges the dash on the ground and
    /// returns `true` on the tick the player lands.
    pub fn after_ground_check(&mut self, grounded: bool) -> bool {
        let was = self.was_grounded;
        self.was_grounded = grounded;
        if grounded && !self.dashing {
            self.can_dash = true;
            return !was;
        }
        false
    }
}
