use glam::Vec2;
use crate::api::types::EntityId;
use crate::collision::filter::{BodyClass, CollisionFilter, FilterMode};
use crate::components::collider::Collider;
use crate::components::entity::Entity;
use crate::physics::body::PhysicsBody;

/// Pause at the far end before heading back.
pub const RETURN_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Forth,
    Back,
}

/// Outcome of advancing a platform by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformStep {
    pub delta: Vec2,
    /// The platform reached the far end and should return after
    /// [`RETURN_DELAY_MS`].
    pub schedule_return: bool,
}

/// A platform that travels `move_vector` once stepped on, waits, then returns.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingPlatform {
    /// Leg still to travel. Flipped at the end of each leg.
    pub move_vector: Vec2,
    pub move_duration_ms: u32,
    pub heading: Heading,
    pub moving: bool,
    elapsed_ms: u32,
    travelled: Vec2,
    /// Bodies standing on the platform as of the last physics step.
    pub riders: Vec<EntityId>,
}

impl MovingPlatform {
    pub fn new(move_vector: Vec2, move_duration_ms: u32) -> Self {
        Self {
            move_vector,
            move_duration_ms,
            heading: Heading::Forth,
            moving: false,
            elapsed_ms: 0,
            travelled: Vec2::ZERO,
            riders: Vec::new(),
        }
    }

    /// Kinematic entity that reacts to nothing and blocks everything.
    pub fn spawn(id: EntityId, pos: Vec2, size: Vec2, platform: MovingPlatform) -> Entity {
        Entity::new(id)
            .with_tag("MovingPlatform")
            .with_pos(pos)
            .with_size(size)
            .with_collider(
                Collider::new(BodyClass::MovingPlatform)
                    .with_filter(CollisionFilter::none(FilterMode::Tag)),
            )
            .with_body(PhysicsBody::kinematic())
            .with_platform(platform)
    }

    /// Something landed on the platform. Starts the outbound leg when idle.
    pub fn on_stepped_on(&mut self, entity: EntityId) {
        if !self.riders.contains(&entity) {
            self.riders.push(entity);
        }
        if self.heading == Heading::Back || self.moving {
            return;
        }
        self.start_move();
    }

    pub fn start_move(&mut self) {
        self.moving = true;
        self.elapsed_ms = 0;
        self.travelled = Vec2::ZERO;
    }

    /// Advance the current leg. The last step lands exactly on the endpoint.
    pub fn advance(&mut self, elapsed_ms: u32) -> PlatformStep {
        if !self.moving {
            return PlatformStep {
                delta: Vec2::ZERO,
                schedule_return: false,
            };
        }
        self.elapsed_ms += elapsed_ms;
        if self.elapsed_ms < self.move_duration_ms {
            let delta = self.move_vector * elapsed_ms as f32 / self.move_duration_ms as f32;
            self.travelled += delta;
            return PlatformStep {
                delta,
                schedule_return: false,
            };
        }

        let delta = self.move_vector - self.travelled;
        self.moving = false;
        self.elapsed_ms = 0;
        self.travelled = Vec2::ZERO;
        self.move_vector = -self.move_vector;
        let schedule_return = match self.heading {
            Heading::Forth => {
                self.heading = Heading::Back;
                true
            }
            Heading::Back => {
                self.heading = Heading::Forth;
                false
            }
        };
        PlatformStep {
            delta,
            schedule_return,
        }
    }
}
