use glam::Vec2;
use crate::api::types::{EntityId, SoundEvent};
use crate::collision::filter::BodyClass;
use crate::components::collider::Collider;
use crate::components::entity::Entity;

/// Respawn delay of a dash refill.
pub const DASH_REFILL_RESPAWN_MS: u32 = 2500;
/// Sound played when a dash refill is picked up.
pub const DASH_REFILL_SOUND: SoundEvent = SoundEvent(1);
/// Travel particles released by a pickup.
pub const PICKUP_PARTICLES: u32 = 5;
pub const PICKUP_PARTICLE_SIZE: f32 = 8.0;
/// Units per millisecond.
pub const PICKUP_PARTICLE_SPEED: f32 = 0.6;
pub const PICKUP_PARTICLE_ACCELERATION: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    Plain,
    /// Restores the player's dash. Ignored while the dash is still available.
    DashRefill,
}

/// A pickup collected by touching it.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub kind: CollectibleKind,
    /// Zero removes the pickup for good once collected.
    pub respawn_ms: u32,
    pub sound: Option<SoundEvent>,
    /// Texture of the particles flying to the collector, if any.
    pub particle_texture: Option<u32>,
}

impl Collectible {
    pub fn new(respawn_ms: u32) -> Self {
        Self {
            kind: CollectibleKind::Plain,
            respawn_ms,
            sound: None,
            particle_texture: None,
        }
    }

    pub fn dash_refill() -> Self {
        Self {
            kind: CollectibleKind::DashRefill,
            respawn_ms: DASH_REFILL_RESPAWN_MS,
            sound: Some(DASH_REFILL_SOUND),
            particle_texture: None,
        }
    }

    pub fn with_particles(mut self, texture: u32) -> Self {
        self.particle_texture = Some(texture);
        self
    }

    /// Whether a player whose dash availability is `player_can_dash` picks it up.
    pub fn wants(&self, player_can_dash: bool) -> bool {
        match self.kind {
            CollectibleKind::Plain => true,
            CollectibleKind::DashRefill => !player_can_dash,
        }
    }

    /// Trigger-only entity.
    pub fn spawn(id: EntityId, pos: Vec2, size: Vec2, collectible: Collectible) -> Entity {
        let tag = match collectible.kind {
            CollectibleKind::Plain => "Collectible",
            CollectibleKind::DashRefill => "DashRefill",
        };
        Entity::new(id)
            .with_tag(tag)
            .with_pos(pos)
            .with_size(size)
            .with_collider(Collider::trigger(BodyClass::Collectible))
            .with_collectible(collectible)
    }
}
