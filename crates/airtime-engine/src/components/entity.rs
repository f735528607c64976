use glam::Vec2;
use crate::api::types::EntityId;
use crate::collision::classifier::Collidable;
use crate::collision::gate::DirectionalGate;
use crate::components::animation::FrameAnimation;
use crate::components::collider::Collider;
use crate::core::geometry::Rect;
use crate::entities::collectible::Collectible;
use crate::entities::level_trigger::LevelTrigger;
use crate::entities::particle::Particle;
use crate::entities::platform::MovingPlatform;
use crate::entities::player::Player;
use crate::physics::body::PhysicsBody;

/// Fat Entity: a single struct with optional components.
/// Behaviour comes from which components are present, not from a type chain.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Level tag, used to find entities by name.
    pub tag: String,
    /// Inactive entities are neither simulated, queried nor drawn.
    pub active: bool,
    /// Top-left corner of the visual rectangle in world space.
    pub pos: Vec2,
    /// Visual size in world units.
    pub size: Vec2,
    /// Rotation in degrees, for the host only.
    pub rotation: f32,
    pub z_index: i32,
    pub opacity: f32,
    /// Index into the texture manifest. `None` draws nothing.
    pub texture: Option<u32>,
    pub animation: Option<FrameAnimation>,
    pub collider: Option<Collider>,
    pub body: Option<PhysicsBody>,
    /// One-way policy. Only consulted for colliders.
    pub gate: Option<DirectionalGate>,
    pub player: Option<Player>,
    pub platform: Option<MovingPlatform>,
    pub collectible: Option<Collectible>,
    pub particle: Option<Particle>,
    pub level_trigger: Option<LevelTrigger>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            rotation: 0.0,
            z_index: 0,
            opacity: 1.0,
            texture: None,
            animation: None,
            collider: None,
            body: None,
            gate: None,
            player: None,
            platform: None,
            collectible: None,
            particle: None,
            level_trigger: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Position and size from a rectangle.
    pub fn with_rect(self, rect: Rect) -> Self {
        self.with_pos(rect.min()).with_size(rect.size())
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_texture(mut self, texture: u32) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_animation(mut self, animation: FrameAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_gate(mut self, gate: DirectionalGate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_platform(mut self, platform: MovingPlatform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_collectible(mut self, collectible: Collectible) -> Self {
        self.collectible = Some(collectible);
        self
    }

    pub fn with_particle(mut self, particle: Particle) -> Self {
        self.particle = Some(particle);
        self
    }

    pub fn with_level_trigger(mut self, trigger: LevelTrigger) -> Self {
        self.level_trigger = Some(trigger);
        self
    }

    // -- Geometry --

    pub fn visual_rect(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }

    /// Collision rectangle, or `None` for entities without a collider.
    pub fn collision_rect(&self) -> Option<Rect> {
        self.collider
            .as_ref()
            .map(|c| c.world_rect(self.visual_rect()))
    }

    /// Move the visual and collision rectangles together.
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    pub fn collision_tag(&self) -> &str {
        self.collider
            .as_ref()
            .map(|c| c.collision_tag.as_str())
            .unwrap_or("")
    }

    /// Snapshot used by spatial queries. `None` when the entity cannot collide.
    pub fn collidable(&self) -> Option<Collidable> {
        if !self.active {
            return None;
        }
        let collider = self.collider.as_ref()?;
        Some(Collidable {
            id: self.id,
            class: collider.class,
            tag: collider.collision_tag.clone(),
            rect: collider.world_rect(self.visual_rect()),
            is_trigger: collider.is_trigger,
            gate: self.gate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::filter::BodyClass;

    #[test]
    fn translate_moves_collision_rect_by_same_delta() {
        let mut e = Entity::new(EntityId(1))
            .with_rect(Rect::new(10.0, 10.0, 40.0, 40.0))
            .with_collider(Collider::new(BodyClass::Collider).with_override(Rect::new(2.0, 0.0, 20.0, 20.0)));
        let before = e.collision_rect().unwrap();
        e.translate(Vec2::new(5.0, -3.0));
        let after = e.collision_rect().unwrap();
        assert_eq!(after.min() - before.min(), Vec2::new(5.0, -3.0));
        assert_eq!(e.visual_rect().min(), Vec2::new(15.0, 7.0));
    }

    #[test]
    fn inactive_or_colliderless_entities_are_not_collidable() {
        let plain = Entity::new(EntityId(1)).with_size(Vec2::splat(10.0));
        assert!(plain.collidable().is_none());

        let mut hidden = Entity::new(EntityId(2))
            .with_size(Vec2::splat(10.0))
            .with_collider(Collider::new(BodyClass::Sprite));
        assert!(hidden.collidable().is_some());
        hidden.active = false;
        assert!(hidden.collidable().is_none());
    }
}
