use crate::api::types::EntityId;
use crate::collision::classifier::{Collidable, SpatialQuery};
use crate::components::entity::Entity;
use crate::core::geometry::Rect;

/// Simple entity storage using a flat Vec.
/// Designed for small-to-medium entity counts (hundreds, not millions).
///
/// Insertion order is preserved: it is the order bodies are simulated and
/// the order spatial queries report overlaps.
pub struct Scene {
    entities: Vec<Entity>,
    bounds: Rect,
}

impl Scene {
    pub fn new(bounds: Rect) -> Self {
        Self {
            entities: Vec::with_capacity(256),
            bounds,
        }
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.index_of(id)?;
        Some(self.entities.remove(idx))
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn entity_at(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn entity_at_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// The player, if one is loaded.
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.player.is_some())
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities. Bounds are kept.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl SpatialQuery for Scene {
    fn overlapping(&self, rect: Rect) -> Vec<Collidable> {
        self.entities
            .iter()
            .filter_map(Entity::collidable)
            .filter(|c| c.rect.intersects(&rect))
            .collect()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 800.0, 600.0))
    }
}
